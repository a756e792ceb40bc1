use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::templates::HomeTemplate;
use crate::utils::error::{error_page, AppError};
use crate::utils::flash::Flashes;
use crate::utils::response::{page, take_flashes};

pub mod artists;
pub mod shows;
pub mod venues;

pub async fn index(flashes: Flashes) -> Result<Response, AppError> {
    let (flashes, shown) = take_flashes(flashes);
    page(&HomeTemplate { flashes }, shown)
}

pub async fn not_found() -> Response {
    error_page(StatusCode::NOT_FOUND)
}

/// Panics caught by `CatchPanicLayer` are logged and answered like any
/// other internal error.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    AppError::InternalServerError(format!("handler panicked: {}", detail)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use axum::routing::get;
    use axum::Router;
    use tower::ServiceExt;
    use tower_http::catch_panic::CatchPanicLayer;

    #[test]
    fn test_panic_payloads_render_server_error() {
        let response = handle_panic(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = handle_panic(Box::new(String::from("boom")));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = handle_panic(Box::new(42_u8));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_panicking_handler_gets_html_500() {
        async fn explode() -> &'static str {
            panic!("venue table exploded")
        }

        let app = Router::new()
            .route("/", get(explode))
            .layer(CatchPanicLayer::custom(handle_panic));

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.headers()["content-type"], "text/html; charset=utf-8");
    }
}
