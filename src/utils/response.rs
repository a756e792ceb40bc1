use askama::Template;
use axum::response::{Html, IntoResponse, Redirect, Response};

use crate::utils::error::AppError;
use crate::utils::flash::{self, Flashes};

/// Render a page. When it displayed queued flash messages, the flash cookie
/// is expired in the same response.
pub fn page<T: Template>(template: &T, shown: bool) -> Result<Response, AppError> {
    let body = template.render()?;
    let mut response = Html(body).into_response();

    if shown {
        flash::clear(response.headers_mut());
    }

    Ok(response)
}

/// Take the incoming flashes for a template, remembering whether any were present.
pub fn take_flashes(flashes: Flashes) -> (Vec<String>, bool) {
    let shown = !flashes.is_empty();
    (flashes.into_messages(), shown)
}

/// 303 redirect carrying a flash message.
pub fn redirect_with_flash(to: &str, message: impl AsRef<str>) -> Response {
    let mut response = Redirect::to(to).into_response();
    flash::set(response.headers_mut(), message.as_ref());
    response
}

pub fn redirect(to: &str) -> Response {
    Redirect::to(to).into_response()
}
