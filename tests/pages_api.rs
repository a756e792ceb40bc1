//! Home page, flash round trip, and error pages.

mod common;

use axum::http::header::SET_COOKIE;
use axum::http::StatusCode;
use common::{body_string, flash_cookie, get, get_with_cookie, post_form, MUSICAL_HOP_FORM};
use sqlx::PgPool;

#[sqlx::test(migrations = "./migrations")]
async fn test_home_renders(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["x-content-type-options"], "nosniff");
    assert!(response.headers().get(SET_COOKIE).is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_flash_is_shown_once_then_cleared(pool: PgPool) {
    let created = post_form(
        common::build_test_app(pool.clone()),
        "/venues/create",
        MUSICAL_HOP_FORM,
    )
    .await;
    let cookie = flash_cookie(&created);

    let response = get_with_cookie(common::build_test_app(pool), "/venues", &cookie).await;
    assert_eq!(response.status(), StatusCode::OK);

    let cleared = response.headers()[SET_COOKIE].to_str().unwrap().to_string();
    assert!(cleared.starts_with("flash=;"));
    assert!(cleared.contains("Max-Age=0"));

    let body = body_string(response).await;
    assert!(body.contains("Venue The Musical Hop was successfully listed!"));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_unknown_route_renders_404_page(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/this-route-does-not-exist").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_string(response).await.contains("does not exist"));
}
