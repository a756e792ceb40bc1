#![allow(dead_code)]

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE};
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use gigboard_server::config::Config;
use gigboard_server::models::{ArtistInput, VenueInput};
use gigboard_server::routes::create_routes;
use gigboard_server::state::AppState;
use gigboard_server::utils::flash;

/// Build the full application router, with the same middleware stack as
/// `main.rs`, over the given test database.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = Config::from_lookup(|_| None);
    create_routes(AppState::new(pool), &config)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get_with_cookie(app: Router, uri: &str, cookie: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(COOKIE, cookie)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_form(app: Router, uri: &str, fields: &[(&str, &str)]) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(encode_form(fields)))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get(LOCATION)
        .expect("redirect without Location header")
        .to_str()
        .unwrap()
}

/// Messages queued by a redirect response.
pub fn flash_messages(response: &Response<Body>) -> Vec<String> {
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .filter_map(|value| value.split(';').next())
        .filter_map(|pair| pair.strip_prefix("flash="))
        .filter_map(flash::decode)
        .flatten()
        .collect()
}

/// `name=value` pair to send back as a request cookie.
pub fn flash_cookie(response: &Response<Body>) -> String {
    response
        .headers()
        .get(SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .unwrap()
        .to_string()
}

pub fn encode_form(fields: &[(&str, &str)]) -> String {
    serde_urlencoded::to_string(fields).unwrap()
}

pub fn venue_input(name: &str, city: &str, state: &str) -> VenueInput {
    VenueInput {
        name: name.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        address: "1015 Folsom Street".to_string(),
        phone: Some("123-123-1234".to_string()),
        genres: vec!["Jazz".to_string()],
        ..VenueInput::default()
    }
}

pub fn artist_input(name: &str) -> ArtistInput {
    ArtistInput {
        name: name.to_string(),
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        genres: vec!["Rock n Roll".to_string()],
        ..ArtistInput::default()
    }
}

pub const MUSICAL_HOP_FORM: &[(&str, &str)] = &[
    ("name", "The Musical Hop"),
    ("city", "San Francisco"),
    ("state", "CA"),
    ("address", "1015 Folsom Street"),
    ("phone", "123-123-1234"),
    ("genres", "Jazz"),
    ("genres", "Reggae"),
    ("genres", "Classical"),
    ("image_link", "https://images.example.com/musical-hop.jpg"),
    ("facebook_link", "https://www.facebook.com/TheMusicalHop"),
    ("website_link", "https://www.themusicalhop.com"),
    ("seeking_talent", "y"),
    ("seeking_description", "We are on the lookout for a local artist."),
];
