//! One-shot notices carried across a redirect in a cookie.
//!
//! The cookie holds a base64url-encoded JSON array of messages. The next
//! page that renders them clears it.

use std::convert::Infallible;

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::request::Parts;
use axum::http::{HeaderMap, HeaderValue};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

pub const FLASH_COOKIE: &str = "flash";

const COOKIE_ATTRIBUTES: &str = "Path=/; HttpOnly; SameSite=Lax";

/// Longest message kept in the cookie. Escaped and base64-encoded it still
/// fits the 4 KB browsers allow per cookie.
const MAX_MESSAGE_BYTES: usize = 1024;

/// Messages queued by the previous request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flashes(Vec<String>);

impl Flashes {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_messages(self) -> Vec<String> {
        self.0
    }

    pub fn from_headers(headers: &HeaderMap) -> Self {
        let messages = headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == FLASH_COOKIE)
            .and_then(|(_, value)| decode(value))
            .unwrap_or_default();

        Self(messages)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Flashes
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_headers(&parts.headers))
    }
}

pub fn encode(messages: &[String]) -> String {
    let json = serde_json::to_vec(messages).unwrap_or_default();
    URL_SAFE_NO_PAD.encode(json)
}

pub fn decode(value: &str) -> Option<Vec<String>> {
    let bytes = URL_SAFE_NO_PAD.decode(value).ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// Cut `message` to at most [`MAX_MESSAGE_BYTES`] on a char boundary,
/// marking the cut with `...`.
fn truncate_message(message: &str) -> String {
    if message.len() <= MAX_MESSAGE_BYTES {
        return message.to_string();
    }

    let mut end = MAX_MESSAGE_BYTES - 3;
    while !message.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &message[..end])
}

/// Queue `message` for the next rendered page.
pub fn set(headers: &mut HeaderMap, message: &str) {
    let cookie = format!(
        "{}={}; {}",
        FLASH_COOKIE,
        encode(&[truncate_message(message)]),
        COOKIE_ATTRIBUTES
    );

    match HeaderValue::from_str(&cookie) {
        Ok(value) => {
            headers.append(SET_COOKIE, value);
        }
        Err(e) => tracing::warn!(error = %e, "Flash: could not encode message cookie"),
    }
}

/// Expire the flash cookie once its messages have been shown.
pub fn clear(headers: &mut HeaderMap) {
    let cookie = format!("{}=; Max-Age=0; {}", FLASH_COOKIE, COOKIE_ATTRIBUTES);
    if let Ok(value) = HeaderValue::from_str(&cookie) {
        headers.append(SET_COOKIE, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_read_back() {
        let mut response_headers = HeaderMap::new();
        set(&mut response_headers, "Venue The Musical Hop was successfully listed!");

        let set_cookie = response_headers.get(SET_COOKIE).unwrap().to_str().unwrap();
        let pair = set_cookie.split(';').next().unwrap();

        let mut request_headers = HeaderMap::new();
        request_headers.insert(
            COOKIE,
            HeaderValue::from_str(&format!("theme=dark; {}", pair)).unwrap(),
        );

        assert_eq!(
            Flashes::from_headers(&request_headers).into_messages(),
            vec!["Venue The Musical Hop was successfully listed!".to_string()]
        );
    }

    #[test]
    fn test_long_message_fits_in_one_cookie() {
        let name = "é".repeat(5000);
        let mut headers = HeaderMap::new();
        set(&mut headers, &format!("Venue {} was successfully listed!", name));

        let set_cookie = headers.get(SET_COOKIE).unwrap().to_str().unwrap();
        assert!(set_cookie.len() < 4096, "cookie is {} bytes", set_cookie.len());

        let value = set_cookie
            .split(';')
            .next()
            .and_then(|pair| pair.strip_prefix("flash="))
            .unwrap();
        let messages = decode(value).unwrap();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].starts_with("Venue éé"));
        assert!(messages[0].ends_with("..."));
        assert!(messages[0].len() <= MAX_MESSAGE_BYTES);
    }

    #[test]
    fn test_short_message_is_kept_whole() {
        assert_eq!(truncate_message("Show was successfully listed!"), "Show was successfully listed!");
    }

    #[test]
    fn test_garbage_cookie_yields_nothing() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("flash=%%%not-base64"));
        assert!(Flashes::from_headers(&headers).is_empty());
    }

    #[test]
    fn test_no_cookie_yields_nothing() {
        assert!(Flashes::from_headers(&HeaderMap::new()).is_empty());
    }

    #[test]
    fn test_clear_expires_cookie() {
        let mut headers = HeaderMap::new();
        clear(&mut headers);
        let value = headers.get(SET_COOKIE).unwrap().to_str().unwrap();
        assert!(value.starts_with("flash=;"));
        assert!(value.contains("Max-Age=0"));
    }
}
