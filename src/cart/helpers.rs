//! Session cookie helpers for the cart endpoints

use axum::http::{header, HeaderMap, HeaderValue};
use axum::response::Response;
use std::time::Duration;
use uuid::Uuid;

/// Name of the cookie carrying the session id
pub const SESSION_COOKIE: &str = "cart_session";

/// Extracts the session id from the `Cookie` header, or mints a new one.
///
/// Returns the id and whether it was freshly created. Cookie values that are
/// not UUIDs are ignored so clients cannot pick arbitrary store keys.
pub fn resolve_session_id(headers: &HeaderMap) -> (String, bool) {
    match session_from_headers(headers) {
        Some(id) => (id, false),
        None => (new_session_id(), true),
    }
}

/// Returns a fresh UUID in its simple (hyphen-free) form.
pub fn new_session_id() -> String {
    Uuid::new_v4().simple().to_string()
}

fn session_from_headers(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|raw| raw.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value.trim())
        .and_then(|value| Uuid::parse_str(value).ok())
        .map(|uuid| uuid.simple().to_string())
}

/// Builds the `Set-Cookie` value for a session.
pub fn session_cookie(session_id: &str, max_age: Duration) -> String {
    format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        SESSION_COOKIE,
        session_id,
        max_age.as_secs()
    )
}

/// Attaches the session cookie to `response`.
///
/// The cookie is re-sent on every cart response so its `Max-Age` slides with
/// the server-side idle timeout.
pub fn attach_session_cookie(
    mut response: Response,
    session_id: &str,
    max_age: Duration,
) -> Response {
    // Session ids are hex and the rest is fixed ASCII, so this cannot fail.
    if let Ok(value) = HeaderValue::from_str(&session_cookie(session_id, max_age)) {
        response.headers_mut().append(header::SET_COOKIE, value);
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers_with_cookie(cookie: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(cookie).unwrap());
        headers
    }

    #[test]
    fn missing_cookie_creates_session() {
        let (id, is_new) = resolve_session_id(&HeaderMap::new());
        assert!(is_new);
        assert_eq!(id.len(), 32);
    }

    #[test]
    fn existing_cookie_is_reused() {
        let id = new_session_id();
        let headers = headers_with_cookie(&format!("theme=dark; {}={}", SESSION_COOKIE, id));

        assert_eq!(resolve_session_id(&headers), (id, false));
    }

    #[test]
    fn hyphenated_uuid_is_normalized() {
        let uuid = Uuid::new_v4();
        let headers = headers_with_cookie(&format!("{}={}", SESSION_COOKIE, uuid.hyphenated()));

        let (id, is_new) = resolve_session_id(&headers);
        assert!(!is_new);
        assert_eq!(id, uuid.simple().to_string());
    }

    #[test]
    fn malformed_cookie_is_replaced() {
        let headers = headers_with_cookie(&format!("{}=../../etc", SESSION_COOKIE));
        let (id, is_new) = resolve_session_id(&headers);
        assert!(is_new);
        assert_ne!(id, "../../etc");
    }

    #[test]
    fn cookie_is_attached_to_every_response() {
        let response = attach_session_cookie(
            Response::new(axum::body::Body::empty()),
            "abc",
            Duration::from_secs(60),
        );
        let cookie = response.headers().get(header::SET_COOKIE).unwrap();
        assert_eq!(
            cookie.to_str().unwrap(),
            "cart_session=abc; Path=/; HttpOnly; SameSite=Lax; Max-Age=60"
        );
    }

    #[test]
    fn cookie_carries_max_age() {
        let cookie = session_cookie("abc", Duration::from_secs(3600));
        assert_eq!(
            cookie,
            "cart_session=abc; Path=/; HttpOnly; SameSite=Lax; Max-Age=3600"
        );
    }
}
