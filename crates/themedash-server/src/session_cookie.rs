//! Session identity carried in a cookie.

use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, HeaderValue};
use axum::response::Response;
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "themedash_session";

/// Extracts the session id from the request's `Cookie` headers.
///
/// Malformed values are ignored, which makes the caller start a new session.
pub fn session_id(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok())
}

pub fn set_cookie_value(id: Uuid) -> HeaderValue {
    let cookie = format!("{SESSION_COOKIE}={id}; Path=/; HttpOnly; SameSite=Lax");
    // A hyphenated uuid and fixed attributes are always valid header text.
    HeaderValue::from_str(&cookie).unwrap_or_else(|_| HeaderValue::from_static(""))
}

/// Attaches the session cookie when the session was created by this request.
pub fn attach(mut response: Response, id: Uuid, created: bool) -> Response {
    if created {
        response
            .headers_mut()
            .append(SET_COOKIE, set_cookie_value(id));
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(cookies: &[&str]) -> HeaderMap {
        let mut headers = HeaderMap::new();
        for cookie in cookies {
            headers.append(COOKIE, HeaderValue::from_str(cookie).unwrap());
        }
        headers
    }

    #[test]
    fn test_session_id_among_other_cookies() {
        let id = Uuid::new_v4();
        let h = headers(&[&format!("theme=x; {SESSION_COOKIE}={id}; other=1")]);
        assert_eq!(session_id(&h), Some(id));
    }

    #[test]
    fn test_session_id_in_second_header() {
        let id = Uuid::new_v4();
        let h = headers(&["a=b", &format!("{SESSION_COOKIE}={id}")]);
        assert_eq!(session_id(&h), Some(id));
    }

    #[test]
    fn test_session_id_missing_or_malformed() {
        assert_eq!(session_id(&headers(&[])), None);
        assert_eq!(
            session_id(&headers(&[&format!("{SESSION_COOKIE}=not-a-uuid")])),
            None
        );
    }

    #[test]
    fn test_set_cookie_attributes() {
        let id = Uuid::new_v4();
        let value = set_cookie_value(id);
        let text = value.to_str().unwrap();
        assert!(text.starts_with(&format!("{SESSION_COOKIE}={id};")));
        assert!(text.contains("HttpOnly"));
        assert!(text.contains("SameSite=Lax"));
    }
}
