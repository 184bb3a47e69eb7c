//! Session start middleware.
//!
//! A request without a session cookie gets a fresh session id; an existing
//! session is passed through untouched.

use axum::{
    extract::Request,
    http::{header, HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::config::SESSION_COOKIE_NAME;

/// Session id of the current request, available as a request extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionId(pub String);

/// Session id from the request's `Cookie` headers, if any.
pub fn session_from_headers(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|cookies| cookies.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, value)| *name == SESSION_COOKIE_NAME && !value.is_empty())
        .map(|(_, value)| value.to_string())
}

pub async fn session_middleware(mut request: Request, next: Next) -> Response {
    let existing = session_from_headers(request.headers());
    let started = existing.is_none();
    let id = existing.unwrap_or_else(|| Uuid::new_v4().simple().to_string());

    request.extensions_mut().insert(SessionId(id.clone()));
    let mut response = next.run(request).await;

    if started {
        let cookie = format!("{}={}; Path=/; HttpOnly; SameSite=Lax", SESSION_COOKIE_NAME, id);
        if let Ok(value) = HeaderValue::from_str(&cookie) {
            response.headers_mut().append(header::SET_COOKIE, value);
        }
        tracing::debug!(session = %id, "Session started");
    }

    response
}
