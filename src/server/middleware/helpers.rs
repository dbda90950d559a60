//! Helper functions for middleware and handlers

use actix_web::HttpRequest;
use actix_web::http::header::HeaderMap;

/// Extract the session token from request headers.
///
/// Accepts `Authorization: Bearer <token>`, the `X-Session-Token` header, or
/// a `session=` cookie, in that order.
pub fn extract_session_token(headers: &HeaderMap) -> Option<String> {
    if let Some(auth_header) = headers.get("authorization") {
        if let Ok(auth_str) = auth_header.to_str() {
            if let Some(stripped) = auth_str.strip_prefix("Bearer ") {
                return Some(stripped.to_string());
            }
        }
    }

    if let Some(token_header) = headers.get("x-session-token") {
        if let Ok(token) = token_header.to_str() {
            return Some(token.to_string());
        }
    }

    if let Some(cookie_header) = headers.get("cookie") {
        if let Ok(cookie_str) = cookie_header.to_str() {
            for cookie in cookie_str.split(';') {
                if let Some(stripped) = cookie.trim().strip_prefix("session=") {
                    return Some(stripped.to_string());
                }
            }
        }
    }

    None
}

/// Client identifier for rate limiting
pub fn client_ip(req: &HttpRequest) -> String {
    req.connection_info()
        .realip_remote_addr()
        .map(|s| s.to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
