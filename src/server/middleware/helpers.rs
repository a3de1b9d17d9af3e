//! Helper functions for middleware and handlers

use super::request_id::RequestId;
use actix_web::http::header::HeaderMap;
use actix_web::{HttpMessage, HttpRequest};

pub const API_KEY_HEADER: &str = "x-api-key";

/// Extract the API key from the `X-API-Key` header
pub fn extract_api_key(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|key| !key.is_empty())
}

/// Peer address of the caller, `unknown` when unavailable
pub fn client_ip(req: &HttpRequest) -> String {
    req.connection_info()
        .peer_addr()
        .unwrap_or("unknown")
        .to_string()
}

/// Correlation id assigned by the request id middleware
pub fn request_id(req: &HttpRequest) -> Option<String> {
    req.extensions().get::<RequestId>().map(|id| id.0.clone())
}

/// Compare two strings without short-circuiting on the first mismatch
pub(crate) fn constant_time_eq(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (a_byte, b_byte) in a.bytes().zip(b.bytes()) {
        result |= a_byte ^ b_byte;
    }

    result == 0
}
