use axum::http::HeaderMap;

pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// Caller-supplied request id, or "-" for log fields.
pub fn request_id(headers: &HeaderMap) -> &str {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .filter(|v| !v.trim().is_empty())
        .unwrap_or("-")
}
