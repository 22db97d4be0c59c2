use axum::{
    body::{Body, Bytes},
    http::{HeaderValue, Request, StatusCode, header, response::Parts},
    middleware::Next,
    response::Response,
};
use chrono::Utc;
use serde_json::Value;

use crate::core::http::{
    request_id::REQUEST_ID_HEADER,
    envelope::{Envelope, ErrorDetail},
};

/// Prefixes axum puts in front of a `serde_path_to_error` message.
const REJECTION_PREFIXES: [&str; 2] = [
    "Failed to deserialize the JSON body into the target type: ",
    "Failed to deserialize query string: ",
];

async fn take_body(res: Response) -> (Parts, Bytes) {
    let (parts, body) = res.into_parts();
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .unwrap_or_default();
    (parts, bytes)
}

/// Field path of a deserialization error, e.g. `title` or `filters.priceRange[1]`.
fn path_from_serde_msg(msg: &str) -> Option<String> {
    let inner = REJECTION_PREFIXES
        .iter()
        .find_map(|prefix| msg.split_once(prefix).map(|(_, rest)| rest))
        .unwrap_or(msg);

    if let Some((_, rest)) = inner.split_once("missing field `") {
        return rest.split_once('`').map(|(field, _)| field.to_string());
    }

    let (path, _) = inner.split_once(": ")?;
    let looks_like_path = !path.is_empty()
        && path != "."
        && path
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '_' | '.' | '[' | ']'));
    looks_like_path.then(|| path.to_string())
}

fn hint_from_serde_msg(msg: &str) -> Option<String> {
    if msg.contains("missing field") {
        Some("This field is required.".into())
    } else if msg.contains("expected a string") {
        Some("Expected a string for this field.".into())
    } else if msg.contains("expected a boolean") {
        Some("Expected true or false for this field.".into())
    } else if msg.contains("expected a sequence") {
        Some("Expected an array for this field (e.g. [\"English\"]).".into())
    } else if msg.contains("expected a map") || msg.contains("expected struct") {
        Some("Expected a JSON object here (e.g. { \"field\": \"value\" }).".into())
    } else if msg.contains("unknown variant") {
        Some("Value is not one of the allowed options.".into())
    } else if msg.contains("invalid digit")
        || msg.contains("invalid type")
        || msg.contains("invalid value")
    {
        Some("Expected a number for this field.".into())
    } else {
        None
    }
}

/// Path and hint for an extractor rejection message; empty when neither is known.
pub(crate) fn rejection_details(msg: &str) -> Vec<ErrorDetail> {
    let detail = ErrorDetail {
        path: path_from_serde_msg(msg),
        hint: hint_from_serde_msg(msg),
    };
    if detail.path.is_none() && detail.hint.is_none() {
        Vec::new()
    } else {
        vec![detail]
    }
}

fn is_envelope(bytes: &Bytes) -> bool {
    serde_json::from_slice::<Value>(bytes)
        .map(|v| v.get("success").is_some())
        .unwrap_or(false)
}

fn ensure_request_id(parts: &mut Parts) -> String {
    if let Some(v) = parts
        .headers
        .get(REQUEST_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .filter(|v| !v.trim().is_empty())
    {
        return v.to_string();
    }
    let nanos = Utc::now()
        .timestamp_nanos_opt()
        .unwrap_or_else(|| Utc::now().timestamp_micros() * 1000);
    let id = format!("req-{nanos}");
    if let Ok(value) = HeaderValue::from_str(&id) {
        parts.headers.insert(REQUEST_ID_HEADER, value);
    }
    id
}

/// Rewrites plain-text 400/422 bodies (rejections of extractors that are not
/// routed through `AppError`, e.g. `Path`) into the shared error envelope.
/// Bodies that already are envelopes pass through.
pub async fn json_error_mapper(req: Request<Body>, next: Next) -> Response {
    let res = next.run(req).await;
    let status = res.status();

    if !(status == StatusCode::BAD_REQUEST || status == StatusCode::UNPROCESSABLE_ENTITY) {
        return res;
    }

    let (mut parts, bytes) = take_body(res).await;
    ensure_request_id(&mut parts);

    if is_envelope(&bytes) {
        return Response::from_parts(parts, bytes.into());
    }

    let raw = String::from_utf8_lossy(&bytes);

    let envelope = Envelope::<()>::fail(
        if status == StatusCode::BAD_REQUEST {
            "BAD_REQUEST"
        } else {
            "UNPROCESSABLE_ENTITY"
        },
        raw.trim(),
        rejection_details(&raw),
    );

    let body = match serde_json::to_vec(&envelope) {
        Ok(v) => v,
        Err(_) => bytes.to_vec(),
    };

    parts.headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    parts.headers.remove(header::CONTENT_LENGTH);

    Response::from_parts(parts, body.into())
}
