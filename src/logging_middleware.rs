// src/logging_middleware.rs
//! Middleware for logging request and response bodies in debug mode

use axum::body::to_bytes;
use axum::{body::Body, extract::Request, middleware::Next, response::Response};
use serde_json::Value;
use tracing::debug;

use crate::common::{safe_email_log, ApiError, MAX_BODY_BYTES};

/// Middleware to log request and response bodies, with email addresses masked
///
/// Buffers at most `MAX_BODY_BYTES`, the same limit the router applies to
/// JSON extraction, so enabling it never changes which requests are accepted.
pub async fn log_request_response(request: Request, next: Next) -> Result<Response, ApiError> {
    let (parts, body) = request.into_parts();

    let bytes = to_bytes(body, MAX_BODY_BYTES).await.map_err(|_| {
        ApiError::PayloadTooLarge(format!(
            "Request body exceeds the {} byte limit",
            MAX_BODY_BYTES
        ))
    })?;

    if let Some(rendered) = render_body(&bytes) {
        debug!(
            method = %parts.method,
            uri = %parts.uri,
            request_body = %rendered,
            "📥 Request"
        );
    }

    let request = Request::from_parts(parts, Body::from(bytes));
    let response = next.run(request).await;

    let (parts, body) = response.into_parts();
    let bytes = to_bytes(body, usize::MAX)
        .await
        .map_err(|e| ApiError::InternalServer(format!("Failed to read response body: {}", e)))?;

    if let Some(rendered) = render_body(&bytes) {
        debug!(
            status = %parts.status,
            response_body = %rendered,
            "📤 Response"
        );
    }

    Ok(Response::from_parts(parts, Body::from(bytes)))
}

/// JSON bodies are re-rendered with emails masked; other text is logged as is.
fn render_body(bytes: &[u8]) -> Option<String> {
    if bytes.is_empty() {
        return None;
    }
    let text = std::str::from_utf8(bytes).ok()?;

    match serde_json::from_str::<Value>(text) {
        Ok(mut json) => {
            mask_emails(&mut json);
            Some(json.to_string())
        }
        Err(_) => Some(text.to_string()),
    }
}

fn mask_emails(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for (key, inner) in map.iter_mut() {
                match inner {
                    Value::String(s) if key == "email" => *s = safe_email_log(s),
                    other => mask_emails(other),
                }
            }
        }
        Value::Array(items) => items.iter_mut().for_each(mask_emails),
        _ => {}
    }
}
