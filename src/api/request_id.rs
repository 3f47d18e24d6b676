//! Request ID middleware for lake-level-api.
//!
//! Every inbound request is assigned an `X-Request-ID`:
//!
//! - Accepted from the caller if they already provide one
//! - Freshly generated (UUID v4) otherwise
//! - Echoed back in the `X-Request-ID` response header
//! - Wrapped in a [`tracing`] span so every log line for the request includes it

use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use tracing::Instrument as _;
use uuid::Uuid;

const HEADER: &str = "x-request-id";

/// Axum middleware that tags every request with an ID.
///
/// Apply this **inside** the `tower_http::TraceLayer` so it runs within the
/// trace span.
pub async fn request_id_middleware(req: Request, next: Next) -> Response {
    let id = req
        .headers()
        .get(HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(String::from)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let span = tracing::debug_span!("request_id", id = %id);
    let mut response = next.run(req).instrument(span).await;

    if let Ok(value) = HeaderValue::from_str(&id) {
        response.headers_mut().insert(HEADER, value);
    }

    response
}
