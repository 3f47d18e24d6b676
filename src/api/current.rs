//! `/api/current` — the current lake level reading.

use std::sync::Arc;

use axum::{extract::State, http::header, response::IntoResponse};

use crate::state::AppState;

/// Any method on `/api/current` — returns the pre-rendered reading.
///
/// Method, query string, headers and body are all ignored. Example response:
/// ```json
/// {"level": 3570.42, "status": "OK"}
/// ```
pub async fn current(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/json")],
        state.current_body.clone(),
    )
}
