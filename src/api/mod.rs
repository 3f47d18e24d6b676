//! HTTP surface of lake-level-api.
//!
//! Handlers are deliberately thin; the only domain route is `/api/current`.

use std::sync::Arc;

use axum::{
    routing::{any, get},
    Router,
};

use crate::state::AppState;

pub mod current;
pub mod health;
pub mod request_id;
pub mod warmup;

/// Build the application router.
///
/// `/api/current` is registered for every method; the others are `GET` only.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(warmup::warmup))
        .route("/healthz", get(health::healthz))
        .route("/api/current", any(current::current))
        .with_state(state)
}
