//! Shared application state injected into handlers via [`axum::extract::State`].

use std::time::Instant;

use bytes::Bytes;

use crate::model::{CurrentLevel, CURRENT};

/// Immutable per-process state. Handlers only read from it, so it lives behind
/// a plain `Arc` with no locking.
pub struct AppState {
    /// Pre-rendered `/api/current` body; cloning [`Bytes`] is a refcount bump.
    pub current_body: Bytes,
    /// Process start time — used to compute uptime for `/healthz`.
    pub started_at: Instant,
}

impl AppState {
    pub fn new(reading: CurrentLevel) -> Self {
        Self {
            current_body: Bytes::from(reading.to_json_body()),
            started_at: Instant::now(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(CURRENT)
    }
}
