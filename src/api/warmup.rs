//! `GET /` — human-readable warm-up check.
//!
//! Lets an operator (or a platform cold-start ping) confirm the instance is up
//! without knowing any API paths.

use chrono::{DateTime, Utc};

/// Format the greeting for a given instant. Split out so tests can pin the clock.
pub fn greeting(now: DateTime<Utc>) -> String {
    format!(
        "Hello! Thanks for checking in.\n\
         The lake level server is warmed-up and healthy.\n\
         Current time: {}",
        now.format("%b %-d, %Y %H:%M:%S UTC")
    )
}

pub async fn warmup() -> String {
    greeting(Utc::now())
}
