//! Startup errors for lake-level-api.
//!
//! Request handling has nothing that can fail, so the only typed errors are
//! the ones that stop the process before it serves traffic. `main` wraps them
//! in [`anyhow::Error`] with context and exits non-zero.

use std::net::SocketAddr;

/// Anything that prevents the server from starting.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    /// `PORT` was set but is not a valid TCP port.
    #[error("invalid PORT value `{value}`")]
    InvalidPort {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// The listener could not be bound (address in use, permission denied, ...).
    #[error("failed to bind listener on {addr}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
}
