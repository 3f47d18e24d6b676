//! Runtime configuration for lake-level-api.
//!
//! Everything comes from the environment; there is no config file. The only
//! setting is the listening port:
//!
//! ```text
//! PORT=9999 lake-level-api
//! ```
//!
//! An unset or empty `PORT` falls back to 8080. Anything else must parse as a
//! `u16` or startup fails.

use std::net::{Ipv4Addr, SocketAddr};

use crate::error::StartupError;

/// Name of the environment variable holding the listening port.
pub const PORT_VAR: &str = "PORT";

/// Top-level service configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// TCP port to listen on, across all interfaces (default: 8080).
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: defaults::port(),
        }
    }
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, StartupError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Tests use this to avoid touching the real process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, StartupError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup(PORT_VAR).filter(|v| !v.is_empty()) {
            None => defaults::port(),
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|source| StartupError::InvalidPort { value: raw, source })?,
        };
        Ok(Self { port })
    }

    /// Socket address the listener binds: `0.0.0.0:<port>`.
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

mod defaults {
    pub fn port() -> u16 { 8080 }
}
