//! REST server configuration.
//!
//! Resolved once at startup from `HDB_REST_ADDR` and `HDB_CORS_ORIGINS`, then handed to
//! [`crate::serve`]. The pure `from_env_values` constructor keeps parsing testable without
//! touching process-wide environment variables.

use axum::http::HeaderValue;
use hdb_core::constants::{DEFAULT_ALLOWED_ORIGINS, DEFAULT_REST_ADDR};
use std::net::SocketAddr;

#[derive(Debug, thiserror::Error)]
pub enum RestConfigError {
    #[error("invalid bind address {addr:?}: {source}")]
    InvalidAddr {
        addr: String,
        #[source]
        source: std::net::AddrParseError,
    },
    #[error("invalid CORS origin {0:?}: must be an http:// or https:// origin")]
    InvalidOrigin(String),
}

/// REST configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct RestConfig {
    addr: SocketAddr,
    allowed_origins: Vec<HeaderValue>,
}

impl RestConfig {
    pub fn new(addr: SocketAddr, allowed_origins: Vec<HeaderValue>) -> Self {
        Self {
            addr,
            allowed_origins,
        }
    }

    /// Read `HDB_REST_ADDR` and `HDB_CORS_ORIGINS` from the process environment.
    pub fn from_env() -> Result<Self, RestConfigError> {
        Self::from_env_values(
            std::env::var("HDB_REST_ADDR").ok(),
            std::env::var("HDB_CORS_ORIGINS").ok(),
        )
    }

    /// Build a config from optional raw values, falling back to the defaults for missing or
    /// blank ones.
    pub fn from_env_values(
        addr: Option<String>,
        origins: Option<String>,
    ) -> Result<Self, RestConfigError> {
        let addr = addr
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty())
            .unwrap_or_else(|| DEFAULT_REST_ADDR.into());
        let addr = addr
            .parse::<SocketAddr>()
            .map_err(|source| RestConfigError::InvalidAddr { addr, source })?;

        Ok(Self::new(addr, parse_origins(origins)?))
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn allowed_origins(&self) -> &[HeaderValue] {
        &self.allowed_origins
    }
}

/// Parse a comma-separated origin list.
///
/// Blank entries are skipped and a trailing `/` is dropped, since browsers never send one in
/// the `Origin` header. An empty result means the defaults.
pub fn parse_origins(value: Option<String>) -> Result<Vec<HeaderValue>, RestConfigError> {
    let configured: Vec<&str> = value
        .as_deref()
        .unwrap_or_default()
        .split(',')
        .map(|o| o.trim().trim_end_matches('/'))
        .filter(|o| !o.is_empty())
        .collect();

    let origins: &[&str] = if configured.is_empty() {
        DEFAULT_ALLOWED_ORIGINS
    } else {
        &configured
    };

    origins.iter().map(|o| parse_origin(o)).collect()
}

fn parse_origin(origin: &str) -> Result<HeaderValue, RestConfigError> {
    let has_scheme = ["http://", "https://"]
        .iter()
        .any(|scheme| origin.len() > scheme.len() && origin.starts_with(scheme));
    if !has_scheme {
        return Err(RestConfigError::InvalidOrigin(origin.into()));
    }

    HeaderValue::from_str(origin).map_err(|_| RestConfigError::InvalidOrigin(origin.into()))
}
