//! Core runtime configuration.
//!
//! This module defines configuration that should be resolved once at process startup and then
//! passed into core services. Request handlers never read environment variables.

use crate::{RegistryError, RegistryResult};

/// Core configuration resolved at startup.
#[derive(Clone, Debug, Default)]
pub struct CoreConfig {
    persist_created: bool,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// `persist_created` controls whether `POST /api/patients` stores the created patient in
    /// the registry or only echoes the payload back.
    pub fn new(persist_created: bool) -> Self {
        Self { persist_created }
    }

    pub fn persist_created(&self) -> bool {
        self.persist_created
    }
}

/// Parse the persistence flag from an optional string value.
///
/// `None` or an empty/whitespace value means "off".
pub fn persist_created_from_env_value(value: Option<String>) -> RegistryResult<bool> {
    let Some(value) = value
        .map(|v| v.trim().to_ascii_lowercase())
        .filter(|v| !v.is_empty())
    else {
        return Ok(false);
    };

    match value.as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(RegistryError::InvalidInput(format!(
            "HDB_PERSIST_CREATED must be a boolean, got {other:?}"
        ))),
    }
}
