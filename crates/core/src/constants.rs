//! Constants used throughout the hdb core crate.
//!
//! Fixed messages and defaults live here so the REST layer, the CLI and the tests agree on them.

/// Message returned by `GET /`.
pub const WELCOME_MESSAGE: &str = "Welcome to the healthcare dashboard backend!";

/// Message returned alongside the echoed payload by `POST /api/patients`.
pub const PATIENT_CREATED_MESSAGE: &str = "Patient created successfully";

/// Prefix for registry-assigned patient identifiers.
pub const PATIENT_ID_PREFIX: &str = "pat_";

/// Minimum number of digits in a registry-assigned identifier (`pat_001`).
pub const PATIENT_ID_WIDTH: usize = 3;

/// Default REST bind address when `HDB_REST_ADDR` is not set.
pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:8000";

/// Origins allowed to make cross-origin requests when `HDB_CORS_ORIGINS` is not set.
///
/// These are the addresses the Vite dev server uses for the dashboard frontend.
pub const DEFAULT_ALLOWED_ORIGINS: &[&str] = &["http://localhost:5173", "http://127.0.0.1:5173"];
