//! # API Shared
//!
//! Shared utilities and definitions for the hdb APIs.
//!
//! Contains:
//! - Response bodies (`models` module)
//! - Shared services like `HealthService`
//!
//! Used by `api-rest` for common functionality.

pub mod health;
pub mod models;

pub use health::HealthService;
pub use models::*;
