//! JSON bodies returned by the REST API.
//!
//! Field names are the wire names; dashboard clients read them directly.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

pub use hdb_core::Patient;

/// Body of `GET /`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RootRes {
    pub message: String,
}

impl RootRes {
    pub fn welcome() -> Self {
        Self {
            message: hdb_core::constants::WELCOME_MESSAGE.into(),
        }
    }
}

/// Body of `GET /health`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Body of `POST /api/patients`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreatePatientRes {
    pub message: String,
    /// The received payload, or the stored record when persistence is enabled.
    #[schema(value_type = Object)]
    pub patient: Value,
}

impl CreatePatientRes {
    pub fn created(patient: Value) -> Self {
        Self {
            message: hdb_core::constants::PATIENT_CREATED_MESSAGE.into(),
            patient,
        }
    }
}

/// Body returned alongside non-2xx statuses raised by the handlers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorRes {
    pub error: String,
}

impl ErrorRes {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn welcome_body_matches_wire_format() {
        assert_eq!(
            serde_json::to_value(RootRes::welcome()).unwrap(),
            json!({"message": "Welcome to the healthcare dashboard backend!"})
        );
    }

    #[test]
    fn created_body_nests_payload_under_patient() {
        let body = CreatePatientRes::created(json!({"name": "Carol"}));
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({
                "message": "Patient created successfully",
                "patient": {"name": "Carol"}
            })
        );
    }
}
