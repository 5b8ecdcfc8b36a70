//! # hdb Core
//!
//! Core logic for the healthcare dashboard backend.
//!
//! This crate contains the patient data model and the in-memory registry:
//! - Seeded patient records
//! - Listing, lookup and (optionally) creation of patients
//! - Startup configuration for the registry
//!
//! **No API concerns**: HTTP servers, CORS and response shapes belong in `api-rest` or
//! `api-shared`.

pub mod config;
pub mod constants;
pub mod error;
pub mod patient;
pub mod registry;

pub use config::CoreConfig;
pub use error::{RegistryError, RegistryResult};
pub use patient::{NewPatient, Patient};
pub use registry::PatientRegistry;

use serde_json::{Map, Value};
use std::sync::Arc;

/// Patient operations behind the REST API and the CLI.
#[derive(Clone, Debug)]
pub struct PatientService {
    cfg: Arc<CoreConfig>,
    registry: PatientRegistry,
}

impl PatientService {
    /// Creates a service over a freshly seeded registry.
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self::with_registry(cfg, PatientRegistry::seeded())
    }

    /// Creates a service over an existing registry.
    pub fn with_registry(cfg: Arc<CoreConfig>, registry: PatientRegistry) -> Self {
        Self { cfg, registry }
    }

    /// Lists every patient currently held, in registry order.
    pub fn list_patients(&self) -> RegistryResult<Vec<Patient>> {
        self.registry.list()
    }

    /// Fetches one patient by identifier.
    ///
    /// # Errors
    /// Returns `RegistryError::NotFound` if no record has that id.
    pub fn get_patient(&self, id: &str) -> RegistryResult<Patient> {
        self.registry
            .get(id)?
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))
    }

    /// Handles a create request and returns the value to echo back under `patient`.
    ///
    /// With persistence off the payload is logged and returned untouched; nothing is stored.
    /// With persistence on the payload must describe a [`NewPatient`]; the stored record,
    /// including its assigned id, is returned.
    ///
    /// # Errors
    /// Returns `RegistryError::InvalidInput` if persistence is on and the payload does not
    /// describe a new patient.
    pub fn create_patient(&self, payload: Map<String, Value>) -> RegistryResult<Value> {
        let payload = Value::Object(payload);
        tracing::info!("Received patient data: {}", payload);

        if !self.cfg.persist_created() {
            return Ok(payload);
        }

        let new_patient: NewPatient = serde_json::from_value(payload)
            .map_err(|e| RegistryError::InvalidInput(e.to_string()))?;
        let patient = self.registry.create(new_patient)?;
        tracing::info!("Stored patient {}", patient.id);

        serde_json::to_value(patient).map_err(RegistryError::Serialization)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn create_without_persistence_echoes_and_stores_nothing() {
        let service = PatientService::new(Arc::new(CoreConfig::new(false)));
        let payload = json!({"name": "Carol", "anything": [1, 2, 3], "nested": {"k": null}});

        let echoed = service
            .create_patient(object(payload.clone()))
            .expect("create should succeed");

        assert_eq!(echoed, payload);
        assert_eq!(service.list_patients().unwrap().len(), 2);
    }

    #[test]
    fn create_without_persistence_accepts_empty_object() {
        let service = PatientService::new(Arc::new(CoreConfig::default()));
        let echoed = service.create_patient(Map::new()).expect("create");
        assert_eq!(echoed, json!({}));
    }

    #[test]
    fn create_with_persistence_stores_record() {
        let service = PatientService::new(Arc::new(CoreConfig::new(true)));

        let stored = service
            .create_patient(object(json!({"name": "Carol Brown", "age": 30, "condition": "Asthma"})))
            .expect("create should succeed");

        assert_eq!(
            stored,
            json!({"id": "pat_003", "name": "Carol Brown", "age": 30, "condition": "Asthma"})
        );
        let carol = service.get_patient("pat_003").expect("stored patient");
        assert_eq!(carol.condition, "Asthma");
    }

    #[test]
    fn create_with_persistence_rejects_incomplete_payload() {
        let service = PatientService::new(Arc::new(CoreConfig::new(true)));

        let err = service
            .create_patient(object(json!({"name": "No Age"})))
            .expect_err("missing fields should fail");

        assert!(matches!(err, RegistryError::InvalidInput(_)));
        assert_eq!(service.list_patients().unwrap().len(), 2);
    }

    #[test]
    fn get_unknown_patient_is_not_found() {
        let service = PatientService::new(Arc::new(CoreConfig::default()));
        let err = service.get_patient("pat_404").expect_err("should be missing");
        assert!(matches!(err, RegistryError::NotFound(id) if id == "pat_404"));
    }
}
