//! Patient record types.
//!
//! ## Purpose
//! The registry holds exactly one kind of entity: a flat patient record with an identifier,
//! a display name, an age and a free-text condition. No field is validated beyond its JSON type.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A patient record as held by the registry and returned by `GET /api/patients`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Patient {
    /// Unique identifier, e.g. `pat_001`.
    pub id: String,
    pub name: String,
    pub age: u32,
    /// Free-text condition, e.g. `Hypertension`.
    pub condition: String,
}

impl Patient {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        age: u32,
        condition: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age,
            condition: condition.into(),
        }
    }
}

/// Payload accepted by the registry when created patients are persisted.
///
/// The identifier is always assigned by the registry; an `id` in the payload is ignored.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, ToSchema)]
pub struct NewPatient {
    pub name: String,
    pub age: u32,
    pub condition: String,
}

impl NewPatient {
    /// Attach an identifier, producing the record that will be stored.
    pub fn into_patient(self, id: String) -> Patient {
        Patient {
            id,
            name: self.name,
            age: self.age,
            condition: self.condition,
        }
    }
}

/// The two records every registry starts with.
pub fn seed_patients() -> Vec<Patient> {
    vec![
        Patient::new("pat_001", "Alice Smith", 45, "Hypertension"),
        Patient::new("pat_002", "Bob Johnson", 62, "Diabetes"),
    ]
}
