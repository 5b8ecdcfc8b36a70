//! In-memory patient registry.
//!
//! ## Purpose
//! Holds patient records keyed by identifier, in insertion order, behind a shared lock so the
//! same registry can be cloned into every request handler.
//!
//! ## Concurrency
//! Reads take the read lock and clone out; inserts take the write lock. No guard is returned to
//! callers, so a lock is never held across an `.await` in the REST layer.

use crate::constants::{PATIENT_ID_PREFIX, PATIENT_ID_WIDTH};
use crate::patient::{seed_patients, NewPatient, Patient};
use crate::{RegistryError, RegistryResult};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Clone, Debug, Default)]
pub struct PatientRegistry {
    patients: Arc<RwLock<Vec<Patient>>>,
}

impl PatientRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the two seed records.
    pub fn seeded() -> Self {
        Self {
            patients: Arc::new(RwLock::new(seed_patients())),
        }
    }

    /// All records in insertion order.
    pub fn list(&self) -> RegistryResult<Vec<Patient>> {
        Ok(self.read()?.clone())
    }

    /// Look up a single record by identifier.
    pub fn get(&self, id: &str) -> RegistryResult<Option<Patient>> {
        Ok(self.read()?.iter().find(|p| p.id == id).cloned())
    }

    pub fn len(&self) -> RegistryResult<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> RegistryResult<bool> {
        Ok(self.read()?.is_empty())
    }

    /// Append a record.
    ///
    /// # Errors
    /// Returns `RegistryError::DuplicateId` if a record with the same id is already held.
    pub fn insert(&self, patient: Patient) -> RegistryResult<()> {
        let mut patients = self.write()?;
        if patients.iter().any(|p| p.id == patient.id) {
            return Err(RegistryError::DuplicateId(patient.id));
        }
        patients.push(patient);
        Ok(())
    }

    /// Assign the next `pat_NNN` identifier to `new_patient` and store it.
    ///
    /// Id assignment and insertion happen under one write lock, so concurrent creates never
    /// collide.
    ///
    /// # Errors
    /// Returns `RegistryError::IdSpaceExhausted` if the highest held `pat_` number cannot be
    /// incremented, and `RegistryError::DuplicateId` if the assigned id is already held.
    pub fn create(&self, new_patient: NewPatient) -> RegistryResult<Patient> {
        let mut patients = self.write()?;
        let id = next_patient_id(&patients)?;
        if patients.iter().any(|p| p.id == id) {
            return Err(RegistryError::DuplicateId(id));
        }
        let patient = new_patient.into_patient(id);
        patients.push(patient.clone());
        tracing::debug!("registered patient {}", patient.id);
        Ok(patient)
    }

    fn read(&self) -> RegistryResult<RwLockReadGuard<'_, Vec<Patient>>> {
        self.patients.read().map_err(|_| RegistryError::LockPoisoned)
    }

    fn write(&self) -> RegistryResult<RwLockWriteGuard<'_, Vec<Patient>>> {
        self.patients.write().map_err(|_| RegistryError::LockPoisoned)
    }
}

/// One past the highest numeric suffix among `pat_<digits>` ids.
///
/// Ids that do not follow the pattern are ignored.
fn next_patient_id(patients: &[Patient]) -> RegistryResult<String> {
    let highest = patients
        .iter()
        .filter_map(|p| p.id.strip_prefix(PATIENT_ID_PREFIX))
        .filter(|suffix| !suffix.is_empty() && suffix.bytes().all(|b| b.is_ascii_digit()))
        .filter_map(|suffix| suffix.parse::<u64>().ok())
        .max();

    let next = match highest {
        None => 1,
        Some(max) => max.checked_add(1).ok_or_else(|| {
            RegistryError::IdSpaceExhausted(format!("{PATIENT_ID_PREFIX}{max}"))
        })?,
    };

    Ok(format!("{PATIENT_ID_PREFIX}{next:0width$}", width = PATIENT_ID_WIDTH))
}
