#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("patient id already exists: {0}")]
    DuplicateId(String),
    #[error("no patient ids left to assign after {0}")]
    IdSpaceExhausted(String),
    #[error("patient not found: {0}")]
    NotFound(String),
    #[error("patient registry lock poisoned")]
    LockPoisoned,
    #[error("failed to serialize patient: {0}")]
    Serialization(serde_json::Error),
}

pub type RegistryResult<T> = std::result::Result<T, RegistryError>;
