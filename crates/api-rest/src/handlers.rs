//! REST handlers.
//!
//! Handlers are thin: they pull what they need from the request, call `PatientService` and
//! shape the JSON body. Registry errors are mapped to a status code plus an [`ErrorRes`] body.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde_json::{Map, Value};
use utoipa::OpenApi;

use api_shared::{CreatePatientRes, ErrorRes, HealthRes, HealthService, Patient, RootRes};
use hdb_core::RegistryError;

use crate::{ApiDoc, AppState};

pub(crate) type ApiError = (StatusCode, Json<ErrorRes>);

/// Map a registry error to the response sent to the client.
///
/// Internal failures are logged in full and reported with a generic message.
fn error_response(err: RegistryError) -> ApiError {
    let status = match &err {
        RegistryError::NotFound(_) => StatusCode::NOT_FOUND,
        RegistryError::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
        RegistryError::DuplicateId(_) | RegistryError::IdSpaceExhausted(_) => {
            StatusCode::CONFLICT
        }
        RegistryError::LockPoisoned | RegistryError::Serialization(_) => {
            tracing::error!("Patient registry error: {:?}", err);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorRes::new("Internal error")),
            );
        }
    };
    (status, Json(ErrorRes::new(err.to_string())))
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Welcome message", body = RootRes)
    )
)]
/// Root endpoint returning the fixed welcome message.
#[axum::debug_handler]
pub(crate) async fn root() -> Json<RootRes> {
    Json(RootRes::welcome())
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks.
#[axum::debug_handler]
pub(crate) async fn health() -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/api/patients",
    responses(
        (status = 200, description = "List of patients", body = [Patient]),
        (status = 500, description = "Internal server error", body = ErrorRes)
    )
)]
/// List all patients in the registry
///
/// # Returns
/// * `Ok(Json<Vec<Patient>>)` - Every record currently held, in registry order
/// * `Err(ApiError)` - Internal server error if the registry cannot be read
#[axum::debug_handler]
pub(crate) async fn list_patients(
    State(state): State<AppState>,
) -> Result<Json<Vec<Patient>>, ApiError> {
    state
        .patient_service
        .list_patients()
        .map(Json)
        .map_err(error_response)
}

#[utoipa::path(
    get,
    path = "/api/patients/{id}",
    params(
        ("id" = String, Path, description = "Patient identifier, e.g. pat_001")
    ),
    responses(
        (status = 200, description = "Patient record", body = Patient),
        (status = 404, description = "Patient not found", body = ErrorRes),
        (status = 500, description = "Internal server error", body = ErrorRes)
    )
)]
#[axum::debug_handler]
pub(crate) async fn get_patient(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Patient>, ApiError> {
    state
        .patient_service
        .get_patient(&id)
        .map(Json)
        .map_err(error_response)
}

#[utoipa::path(
    post,
    path = "/api/patients",
    request_body(
        content = Object,
        description = "Any JSON object. With persistence enabled it must also be a valid \
                       NewPatient (name, age, condition)"
    ),
    responses(
        (status = 200, description = "Payload received", body = CreatePatientRes),
        (status = 409, description = "No patient id could be assigned", body = ErrorRes),
        (status = 415, description = "Missing `Content-Type: application/json` (plain-text body)"),
        (status = 422, description = "Body is not a JSON object (plain-text body), or with \
                                      persistence enabled not a valid new patient (ErrorRes JSON)"),
        (status = 500, description = "Internal server error", body = ErrorRes)
    )
)]
/// Create a new patient record
///
/// Echoes the received object back under `patient`. When persistence is enabled the object is
/// stored as a new patient and the stored record, with its assigned id, is echoed instead.
///
/// # Errors
/// Returns `422 Unprocessable Entity` if persistence is enabled and the payload is not a valid
/// new patient.
#[axum::debug_handler]
pub(crate) async fn create_patient(
    State(state): State<AppState>,
    Json(payload): Json<Map<String, Value>>,
) -> Result<Json<CreatePatientRes>, ApiError> {
    state
        .patient_service
        .create_patient(payload)
        .map(|patient| Json(CreatePatientRes::created(patient)))
        .map_err(error_response)
}

/// OpenAPI document for this API.
#[axum::debug_handler]
pub(crate) async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
