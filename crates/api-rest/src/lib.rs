//! # API REST
//!
//! REST API for the healthcare dashboard backend.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI documentation served as JSON
//! - REST-specific concerns (JSON serialisation, CORS, request tracing)
//!
//! Uses `api-shared` for response bodies and `hdb-core` for patient operations.

#![warn(rust_2018_idioms)]

pub mod config;
pub mod cors;
mod handlers;

pub use config::{RestConfig, RestConfigError};

use axum::{http::HeaderValue, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use api_shared::{CreatePatientRes, ErrorRes, HealthRes, Patient, RootRes};
use hdb_core::{NewPatient, PatientService};

/// Application state shared across REST API handlers
#[derive(Clone)]
pub struct AppState {
    pub patient_service: PatientService,
}

impl AppState {
    pub fn new(patient_service: PatientService) -> Self {
        Self { patient_service }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::root,
        handlers::health,
        handlers::list_patients,
        handlers::get_patient,
        handlers::create_patient,
    ),
    components(schemas(RootRes, HealthRes, Patient, NewPatient, CreatePatientRes, ErrorRes))
)]
pub struct ApiDoc;

/// Build the application router with tracing and the CORS policy applied.
pub fn router(state: AppState, allowed_origins: &[HeaderValue]) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route(
            "/api/patients",
            get(handlers::list_patients).post(handlers::create_patient),
        )
        .route("/api/patients/:id", get(handlers::get_patient))
        .route("/api-docs/openapi.json", get(handlers::openapi))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors::cors_layer(allowed_origins)),
        )
        .with_state(state)
}

/// Bind the configured address and serve until Ctrl+C or SIGTERM.
///
/// # Errors
/// Returns an error if the address cannot be bound or the server fails while running.
pub async fn serve(cfg: RestConfig, patient_service: PatientService) -> anyhow::Result<()> {
    let app = router(AppState::new(patient_service), cfg.allowed_origins());

    let listener = tokio::net::TcpListener::bind(cfg.addr()).await?;
    tracing::info!("++ Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("-- Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("-- Received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("-- Received SIGTERM, shutting down"),
    }
}
