use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::RestConfig;
use hdb_core::{config::persist_created_from_env_value, CoreConfig, PatientService};

/// Main entry point for the healthcare dashboard backend
///
/// Starts the REST server on port 8000 (configurable via `HDB_REST_ADDR`).
///
/// # Environment Variables
/// - `HDB_REST_ADDR`: REST server address (default: "0.0.0.0:8000")
/// - `HDB_CORS_ORIGINS`: comma-separated allowed origins (default: the local Vite dev server)
/// - `HDB_PERSIST_CREATED`: store created patients in memory (default: false)
/// - `RUST_LOG`: extra tracing directives
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - any configuration value is invalid,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("hdb=info".parse()?)
                .add_directive("api_rest=info".parse()?)
                .add_directive("tower_http=debug".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_cfg = RestConfig::from_env()?;
    let persist_created =
        persist_created_from_env_value(std::env::var("HDB_PERSIST_CREATED").ok())?;

    tracing::info!("++ Starting hdb REST on {}", rest_cfg.addr());
    tracing::info!("++ Allowed origins: {:?}", rest_cfg.allowed_origins());
    if persist_created {
        tracing::info!("++ Created patients are kept in memory until restart");
    }

    let patient_service = PatientService::new(Arc::new(CoreConfig::new(persist_created)));

    api_rest::serve(rest_cfg, patient_service).await
}
