use crate::models::HealthRes;

/// Simple health service used by the REST API
///
/// This service provides a standardised way to check the health status of the backend.
#[derive(Clone, Copy, Debug, Default)]
pub struct HealthService;

impl HealthService {
    /// Static method to check health without creating an instance
    ///
    /// # Returns
    /// A `HealthRes` indicating the service is healthy.
    pub fn check_health() -> HealthRes {
        HealthRes {
            ok: true,
            message: "hdb is alive".into(),
        }
    }
}
