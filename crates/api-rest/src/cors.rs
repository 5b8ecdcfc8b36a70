//! Cross-origin policy.
//!
//! Only allow-listed origins get CORS grants. Credentials are allowed, and because the CORS
//! protocol forbids `*` alongside credentials, any requested method and header is mirrored back
//! on preflight instead of using a wildcard.

use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

pub fn cors_layer(allowed_origins: &[HeaderValue]) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins.iter().cloned()))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}
