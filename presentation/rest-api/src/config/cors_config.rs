use poem::middleware::Cors;

use super::env::{ConfigViolation, EnvMap};

/// Cross-origin policy for the single allowed origin.
#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub origin: String,
}

impl CorsConfig {
    /// Load CORS configuration from the environment snapshot
    ///
    /// Environment variables:
    /// - CORS_ORIGIN: allowed origin, must be a valid URL
    ///   (default: "http://localhost:8080")
    pub(crate) fn load(env: &EnvMap, violations: &mut Vec<ConfigViolation>) -> Self {
        let origin = super::env::url_or(env, "CORS_ORIGIN", "http://localhost:8080", violations);
        Self { origin }
    }

    /// Build the middleware for the configured origin
    ///
    /// Configuration:
    /// - Methods: GET, POST, PUT, DELETE, PATCH, OPTIONS
    /// - Headers: content-type, authorization, x-request-id
    /// - Credentials: Enabled
    pub fn middleware(&self) -> Cors {
        Cors::new()
            .allow_origin(self.origin.as_str())
            .allow_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"])
            .allow_headers(vec!["content-type", "authorization", "x-request-id"])
            .allow_credentials(true)
    }
}
