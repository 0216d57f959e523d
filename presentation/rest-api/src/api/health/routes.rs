use poem_openapi::{OpenApi, payload::Json};

use business::domain::response::{ServiceResponse, status};

use crate::api::envelope::ResponseEnvelope;
use crate::api::tags::ApiTags;

/// Health API for monitoring and infrastructure checks
///
/// Load balancers, container orchestrators, and uptime monitors hit this
/// endpoint to verify the service is running.
pub struct Api;

impl Api {
    pub fn new() -> Self {
        Self
    }
}

#[OpenApi]
impl Api {
    /// Health check endpoint
    ///
    /// Returns the standard envelope with no payload. Public, no
    /// authentication required.
    #[oai(path = "/health-check", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<ResponseEnvelope<String>> {
        Json(ServiceResponse::success_empty("Service is healthy", status::OK).into())
    }
}
