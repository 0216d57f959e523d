use poem_openapi::Object;
use poem_openapi::types::{ParseFromJSON, ToJSON};

use business::domain::response::{ServiceResponse, status};

use crate::api::validation::{FieldViolation, invalid_input_message};

/// Body shape shared by every route, success or failure. The HTTP status of
/// the response always equals `status_code`; `response_object` serializes as
/// an explicit `null` when empty so clients keep one parsing path.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ResponseEnvelope<T: ParseFromJSON + ToJSON> {
    pub success: bool,
    pub message: String,
    pub response_object: Option<T>,
    pub status_code: u16,
}

impl<T: ParseFromJSON + ToJSON> From<ServiceResponse<T>> for ResponseEnvelope<T> {
    fn from(response: ServiceResponse<T>) -> Self {
        Self {
            success: response.success,
            message: response.message,
            response_object: response.response_object,
            status_code: response.status_code,
        }
    }
}

/// 400 envelope naming every failing field.
pub fn invalid_input_envelope<T: ParseFromJSON + ToJSON>(
    violations: &[FieldViolation],
) -> ResponseEnvelope<T> {
    ServiceResponse::failure(invalid_input_message(violations), status::BAD_REQUEST).into()
}

/// Envelope JSON for responses built outside the OpenAPI layer (rate
/// limiting, terminal error handling).
pub fn envelope_json(message: &str, status_code: u16) -> String {
    serde_json::json!({
        "success": (200..300).contains(&status_code),
        "message": message,
        "responseObject": serde_json::Value::Null,
        "statusCode": status_code,
    })
    .to_string()
}
