use serde::Serialize;

/// HTTP status codes the service layer speaks in.
pub mod status {
    pub const OK: u16 = 200;
    pub const CREATED: u16 = 201;
    pub const NO_CONTENT: u16 = 204;
    pub const BAD_REQUEST: u16 = 400;
    pub const NOT_FOUND: u16 = 404;
    pub const TOO_MANY_REQUESTS: u16 = 429;
    pub const INTERNAL_SERVER_ERROR: u16 = 500;
}

/// The envelope every operation terminates in. The HTTP layer mirrors it
/// one-to-one onto the response body and takes the real status from
/// `status_code`.
///
/// Invariant: `success` is true exactly when `status_code` is 2xx. The
/// constructors are the only sanctioned way to build one.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceResponse<T> {
    pub success: bool,
    pub message: String,
    pub response_object: Option<T>,
    pub status_code: u16,
}

impl<T> ServiceResponse<T> {
    /// Successful outcome carrying a payload.
    pub fn success(message: impl Into<String>, response_object: T, status_code: u16) -> Self {
        debug_assert!((200..300).contains(&status_code));
        Self {
            success: true,
            message: message.into(),
            response_object: Some(response_object),
            status_code,
        }
    }

    /// Successful outcome with no payload (deletions).
    pub fn success_empty(message: impl Into<String>, status_code: u16) -> Self {
        debug_assert!((200..300).contains(&status_code));
        Self {
            success: true,
            message: message.into(),
            response_object: None,
            status_code,
        }
    }

    /// Failed outcome; the payload slot is always empty.
    pub fn failure(message: impl Into<String>, status_code: u16) -> Self {
        debug_assert!(!(200..300).contains(&status_code));
        Self {
            success: false,
            message: message.into(),
            response_object: None,
            status_code,
        }
    }

    /// Converts the payload, keeping flag, message and status untouched.
    /// Used at the HTTP boundary to swap domain entities for DTOs.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ServiceResponse<U> {
        ServiceResponse {
            success: self.success,
            message: self.message,
            response_object: self.response_object.map(f),
            status_code: self.status_code,
        }
    }
}
