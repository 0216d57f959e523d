use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::response::status;
use business::domain::user::use_cases::find_all::FindAllUsersUseCase;
use business::domain::user::use_cases::find_by_id::{FindUserByIdParams, FindUserByIdUseCase};

use crate::api::envelope::{ResponseEnvelope, invalid_input_envelope};
use crate::api::tags::ApiTags;
use crate::api::user::dto::UserResponse;
use crate::api::validation::parse_object_id;

pub struct UserApi {
    find_all_use_case: Arc<dyn FindAllUsersUseCase>,
    find_by_id_use_case: Arc<dyn FindUserByIdUseCase>,
}

impl UserApi {
    pub fn new(
        find_all_use_case: Arc<dyn FindAllUsersUseCase>,
        find_by_id_use_case: Arc<dyn FindUserByIdUseCase>,
    ) -> Self {
        Self {
            find_all_use_case,
            find_by_id_use_case,
        }
    }
}

/// User directory API
///
/// Read-only user endpoints. Accounts are provisioned out of band, so no
/// write routes exist here.
#[OpenApi]
impl UserApi {
    /// List all users
    ///
    /// Returns every registered user.
    #[oai(path = "/users", method = "get", tag = "ApiTags::Users")]
    async fn find_all_users(&self) -> GetUsersResponse {
        let envelope: ResponseEnvelope<Vec<UserResponse>> = self
            .find_all_use_case
            .execute()
            .await
            .map(|users| users.into_iter().map(UserResponse::from).collect())
            .into();

        match envelope.status_code {
            status::NOT_FOUND => GetUsersResponse::NotFound(Json(envelope)),
            status::INTERNAL_SERVER_ERROR => GetUsersResponse::InternalError(Json(envelope)),
            _ => GetUsersResponse::Ok(Json(envelope)),
        }
    }

    /// Get a user by ID
    ///
    /// Returns a single user by its store identifier.
    #[oai(path = "/users/:id", method = "get", tag = "ApiTags::Users")]
    async fn find_user_by_id(&self, id: Path<String>) -> GetUserResponse {
        let id = match parse_object_id(&id.0, "id") {
            Ok(id) => id,
            Err(violation) => {
                return GetUserResponse::BadRequest(Json(invalid_input_envelope(&[violation])));
            }
        };

        let envelope: ResponseEnvelope<UserResponse> = self
            .find_by_id_use_case
            .execute(FindUserByIdParams { id })
            .await
            .map(UserResponse::from)
            .into();

        match envelope.status_code {
            status::NOT_FOUND => GetUserResponse::NotFound(Json(envelope)),
            status::INTERNAL_SERVER_ERROR => GetUserResponse::InternalError(Json(envelope)),
            _ => GetUserResponse::Ok(Json(envelope)),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetUsersResponse {
    #[oai(status = 200)]
    Ok(Json<ResponseEnvelope<Vec<UserResponse>>>),
    #[oai(status = 404)]
    NotFound(Json<ResponseEnvelope<Vec<UserResponse>>>),
    #[oai(status = 500)]
    InternalError(Json<ResponseEnvelope<Vec<UserResponse>>>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetUserResponse {
    #[oai(status = 200)]
    Ok(Json<ResponseEnvelope<UserResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ResponseEnvelope<UserResponse>>),
    #[oai(status = 404)]
    NotFound(Json<ResponseEnvelope<UserResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ResponseEnvelope<UserResponse>>),
}
