use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::item::use_cases::create::CreateItemUseCase;
use business::domain::item::use_cases::delete::{DeleteItemParams, DeleteItemUseCase};
use business::domain::item::use_cases::find_all::FindAllItemsUseCase;
use business::domain::item::use_cases::find_by_id::{FindItemByIdParams, FindItemByIdUseCase};
use business::domain::item::use_cases::update::UpdateItemUseCase;
use business::domain::response::status;

use crate::api::envelope::{ResponseEnvelope, invalid_input_envelope};
use crate::api::item::dto::{CreateItemRequest, ItemResponse, UpdateItemRequest};
use crate::api::tags::ApiTags;
use crate::api::validation::parse_object_id;

pub struct ItemApi {
    find_all_use_case: Arc<dyn FindAllItemsUseCase>,
    find_by_id_use_case: Arc<dyn FindItemByIdUseCase>,
    create_use_case: Arc<dyn CreateItemUseCase>,
    update_use_case: Arc<dyn UpdateItemUseCase>,
    delete_use_case: Arc<dyn DeleteItemUseCase>,
}

impl ItemApi {
    pub fn new(
        find_all_use_case: Arc<dyn FindAllItemsUseCase>,
        find_by_id_use_case: Arc<dyn FindItemByIdUseCase>,
        create_use_case: Arc<dyn CreateItemUseCase>,
        update_use_case: Arc<dyn UpdateItemUseCase>,
        delete_use_case: Arc<dyn DeleteItemUseCase>,
    ) -> Self {
        Self {
            find_all_use_case,
            find_by_id_use_case,
            create_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

/// Item administration API
///
/// Endpoints for creating, reading, updating, and deleting catalog items.
/// Every route answers with the uniform envelope; the HTTP status always
/// mirrors the envelope's statusCode.
#[OpenApi]
impl ItemApi {
    /// List all items
    ///
    /// Returns every item in the catalog.
    #[oai(path = "/items", method = "get", tag = "ApiTags::Items")]
    async fn find_all_items(&self) -> GetItemsResponse {
        let envelope: ResponseEnvelope<Vec<ItemResponse>> = self
            .find_all_use_case
            .execute()
            .await
            .map(|items| items.into_iter().map(ItemResponse::from).collect())
            .into();

        match envelope.status_code {
            status::NOT_FOUND => GetItemsResponse::NotFound(Json(envelope)),
            status::INTERNAL_SERVER_ERROR => GetItemsResponse::InternalError(Json(envelope)),
            _ => GetItemsResponse::Ok(Json(envelope)),
        }
    }

    /// Get an item by ID
    ///
    /// Returns a single item by its store identifier.
    #[oai(path = "/items/:itemId", method = "get", tag = "ApiTags::Items")]
    async fn find_item_by_id(
        &self,
        #[oai(name = "itemId")] item_id: Path<String>,
    ) -> GetItemResponse {
        let id = match parse_object_id(&item_id.0, "itemId") {
            Ok(id) => id,
            Err(violation) => {
                return GetItemResponse::BadRequest(Json(invalid_input_envelope(&[violation])));
            }
        };

        let envelope: ResponseEnvelope<ItemResponse> = self
            .find_by_id_use_case
            .execute(FindItemByIdParams { id })
            .await
            .map(ItemResponse::from)
            .into();

        match envelope.status_code {
            status::NOT_FOUND => GetItemResponse::NotFound(Json(envelope)),
            status::INTERNAL_SERVER_ERROR => GetItemResponse::InternalError(Json(envelope)),
            _ => GetItemResponse::Ok(Json(envelope)),
        }
    }

    /// Create a new item
    ///
    /// Creates a new catalog item. The sku must be unique across the store.
    #[oai(path = "/items", method = "post", tag = "ApiTags::Items")]
    async fn create_item(&self, body: Json<CreateItemRequest>) -> CreateItemResponse {
        let params = match body.0.try_into_params() {
            Ok(params) => params,
            Err(violations) => {
                return CreateItemResponse::BadRequest(Json(invalid_input_envelope(&violations)));
            }
        };

        let envelope: ResponseEnvelope<ItemResponse> = self
            .create_use_case
            .execute(params)
            .await
            .map(ItemResponse::from)
            .into();

        match envelope.status_code {
            status::INTERNAL_SERVER_ERROR => CreateItemResponse::InternalError(Json(envelope)),
            _ => CreateItemResponse::Created(Json(envelope)),
        }
    }

    /// Update an item
    ///
    /// Applies a partial update to an existing item. Absent fields keep
    /// their stored value.
    #[oai(path = "/items/:itemId", method = "put", tag = "ApiTags::Items")]
    async fn update_item(
        &self,
        #[oai(name = "itemId")] item_id: Path<String>,
        body: Json<UpdateItemRequest>,
    ) -> UpdateItemResponse {
        // The identifier gate runs before body validation.
        let id = match parse_object_id(&item_id.0, "itemId") {
            Ok(id) => id,
            Err(violation) => {
                return UpdateItemResponse::BadRequest(Json(invalid_input_envelope(&[violation])));
            }
        };

        let params = match body.0.try_into_params(id) {
            Ok(params) => params,
            Err(violations) => {
                return UpdateItemResponse::BadRequest(Json(invalid_input_envelope(&violations)));
            }
        };

        let envelope: ResponseEnvelope<ItemResponse> = self
            .update_use_case
            .execute(params)
            .await
            .map(ItemResponse::from)
            .into();

        match envelope.status_code {
            status::NOT_FOUND => UpdateItemResponse::NotFound(Json(envelope)),
            status::INTERNAL_SERVER_ERROR => UpdateItemResponse::InternalError(Json(envelope)),
            _ => UpdateItemResponse::Ok(Json(envelope)),
        }
    }

    /// Delete an item
    ///
    /// Permanently removes an item. Success carries no body.
    #[oai(path = "/items/:itemId", method = "delete", tag = "ApiTags::Items")]
    async fn delete_item(&self, #[oai(name = "itemId")] item_id: Path<String>) -> DeleteItemResponse {
        let id = match parse_object_id(&item_id.0, "itemId") {
            Ok(id) => id,
            Err(violation) => {
                return DeleteItemResponse::BadRequest(Json(invalid_input_envelope(&[violation])));
            }
        };

        let envelope: ResponseEnvelope<ItemResponse> = self
            .delete_use_case
            .execute(DeleteItemParams { id })
            .await
            .map(ItemResponse::from)
            .into();

        match envelope.status_code {
            status::NOT_FOUND => DeleteItemResponse::NotFound(Json(envelope)),
            status::INTERNAL_SERVER_ERROR => DeleteItemResponse::InternalError(Json(envelope)),
            _ => DeleteItemResponse::NoContent,
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetItemsResponse {
    #[oai(status = 200)]
    Ok(Json<ResponseEnvelope<Vec<ItemResponse>>>),
    #[oai(status = 404)]
    NotFound(Json<ResponseEnvelope<Vec<ItemResponse>>>),
    #[oai(status = 500)]
    InternalError(Json<ResponseEnvelope<Vec<ItemResponse>>>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetItemResponse {
    #[oai(status = 200)]
    Ok(Json<ResponseEnvelope<ItemResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ResponseEnvelope<ItemResponse>>),
    #[oai(status = 404)]
    NotFound(Json<ResponseEnvelope<ItemResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ResponseEnvelope<ItemResponse>>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateItemResponse {
    #[oai(status = 201)]
    Created(Json<ResponseEnvelope<ItemResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ResponseEnvelope<ItemResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ResponseEnvelope<ItemResponse>>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateItemResponse {
    #[oai(status = 200)]
    Ok(Json<ResponseEnvelope<ItemResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ResponseEnvelope<ItemResponse>>),
    #[oai(status = 404)]
    NotFound(Json<ResponseEnvelope<ItemResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ResponseEnvelope<ItemResponse>>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteItemResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ResponseEnvelope<ItemResponse>>),
    #[oai(status = 404)]
    NotFound(Json<ResponseEnvelope<ItemResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ResponseEnvelope<ItemResponse>>),
}
