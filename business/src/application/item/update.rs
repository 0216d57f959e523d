use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::item::model::{Item, ItemPatch};
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::update::{UpdateItemParams, UpdateItemUseCase};
use crate::domain::logger::Logger;
use crate::domain::response::{ServiceResponse, status};

pub struct UpdateItemUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateItemUseCase for UpdateItemUseCaseImpl {
    async fn execute(&self, params: UpdateItemParams) -> ServiceResponse<Item> {
        self.logger.info(&format!("Updating item: {}", params.id));

        let patch = ItemPatch {
            sku: params.sku,
            name: params.name,
            price: params.price,
        };

        match self.repository.update(params.id, patch).await {
            Ok(Some(item)) => {
                ServiceResponse::success("Item updated successfully", item, status::OK)
            }
            Ok(None) => ServiceResponse::failure("Item not found for update", status::NOT_FOUND),
            Err(e) => {
                if e == RepositoryError::Duplicated {
                    self.logger
                        .warn(&format!("Duplicate sku rejected by store: {}", e));
                } else {
                    self.logger
                        .error(&format!("Error updating item {}: {}", params.id, e));
                }
                ServiceResponse::failure(
                    "An error occurred while updating item.",
                    status::INTERNAL_SERVER_ERROR,
                )
            }
        }
    }
}
