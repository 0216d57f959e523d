use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::item::model::{Item, NewItemProps};
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::create::{CreateItemParams, CreateItemUseCase};
use crate::domain::logger::Logger;
use crate::domain::response::{ServiceResponse, status};

pub struct CreateItemUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateItemUseCase for CreateItemUseCaseImpl {
    async fn execute(&self, params: CreateItemParams) -> ServiceResponse<Item> {
        self.logger
            .info(&format!("Creating item with sku: {}", params.sku));

        let props = NewItemProps {
            sku: params.sku,
            name: params.name,
            price: params.price,
        };

        match self.repository.create(props).await {
            Ok(item) => {
                self.logger
                    .info(&format!("Item created with id: {}", item.id));
                ServiceResponse::success("Item created successfully", item, status::CREATED)
            }
            Err(e) => {
                // Duplicated stays a generic 500 for clients; the log keeps
                // the classification.
                if e == RepositoryError::Duplicated {
                    self.logger
                        .warn(&format!("Duplicate sku rejected by store: {}", e));
                } else {
                    self.logger.error(&format!("Error creating item: {}", e));
                }
                ServiceResponse::failure(
                    "An error occurred while creating item.",
                    status::INTERNAL_SERVER_ERROR,
                )
            }
        }
    }
}
