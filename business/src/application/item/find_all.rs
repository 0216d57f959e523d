use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::item::model::Item;
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::find_all::FindAllItemsUseCase;
use crate::domain::logger::Logger;
use crate::domain::response::{ServiceResponse, status};

pub struct FindAllItemsUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl FindAllItemsUseCase for FindAllItemsUseCaseImpl {
    async fn execute(&self) -> ServiceResponse<Vec<Item>> {
        self.logger.info("Fetching all items");

        match self.repository.find_all().await {
            Ok(items) if items.is_empty() => {
                ServiceResponse::failure("No items found", status::NOT_FOUND)
            }
            Ok(items) => ServiceResponse::success("Items found", items, status::OK),
            Err(e) => {
                self.logger
                    .error(&format!("Error finding all items: {}", e));
                ServiceResponse::failure(
                    "An error occurred while retrieving items.",
                    status::INTERNAL_SERVER_ERROR,
                )
            }
        }
    }
}
