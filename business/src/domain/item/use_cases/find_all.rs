use async_trait::async_trait;

use crate::domain::item::model::Item;
use crate::domain::response::ServiceResponse;

#[async_trait]
pub trait FindAllItemsUseCase: Send + Sync {
    async fn execute(&self) -> ServiceResponse<Vec<Item>>;
}
