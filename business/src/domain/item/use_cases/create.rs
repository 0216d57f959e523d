use async_trait::async_trait;

use crate::domain::item::model::Item;
use crate::domain::response::ServiceResponse;

#[derive(Debug)]
pub struct CreateItemParams {
    pub sku: i64,
    pub name: String,
    pub price: f64,
}

#[async_trait]
pub trait CreateItemUseCase: Send + Sync {
    async fn execute(&self, params: CreateItemParams) -> ServiceResponse<Item>;
}
