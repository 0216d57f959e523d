use async_trait::async_trait;
use bson::oid::ObjectId;

use crate::domain::item::model::Item;
use crate::domain::response::ServiceResponse;

#[derive(Debug)]
pub struct UpdateItemParams {
    pub id: ObjectId,
    pub sku: Option<i64>,
    pub name: Option<String>,
    pub price: Option<f64>,
}

#[async_trait]
pub trait UpdateItemUseCase: Send + Sync {
    async fn execute(&self, params: UpdateItemParams) -> ServiceResponse<Item>;
}
