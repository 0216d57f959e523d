use async_trait::async_trait;
use bson::oid::ObjectId;

use crate::domain::item::model::Item;
use crate::domain::response::ServiceResponse;

pub struct DeleteItemParams {
    pub id: ObjectId,
}

#[async_trait]
pub trait DeleteItemUseCase: Send + Sync {
    /// Success carries no payload (the envelope's object stays null).
    async fn execute(&self, params: DeleteItemParams) -> ServiceResponse<Item>;
}
