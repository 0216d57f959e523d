use async_trait::async_trait;
use bson::oid::ObjectId;

use crate::domain::item::model::Item;
use crate::domain::response::ServiceResponse;

pub struct FindItemByIdParams {
    pub id: ObjectId,
}

#[async_trait]
pub trait FindItemByIdUseCase: Send + Sync {
    async fn execute(&self, params: FindItemByIdParams) -> ServiceResponse<Item>;
}
