use async_trait::async_trait;
use bson::oid::ObjectId;

use crate::domain::response::ServiceResponse;
use crate::domain::user::model::User;

pub struct FindUserByIdParams {
    pub id: ObjectId,
}

#[async_trait]
pub trait FindUserByIdUseCase: Send + Sync {
    async fn execute(&self, params: FindUserByIdParams) -> ServiceResponse<User>;
}
