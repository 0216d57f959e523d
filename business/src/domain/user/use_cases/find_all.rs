use async_trait::async_trait;

use crate::domain::response::ServiceResponse;
use crate::domain::user::model::User;

#[async_trait]
pub trait FindAllUsersUseCase: Send + Sync {
    async fn execute(&self) -> ServiceResponse<Vec<User>>;
}
