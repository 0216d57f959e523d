use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::response::{ServiceResponse, status};
use crate::domain::user::model::User;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::find_all::FindAllUsersUseCase;

pub struct FindAllUsersUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl FindAllUsersUseCase for FindAllUsersUseCaseImpl {
    async fn execute(&self) -> ServiceResponse<Vec<User>> {
        self.logger.info("Fetching all users");

        match self.repository.find_all().await {
            Ok(users) if users.is_empty() => {
                ServiceResponse::failure("No users found", status::NOT_FOUND)
            }
            Ok(users) => ServiceResponse::success("Users found", users, status::OK),
            Err(e) => {
                self.logger
                    .error(&format!("Error finding all users: {}", e));
                ServiceResponse::failure(
                    "An error occurred while retrieving users.",
                    status::INTERNAL_SERVER_ERROR,
                )
            }
        }
    }
}
