use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::response::{ServiceResponse, status};
use crate::domain::user::model::User;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::find_by_id::{FindUserByIdParams, FindUserByIdUseCase};

pub struct FindUserByIdUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl FindUserByIdUseCase for FindUserByIdUseCaseImpl {
    async fn execute(&self, params: FindUserByIdParams) -> ServiceResponse<User> {
        self.logger
            .info(&format!("Fetching user by id: {}", params.id));

        match self.repository.find_by_id(params.id).await {
            Ok(Some(user)) => ServiceResponse::success("User found", user, status::OK),
            Ok(None) => ServiceResponse::failure("User not found", status::NOT_FOUND),
            Err(e) => {
                self.logger
                    .error(&format!("Error finding user {}: {}", params.id, e));
                ServiceResponse::failure(
                    "An error occurred while finding user.",
                    status::INTERNAL_SERVER_ERROR,
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use bson::oid::ObjectId;
    use chrono::Utc;
    use mockall::mock;

    mock! {
        pub UserRepo {}

        #[async_trait]
        impl UserRepository for UserRepo {
            async fn find_all(&self) -> Result<Vec<User>, RepositoryError>;
            async fn find_by_id(&self, id: ObjectId) -> Result<Option<User>, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
            fn trace(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        logger.expect_trace().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_return_user_when_exists() {
        let user_id = ObjectId::new();
        let now = Utc::now();
        let mut mock_repo = MockUserRepo::new();

        mock_repo
            .expect_find_by_id()
            .withf(move |id| *id == user_id)
            .returning(move |id| {
                Ok(Some(User {
                    id,
                    name: "Alice Carter".to_string(),
                    email: "alice.carter@example.com".to_string(),
                    age: 42,
                    created_at: now,
                    updated_at: now,
                }))
            });

        let use_case = FindUserByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let response = use_case.execute(FindUserByIdParams { id: user_id }).await;

        assert!(response.success);
        assert_eq!(response.status_code, 200);
        assert_eq!(response.message, "User found");
        let user = response.response_object.unwrap();
        assert_eq!(user.id, user_id);
        assert_eq!(user.email, "alice.carter@example.com");
    }

    #[tokio::test]
    async fn should_return_not_found_when_user_missing() {
        let mut mock_repo = MockUserRepo::new();
        mock_repo.expect_find_by_id().returning(|_| Ok(None));

        let use_case = FindUserByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let response = use_case
            .execute(FindUserByIdParams { id: ObjectId::new() })
            .await;

        assert!(!response.success);
        assert_eq!(response.status_code, 404);
        assert_eq!(response.message, "User not found");
        assert_eq!(response.response_object, None);
    }

    #[tokio::test]
    async fn should_return_generic_server_error_when_repository_fails() {
        let mut mock_repo = MockUserRepo::new();
        mock_repo
            .expect_find_by_id()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = FindUserByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let response = use_case
            .execute(FindUserByIdParams { id: ObjectId::new() })
            .await;

        assert!(!response.success);
        assert_eq!(response.status_code, 500);
        assert_eq!(response.message, "An error occurred while finding user.");
    }
}
