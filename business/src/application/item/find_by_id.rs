use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::item::model::Item;
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::find_by_id::{FindItemByIdParams, FindItemByIdUseCase};
use crate::domain::logger::Logger;
use crate::domain::response::{ServiceResponse, status};

pub struct FindItemByIdUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl FindItemByIdUseCase for FindItemByIdUseCaseImpl {
    async fn execute(&self, params: FindItemByIdParams) -> ServiceResponse<Item> {
        self.logger
            .info(&format!("Fetching item by id: {}", params.id));

        match self.repository.find_by_id(params.id).await {
            Ok(Some(item)) => ServiceResponse::success("Item found", item, status::OK),
            Ok(None) => ServiceResponse::failure("Item not found", status::NOT_FOUND),
            Err(e) => {
                self.logger
                    .error(&format!("Error finding item {}: {}", params.id, e));
                ServiceResponse::failure(
                    "An error occurred while finding item.",
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
    use crate::domain::item::model::{ItemPatch, NewItemProps};
    use bson::oid::ObjectId;
    use chrono::Utc;
    use mockall::mock;

    mock! {
        pub ItemRepo {}

        #[async_trait]
        impl ItemRepository for ItemRepo {
            async fn find_all(&self) -> Result<Vec<Item>, RepositoryError>;
            async fn find_by_id(&self, id: ObjectId) -> Result<Option<Item>, RepositoryError>;
            async fn create(&self, props: NewItemProps) -> Result<Item, RepositoryError>;
            async fn update(&self, id: ObjectId, patch: ItemPatch) -> Result<Option<Item>, RepositoryError>;
            async fn delete(&self, id: ObjectId) -> Result<Option<Item>, RepositoryError>;
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
    async fn should_return_item_when_exists() {
        let item_id = ObjectId::new();
        let now = Utc::now();
        let mut mock_repo = MockItemRepo::new();

        mock_repo
            .expect_find_by_id()
            .withf(move |id| *id == item_id)
            .returning(move |id| {
                Ok(Some(Item {
                    id,
                    sku: 4820,
                    name: "Mechanical Pencil".to_string(),
                    price: 3.75,
                    created_at: now,
                    updated_at: now,
                }))
            });

        let use_case = FindItemByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let response = use_case.execute(FindItemByIdParams { id: item_id }).await;

        assert!(response.success);
        assert_eq!(response.status_code, 200);
        assert_eq!(response.message, "Item found");
        let item = response.response_object.unwrap();
        assert_eq!(item.id, item_id);
        assert_eq!(item.name, "Mechanical Pencil");
    }

    #[tokio::test]
    async fn should_return_not_found_when_item_missing() {
        let mut mock_repo = MockItemRepo::new();
        mock_repo.expect_find_by_id().returning(|_| Ok(None));

        let use_case = FindItemByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let response = use_case
            .execute(FindItemByIdParams { id: ObjectId::new() })
            .await;

        assert!(!response.success);
        assert_eq!(response.status_code, 404);
        assert_eq!(response.message, "Item not found");
        assert_eq!(response.response_object, None);
    }

    #[tokio::test]
    async fn should_hide_driver_detail_when_repository_fails() {
        let mut mock_repo = MockItemRepo::new();
        mock_repo
            .expect_find_by_id()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = FindItemByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let response = use_case
            .execute(FindItemByIdParams { id: ObjectId::new() })
            .await;

        assert!(!response.success);
        assert_eq!(response.status_code, 500);
        assert_eq!(response.message, "An error occurred while finding item.");
        assert!(!response.message.contains("repository.database_error"));
    }
}
