use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::item::model::Item;
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::delete::{DeleteItemParams, DeleteItemUseCase};
use crate::domain::logger::Logger;
use crate::domain::response::{ServiceResponse, status};

pub struct DeleteItemUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteItemUseCase for DeleteItemUseCaseImpl {
    async fn execute(&self, params: DeleteItemParams) -> ServiceResponse<Item> {
        self.logger.info(&format!("Deleting item: {}", params.id));

        match self.repository.delete(params.id).await {
            Ok(Some(_)) => {
                self.logger.info(&format!("Item deleted: {}", params.id));
                ServiceResponse::success_empty("Item deleted successfully", status::NO_CONTENT)
            }
            Ok(None) => ServiceResponse::failure("Item not found for deletion", status::NOT_FOUND),
            Err(e) => {
                self.logger
                    .error(&format!("Error deleting item {}: {}", params.id, e));
                ServiceResponse::failure(
                    "An error occurred while deleting item.",
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
    async fn should_delete_item_and_carry_no_payload() {
        let item_id = ObjectId::new();
        let mut mock_repo = MockItemRepo::new();

        mock_repo
            .expect_delete()
            .withf(move |id| *id == item_id)
            .returning(|id| {
                let now = Utc::now();
                Ok(Some(Item {
                    id,
                    sku: 512,
                    name: "Notebook".to_string(),
                    price: 2.2,
                    created_at: now,
                    updated_at: now,
                }))
            });

        let use_case = DeleteItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let response = use_case.execute(DeleteItemParams { id: item_id }).await;

        assert!(response.success);
        assert_eq!(response.status_code, 204);
        assert_eq!(response.message, "Item deleted successfully");
        assert_eq!(response.response_object, None);
    }

    #[tokio::test]
    async fn should_return_not_found_on_second_delete() {
        let item_id = ObjectId::new();
        let mut mock_repo = MockItemRepo::new();

        let mut first = true;
        mock_repo.expect_delete().times(2).returning(move |id| {
            if first {
                first = false;
                let now = Utc::now();
                Ok(Some(Item {
                    id,
                    sku: 512,
                    name: "Notebook".to_string(),
                    price: 2.2,
                    created_at: now,
                    updated_at: now,
                }))
            } else {
                Ok(None)
            }
        });

        let use_case = DeleteItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let deleted = use_case.execute(DeleteItemParams { id: item_id }).await;
        let repeated = use_case.execute(DeleteItemParams { id: item_id }).await;

        assert!(deleted.success);
        assert_eq!(deleted.status_code, 204);
        assert!(!repeated.success);
        assert_eq!(repeated.status_code, 404);
        assert_eq!(repeated.message, "Item not found for deletion");
    }

    #[tokio::test]
    async fn should_return_generic_server_error_when_delete_fails() {
        let mut mock_repo = MockItemRepo::new();
        mock_repo
            .expect_delete()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = DeleteItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let response = use_case
            .execute(DeleteItemParams { id: ObjectId::new() })
            .await;

        assert!(!response.success);
        assert_eq!(response.status_code, 500);
        assert_eq!(response.message, "An error occurred while deleting item.");
    }
}
