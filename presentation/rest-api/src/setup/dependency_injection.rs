use std::sync::Arc;

use logger::TracingLogger;
use persistence::item::repository::ItemRepositoryMongo;
use persistence::user::repository::UserRepositoryMongo;

use business::application::item::create::CreateItemUseCaseImpl;
use business::application::item::delete::DeleteItemUseCaseImpl;
use business::application::item::find_all::FindAllItemsUseCaseImpl;
use business::application::item::find_by_id::FindItemByIdUseCaseImpl;
use business::application::item::update::UpdateItemUseCaseImpl;
use business::application::user::find_all::FindAllUsersUseCaseImpl;
use business::application::user::find_by_id::FindUserByIdUseCaseImpl;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub item_api: crate::api::item::routes::ItemApi,
    pub user_api: crate::api::user::routes::UserApi,
}

impl DependencyContainer {
    pub fn new(database: &mongodb::Database) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let item_repository = Arc::new(ItemRepositoryMongo::new(database));
        let user_repository = Arc::new(UserRepositoryMongo::new(database));

        // Item use cases
        let find_all_items_use_case = Arc::new(FindAllItemsUseCaseImpl {
            repository: item_repository.clone(),
            logger: logger.clone(),
        });
        let find_item_by_id_use_case = Arc::new(FindItemByIdUseCaseImpl {
            repository: item_repository.clone(),
            logger: logger.clone(),
        });
        let create_item_use_case = Arc::new(CreateItemUseCaseImpl {
            repository: item_repository.clone(),
            logger: logger.clone(),
        });
        let update_item_use_case = Arc::new(UpdateItemUseCaseImpl {
            repository: item_repository.clone(),
            logger: logger.clone(),
        });
        let delete_item_use_case = Arc::new(DeleteItemUseCaseImpl {
            repository: item_repository,
            logger: logger.clone(),
        });

        // User use cases
        let find_all_users_use_case = Arc::new(FindAllUsersUseCaseImpl {
            repository: user_repository.clone(),
            logger: logger.clone(),
        });
        let find_user_by_id_use_case = Arc::new(FindUserByIdUseCaseImpl {
            repository: user_repository,
            logger,
        });

        let item_api = crate::api::item::routes::ItemApi::new(
            find_all_items_use_case,
            find_item_by_id_use_case,
            create_item_use_case,
            update_item_use_case,
            delete_item_use_case,
        );

        let user_api = crate::api::user::routes::UserApi::new(
            find_all_users_use_case,
            find_user_by_id_use_case,
        );

        Self {
            health_api,
            item_api,
            user_api,
        }
    }
}
