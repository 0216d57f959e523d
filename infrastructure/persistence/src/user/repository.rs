use async_trait::async_trait;
use bson::doc;
use bson::oid::ObjectId;
use futures_util::TryStreamExt;
use mongodb::{Collection, Database};

use business::domain::errors::RepositoryError;
use business::domain::user::model::User;
use business::domain::user::repository::UserRepository;

use crate::db::{USERS_COLLECTION, map_driver_error};

use super::entity::UserEntity;

pub struct UserRepositoryMongo {
    collection: Collection<UserEntity>,
}

impl UserRepositoryMongo {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(USERS_COLLECTION),
        }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryMongo {
    async fn find_all(&self) -> Result<Vec<User>, RepositoryError> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "created_at": -1 })
            .await
            .map_err(|e| map_driver_error(USERS_COLLECTION, "find", e))?;

        let entities: Vec<UserEntity> = cursor
            .try_collect()
            .await
            .map_err(|e| map_driver_error(USERS_COLLECTION, "find", e))?;

        Ok(entities.into_iter().map(UserEntity::into_domain).collect())
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<User>, RepositoryError> {
        let entity = self
            .collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| map_driver_error(USERS_COLLECTION, "find_one", e))?;

        Ok(entity.map(UserEntity::into_domain))
    }
}
