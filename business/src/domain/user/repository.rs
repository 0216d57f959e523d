use async_trait::async_trait;
use bson::oid::ObjectId;

use crate::domain::errors::RepositoryError;

use super::model::User;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All users, newest first.
    async fn find_all(&self) -> Result<Vec<User>, RepositoryError>;
    async fn find_by_id(&self, id: ObjectId) -> Result<Option<User>, RepositoryError>;
}
