use async_trait::async_trait;
use bson::oid::ObjectId;

use crate::domain::errors::RepositoryError;

use super::model::{Item, ItemPatch, NewItemProps};

/// Data access port for items. Lookups return `Ok(None)` when nothing
/// matches; `Err` is reserved for store failures.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// All items, newest first.
    async fn find_all(&self) -> Result<Vec<Item>, RepositoryError>;
    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Item>, RepositoryError>;
    /// Inserts and returns the persisted item with its store-assigned id
    /// and timestamps. Fails with `Duplicated` on a sku collision.
    async fn create(&self, props: NewItemProps) -> Result<Item, RepositoryError>;
    /// Applies the patch atomically and returns the post-update document.
    async fn update(&self, id: ObjectId, patch: ItemPatch) -> Result<Option<Item>, RepositoryError>;
    /// Removes the item and returns it as it was stored.
    async fn delete(&self, id: ObjectId) -> Result<Option<Item>, RepositoryError>;
}
