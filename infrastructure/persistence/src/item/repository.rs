use async_trait::async_trait;
use bson::oid::ObjectId;
use bson::{Document, doc};
use chrono::Utc;
use futures_util::TryStreamExt;
use mongodb::options::ReturnDocument;
use mongodb::{Collection, Database};

use business::domain::errors::RepositoryError;
use business::domain::item::model::{Item, ItemPatch, NewItemProps};
use business::domain::item::repository::ItemRepository;

use crate::db::{ITEMS_COLLECTION, map_driver_error};

use super::entity::ItemEntity;

pub struct ItemRepositoryMongo {
    collection: Collection<ItemEntity>,
}

impl ItemRepositoryMongo {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(ITEMS_COLLECTION),
        }
    }
}

// `$set` payload for a patch. Always bumps updated_at, even when the patch
// carries nothing else.
fn update_document(patch: ItemPatch) -> Document {
    let mut set = doc! { "updated_at": bson::DateTime::from_chrono(Utc::now()) };
    if let Some(sku) = patch.sku {
        set.insert("sku", sku);
    }
    if let Some(name) = patch.name {
        set.insert("name", name);
    }
    if let Some(price) = patch.price {
        set.insert("price", price);
    }
    doc! { "$set": set }
}

#[async_trait]
impl ItemRepository for ItemRepositoryMongo {
    async fn find_all(&self) -> Result<Vec<Item>, RepositoryError> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "created_at": -1 })
            .await
            .map_err(|e| map_driver_error(ITEMS_COLLECTION, "find", e))?;

        let entities: Vec<ItemEntity> = cursor
            .try_collect()
            .await
            .map_err(|e| map_driver_error(ITEMS_COLLECTION, "find", e))?;

        Ok(entities.into_iter().map(ItemEntity::into_domain).collect())
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Item>, RepositoryError> {
        let entity = self
            .collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| map_driver_error(ITEMS_COLLECTION, "find_one", e))?;

        Ok(entity.map(ItemEntity::into_domain))
    }

    async fn create(&self, props: NewItemProps) -> Result<Item, RepositoryError> {
        let now = Utc::now();
        let entity = ItemEntity {
            id: ObjectId::new(),
            sku: props.sku,
            name: props.name,
            price: props.price,
            created_at: now,
            updated_at: now,
        };

        self.collection
            .insert_one(&entity)
            .await
            .map_err(|e| map_driver_error(ITEMS_COLLECTION, "insert_one", e))?;

        Ok(entity.into_domain())
    }

    async fn update(
        &self,
        id: ObjectId,
        patch: ItemPatch,
    ) -> Result<Option<Item>, RepositoryError> {
        let entity = self
            .collection
            .find_one_and_update(doc! { "_id": id }, update_document(patch))
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| map_driver_error(ITEMS_COLLECTION, "find_one_and_update", e))?;

        Ok(entity.map(ItemEntity::into_domain))
    }

    async fn delete(&self, id: ObjectId) -> Result<Option<Item>, RepositoryError> {
        let entity = self
            .collection
            .find_one_and_delete(doc! { "_id": id })
            .await
            .map_err(|e| map_driver_error(ITEMS_COLLECTION, "find_one_and_delete", e))?;

        Ok(entity.map(ItemEntity::into_domain))
    }
}
