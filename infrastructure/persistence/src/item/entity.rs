use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use business::domain::item::model::Item;

/// Stored shape of an item document; field names are the collection keys.
#[derive(Debug, Serialize, Deserialize)]
pub struct ItemEntity {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub sku: i64,
    pub name: String,
    pub price: f64,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

impl ItemEntity {
    pub fn into_domain(self) -> Item {
        Item {
            id: self.id,
            sku: self.sku,
            name: self.name,
            price: self.price,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
