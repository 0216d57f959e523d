use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use business::domain::item::model::Item;
use business::domain::item::use_cases::create::CreateItemParams;
use business::domain::item::use_cases::update::UpdateItemParams;

use crate::api::validation::{self, FieldViolation};

/// Request body for creating an item. Every field is declared optional so
/// that one validation pass can report all missing and malformed fields
/// together instead of failing at the first gap.
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct CreateItemRequest {
    /// Stock keeping unit, unique across the store
    #[oai(skip_serializing_if_is_none)]
    pub sku: Option<i64>,
    /// Display name, 2 to 255 characters
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    /// Unit price, zero or greater
    #[oai(skip_serializing_if_is_none)]
    pub price: Option<f64>,
}

impl CreateItemRequest {
    pub fn try_into_params(self) -> Result<CreateItemParams, Vec<FieldViolation>> {
        let mut violations = Vec::new();

        let sku = validation::required(self.sku, "sku", &mut violations);
        let name = validation::required(self.name, "name", &mut violations);
        if let Some(name) = &name {
            validation::check_length(name, "name", 2, 255, &mut violations);
        }
        let price = validation::required(self.price, "price", &mut violations);
        if let Some(price) = price {
            validation::check_non_negative(price, "price", &mut violations);
        }

        match (sku, name, price) {
            (Some(sku), Some(name), Some(price)) if violations.is_empty() => {
                Ok(CreateItemParams { sku, name, price })
            }
            _ => Err(violations),
        }
    }
}

/// Partial update body. Absent fields keep their stored value; an empty
/// patch is valid.
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct UpdateItemRequest {
    /// Stock keeping unit, unique across the store
    #[oai(skip_serializing_if_is_none)]
    pub sku: Option<i64>,
    /// Display name, 2 to 255 characters
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    /// Unit price, zero or greater
    #[oai(skip_serializing_if_is_none)]
    pub price: Option<f64>,
}

impl UpdateItemRequest {
    pub fn try_into_params(self, id: ObjectId) -> Result<UpdateItemParams, Vec<FieldViolation>> {
        let mut violations = Vec::new();

        if let Some(name) = &self.name {
            validation::check_length(name, "name", 2, 255, &mut violations);
        }
        if let Some(price) = self.price {
            validation::check_non_negative(price, "price", &mut violations);
        }

        if violations.is_empty() {
            Ok(UpdateItemParams {
                id,
                sku: self.sku,
                name: self.name,
                price: self.price,
            })
        } else {
            Err(violations)
        }
    }
}

/// Item as returned by every route.
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
#[serde(rename_all = "camelCase")]
#[oai(rename_all = "camelCase")]
pub struct ItemResponse {
    /// Store-assigned identifier, a 24-character hex string
    pub id: String,
    pub sku: i64,
    pub name: String,
    pub price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id.to_hex(),
            sku: item.sku,
            name: item.name,
            price: item.price,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}
