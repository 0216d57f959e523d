use bson::oid::ObjectId;
use chrono::{DateTime, Utc};

/// Inventory item as persisted. Identifier and timestamps are assigned by
/// the data layer, never by callers.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: ObjectId,
    pub sku: i64,
    pub name: String,
    pub price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields a caller supplies to create an item.
pub struct NewItemProps {
    pub sku: i64,
    pub name: String,
    pub price: f64,
}

/// Partial update. Absent fields keep their stored value; an all-absent
/// patch is a no-op write that still bumps `updated_at`.
#[derive(Debug, Clone, Default)]
pub struct ItemPatch {
    pub sku: Option<i64>,
    pub name: Option<String>,
    pub price: Option<f64>,
}
