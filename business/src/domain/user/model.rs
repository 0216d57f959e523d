use bson::oid::ObjectId;
use chrono::{DateTime, Utc};

/// Account record. Read-only over HTTP; rows are provisioned out of band.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: ObjectId,
    pub name: String,
    pub email: String,
    pub age: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
