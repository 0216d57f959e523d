use std::time::Duration;

use bson::{Document, doc};
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::{ClientOptions, IndexOptions, WriteConcern};
use mongodb::{Client, Database, IndexModel};
use thiserror::Error;
use tracing::{error, warn};

use business::domain::errors::RepositoryError;

pub const ITEMS_COLLECTION: &str = "items";
pub const USERS_COLLECTION: &str = "users";

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database.invalid_connection_string")]
    InvalidConnectionString,
    #[error("database.connection_error")]
    ConnectionError,
    #[error("database.index_error")]
    IndexError,
}

/// Connection coordinates for the document store.
#[derive(Debug)]
pub struct DatabaseConfig {
    pub hostname: String,
    pub port: u16,
    pub db_name: String,
}

impl DatabaseConfig {
    pub fn connection_string(&self) -> String {
        format!("mongodb://{}:{}/{}", self.hostname, self.port, self.db_name)
    }
}

/// The client owns the process-wide connection pool and must outlive every
/// repository; `Client::shutdown` consumes it once draining is done.
pub struct DatabaseHandle {
    pub client: Client,
    pub database: Database,
}

/// Connects to the store and verifies the connection with a ping.
/// Building a client alone touches no network, so without the ping a dead
/// host would only surface on the first request.
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseHandle, DatabaseError> {
    let mut options = ClientOptions::parse(config.connection_string())
        .await
        .map_err(|e| {
            error!("Invalid connection string: {}", e);
            DatabaseError::InvalidConnectionString
        })?;
    options.server_selection_timeout = Some(Duration::from_secs(5));
    options.retry_writes = Some(true);
    options.write_concern = Some(WriteConcern::majority());

    let client = Client::with_options(options).map_err(|e| {
        error!("Failed to build database client: {}", e);
        DatabaseError::ConnectionError
    })?;
    let database = client.database(&config.db_name);

    database.run_command(doc! { "ping": 1 }).await.map_err(|e| {
        error!("Database ping failed: {}", e);
        DatabaseError::ConnectionError
    })?;

    Ok(DatabaseHandle { client, database })
}

/// Creates the unique index on `items.sku`. Idempotent; the store no-ops
/// when the index already exists.
pub async fn ensure_indexes(database: &Database) -> Result<(), DatabaseError> {
    let index = IndexModel::builder()
        .keys(doc! { "sku": 1 })
        .options(IndexOptions::builder().unique(true).build())
        .build();

    database
        .collection::<Document>(ITEMS_COLLECTION)
        .create_index(index)
        .await
        .map_err(|e| {
            error!("Failed to create items.sku index: {}", e);
            DatabaseError::IndexError
        })?;

    Ok(())
}

/// Logs the driver error with its collection and operation, then collapses
/// it to the two classifications the domain knows about. Driver detail
/// never crosses this boundary.
pub(crate) fn map_driver_error(
    collection: &str,
    operation: &str,
    e: mongodb::error::Error,
) -> RepositoryError {
    if is_duplicate_key(&e) {
        warn!("{}.{} rejected by unique index: {}", collection, operation, e);
        return RepositoryError::Duplicated;
    }
    error!("{}.{} failed: {}", collection, operation, e);
    RepositoryError::DatabaseError
}

// Server error code 11000: duplicate key.
fn is_duplicate_key(e: &mongodb::error::Error) -> bool {
    match *e.kind {
        ErrorKind::Write(WriteFailure::WriteError(ref write_error)) => write_error.code == 11000,
        ErrorKind::Command(ref command_error) => command_error.code == 11000,
        _ => false,
    }
}
