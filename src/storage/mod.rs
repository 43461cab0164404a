/// Storage layer for persisting dashboard data
///
/// Everything the dashboard keeps between sessions is a JSON document
/// stored under a string key. Backends only know about strings; typed
/// access and the key namespace live in [`PersistenceGateway`].

pub mod gateway;
pub mod memory;
pub mod migrations;
pub mod sqlite;

// Re-export the main storage types
pub use gateway::*;
pub use memory::*;
pub use sqlite::*;

use thiserror::Error;

/// Prefix applied to every key the application writes
pub const NAMESPACE: &str = "iMakeIt_";

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database connection error: {0}")]
    Connection(String),

    #[error("Database query error: {0}")]
    Query(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Migration error: {0}")]
    Migration(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Trait defining a durable string-keyed store
///
/// Implementations store raw strings and never interpret them. Keys passed
/// in are already namespaced by the gateway.
pub trait KeyValueStore {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Insert or replace the value under `key`
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// List keys starting with `prefix`, sorted
    fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>, StorageError>;

    /// Remove every key starting with `prefix`, returning how many were removed
    fn remove_prefix(&self, prefix: &str) -> Result<usize, StorageError>;
}
