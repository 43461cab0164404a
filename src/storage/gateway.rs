/// Typed, namespaced access to a key/value backend
///
/// All JSON encoding and decoding of stored data happens here. Callers ask
/// for a key like `habits` and get back a typed value; the gateway adds the
/// application prefix and talks to the backend.
///
/// The plain `save`/`load`/`clear` methods follow the dashboard's failure
/// policy: a backend or encoding error is logged and treated as a no-op so
/// the in-memory state stays authoritative. The `try_*` variants return the
/// error for callers that need to see it.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::storage::{KeyValueStore, MemoryStore, StorageError, NAMESPACE};

pub struct PersistenceGateway {
    backend: Box<dyn KeyValueStore>,
    prefix: String,
}

impl PersistenceGateway {
    /// Wrap a backend using the application namespace
    pub fn new(backend: Box<dyn KeyValueStore>) -> Self {
        Self {
            backend,
            prefix: NAMESPACE.to_string(),
        }
    }

    /// Session-only gateway; nothing is written to disk
    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryStore::new()))
    }

    /// Full backend key for an application key
    pub fn namespaced_key(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }

    pub fn try_save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let encoded = serde_json::to_string(value)?;
        self.backend.set(&self.namespaced_key(key), &encoded)
    }

    pub fn try_load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        match self.backend.get(&self.namespaced_key(key))? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Remove every key under the namespace, returning how many were removed
    pub fn try_clear(&self) -> Result<usize, StorageError> {
        self.backend.remove_prefix(&self.prefix)
    }

    /// Application keys currently stored (prefix stripped)
    pub fn try_keys(&self) -> Result<Vec<String>, StorageError> {
        Ok(self
            .backend
            .keys_with_prefix(&self.prefix)?
            .into_iter()
            .map(|k| k[self.prefix.len()..].to_string())
            .collect())
    }

    pub fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        if let Err(e) = self.try_save(key, value) {
            tracing::warn!("Failed to save {}: {}", self.namespaced_key(key), e);
        }
    }

    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.try_load(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Failed to load {}: {}", self.namespaced_key(key), e);
                None
            }
        }
    }

    pub fn clear(&self) {
        match self.try_clear() {
            Ok(removed) => tracing::info!("Cleared {} stored keys under {}", removed, self.prefix),
            Err(e) => tracing::warn!("Failed to clear data under {}: {}", self.prefix, e),
        }
    }

    /// Whether a key is present; a failing backend reports false
    pub fn contains(&self, key: &str) -> bool {
        match self.backend.get(&self.namespaced_key(key)) {
            Ok(value) => value.is_some(),
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", self.namespaced_key(key), e);
                false
            }
        }
    }
}
