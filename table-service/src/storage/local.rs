//! Typed, namespaced JSON storage

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;

use super::{KvBackend, StorageResult};

/// Key prefix so the app's entries never collide with unrelated data
pub const DEFAULT_PREFIX: &str = "tablewave_";

/// Typed key/value adapter
///
/// - `get` falls back on absence or parse failure (logged, never raised)
/// - `set` serializes to JSON under `prefix + key`
#[derive(Clone)]
pub struct LocalStorage {
    backend: Arc<dyn KvBackend>,
    prefix: String,
}

impl LocalStorage {
    pub fn new(backend: Arc<dyn KvBackend>, prefix: impl Into<String>) -> Self {
        Self {
            backend,
            prefix: prefix.into(),
        }
    }

    /// Adapter over a fresh in-memory redb database with the default prefix
    pub fn in_memory() -> StorageResult<Self> {
        let backend = super::RedbBackend::open_in_memory()?;
        Ok(Self::new(Arc::new(backend), DEFAULT_PREFIX))
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    fn full_key(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }

    /// Read and parse a stored value, or return `fallback`
    pub fn get<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T {
        let raw = match self.backend.get(&self.full_key(key)) {
            Ok(Some(raw)) => raw,
            Ok(None) => return fallback,
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Failed to read storage key, using fallback");
                return fallback;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Corrupt JSON in storage key, using fallback");
                fallback
            }
        }
    }

    /// Whether anything is stored under `key`, parseable or not
    pub fn contains(&self, key: &str) -> StorageResult<bool> {
        Ok(self.backend.get(&self.full_key(key))?.is_some())
    }

    /// Serialize and store a value
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> StorageResult<()> {
        let result = serde_json::to_string(value)
            .map_err(Into::into)
            .and_then(|json| self.backend.set(&self.full_key(key), &json));
        if let Err(e) = &result {
            tracing::warn!(key = %key, error = %e, "Failed to write storage key");
        }
        result
    }

    /// Remove a stored value (no-op if absent)
    pub fn remove(&self, key: &str) -> StorageResult<()> {
        let result = self.backend.remove(&self.full_key(key));
        if let Err(e) = &result {
            tracing::warn!(key = %key, error = %e, "Failed to remove storage key");
        }
        result
    }

    /// Remove every key in this adapter's namespace; returns how many were removed
    pub fn clear(&self) -> StorageResult<usize> {
        let keys: Vec<String> = self
            .backend
            .keys()?
            .into_iter()
            .filter(|k| k.starts_with(&self.prefix))
            .collect();
        for key in &keys {
            self.backend.remove(key)?;
        }
        tracing::info!(removed = keys.len(), prefix = %self.prefix, "Cleared storage namespace");
        Ok(keys.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::RedbBackend;

    fn storage() -> (Arc<RedbBackend>, LocalStorage) {
        let backend = Arc::new(RedbBackend::open_in_memory().unwrap());
        let storage = LocalStorage::new(backend.clone(), DEFAULT_PREFIX);
        (backend, storage)
    }

    #[test]
    fn test_get_absent_returns_fallback() {
        let (_, storage) = storage();
        let value: Vec<String> = storage.get("menu_items", vec!["fallback".to_string()]);
        assert_eq!(value, vec!["fallback".to_string()]);
    }

    #[test]
    fn test_set_then_get() {
        let (backend, storage) = storage();
        storage.set("numbers", &vec![1, 2, 3]).unwrap();
        let value: Vec<i32> = storage.get("numbers", Vec::new());
        assert_eq!(value, vec![1, 2, 3]);

        // stored under the namespaced key
        assert_eq!(
            backend.get("tablewave_numbers").unwrap().as_deref(),
            Some("[1,2,3]")
        );
    }

    #[test]
    fn test_corrupt_json_returns_fallback() {
        let (backend, storage) = storage();
        backend.set("tablewave_numbers", "{not json").unwrap();
        let value: Vec<i32> = storage.get("numbers", vec![42]);
        assert_eq!(value, vec![42]);
    }

    #[test]
    fn test_clear_only_touches_namespace() {
        let (backend, storage) = storage();
        storage.set("a", &1).unwrap();
        storage.set("b", &2).unwrap();
        backend.set("other_app_key", "keep").unwrap();

        assert_eq!(storage.clear().unwrap(), 2);
        assert_eq!(storage.get("a", 0), 0);
        assert_eq!(backend.get("other_app_key").unwrap().as_deref(), Some("keep"));
    }

    #[test]
    fn test_contains_sees_unparseable_values() {
        let (backend, storage) = storage();
        assert!(!storage.contains("restaurant").unwrap());

        backend.set("tablewave_restaurant", "{broken").unwrap();
        assert!(storage.contains("restaurant").unwrap());
        assert_eq!(storage.get::<Option<String>>("restaurant", None), None);
    }

    #[test]
    fn test_remove() {
        let (_, storage) = storage();
        storage.set("a", &"x").unwrap();
        storage.remove("a").unwrap();
        assert_eq!(storage.get("a", String::new()), "");
    }
}
