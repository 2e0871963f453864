use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::storage::{KeyValueStore, StorageError};

/// In-process store. Contents are lost when the last clone is dropped.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an entry, e.g. a pre-existing favorites blob.
    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.inner.lock().insert(key.to_string(), value.to_string());
        self
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.inner.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_contents() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.set("favorites", "{}").unwrap();
        assert_eq!(other.get("favorites").unwrap().as_deref(), Some("{}"));
        assert_eq!(other.len(), 1);
    }

    #[test]
    fn missing_key_is_none() {
        let store = MemoryStore::new().with_entry("a", "1");
        assert!(store.get("b").unwrap().is_none());
    }
}
