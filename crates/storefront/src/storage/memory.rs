//! In-memory storage for tests and throwaway sessions.

use std::collections::HashMap;

use serde_json::Value;

use super::{Storage, StorageError};

/// Keeps records in a map; nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    records: HashMap<String, Value>,
}

impl MemoryStorage {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<Value>, StorageError> {
        Ok(self.records.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &Value) -> Result<(), StorageError> {
        self.records.insert(key.to_owned(), value.clone());
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<(), StorageError> {
        self.records.remove(key);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_roundtrip_and_delete() {
        let mut storage = MemoryStorage::new();
        assert!(storage.load("user").unwrap().is_none());

        storage.save("user", &json!({"name": "Ivan"})).unwrap();
        assert_eq!(
            storage.load("user").unwrap(),
            Some(json!({"name": "Ivan"}))
        );

        storage.delete("user").unwrap();
        assert!(storage.load("user").unwrap().is_none());
    }
}
