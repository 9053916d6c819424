use super::{validate_key, KeyValueStore, StorageError};
use std::collections::HashMap;

/// In-memory store. Contents are lost when it is dropped.
///
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> MemoryStore {
        MemoryStore::default()
    }

    /// Return a store with `key` already holding `value`.
    ///
    pub fn with_item(key: &str, value: &str) -> MemoryStore {
        let mut slots = HashMap::new();
        slots.insert(key.to_string(), value.to_string());
        MemoryStore { slots }
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        validate_key(key)?;
        Ok(self.slots.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        self.slots.remove(key);
        Ok(())
    }
}
