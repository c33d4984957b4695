//! In-memory storage implementation.

use super::{Storage, StorageResult};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory storage for testing and ephemeral use.
#[derive(Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create a new empty memory storage.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get_string(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set_string(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_key_is_none() {
        let storage = MemoryStorage::new();
        assert!(storage.get_string("missing").unwrap().is_none());
    }

    #[test]
    fn test_set_and_get() {
        let storage = MemoryStorage::new();
        storage.set_string("key", "value").unwrap();
        assert_eq!(storage.get_string("key").unwrap().as_deref(), Some("value"));
    }

    #[test]
    fn test_set_overwrites() {
        let storage = MemoryStorage::new();
        storage.set_string("key", "old").unwrap();
        storage.set_string("key", "new").unwrap();
        assert_eq!(storage.get_string("key").unwrap().as_deref(), Some("new"));
    }
}
