use crate::error::{StorageError, StorageResult};
use crate::models::ContactRecord;
use crate::storage::ContactStorage;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// In-memory storage backend.
///
/// Clones share the same underlying map, so a handle kept outside a store
/// observes everything the store saves.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    namespaces: Arc<Mutex<HashMap<String, Vec<ContactRecord>>>>,
}

impl MemoryStorage {
    /// Create an empty MemoryStorage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a MemoryStorage with `records` already saved under `namespace`.
    pub fn with_records(namespace: &str, records: Vec<ContactRecord>) -> Self {
        let storage = Self::new();
        if let Ok(mut namespaces) = storage.namespaces.lock() {
            namespaces.insert(namespace.to_string(), records);
        }
        storage
    }

    fn lock(&self) -> StorageResult<MutexGuard<'_, HashMap<String, Vec<ContactRecord>>>> {
        self.namespaces
            .lock()
            .map_err(|_| StorageError::Unavailable("memory storage lock poisoned".to_string()))
    }
}

impl ContactStorage for MemoryStorage {
    fn load(&self, namespace: &str) -> StorageResult<Option<Vec<ContactRecord>>> {
        Ok(self.lock()?.get(namespace).cloned())
    }

    fn save(&self, namespace: &str, records: &[ContactRecord]) -> StorageResult<()> {
        self.lock()?.insert(namespace.to_string(), records.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ContactFields;

    #[test]
    fn test_load_missing_namespace() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.load("contacts").unwrap(), None);
    }

    #[test]
    fn test_save_then_load() {
        let storage = MemoryStorage::new();
        let records = vec![ContactFields::new("Ann", "Lee", "1", "a@b.c").into_record(1)];

        storage.save("contacts", &records).unwrap();

        assert_eq!(storage.load("contacts").unwrap(), Some(records));
        assert_eq!(storage.load("other").unwrap(), None);
    }

    #[test]
    fn test_clones_share_state() {
        let storage = MemoryStorage::new();
        let handle = storage.clone();

        storage.save("contacts", &[]).unwrap();

        assert_eq!(handle.load("contacts").unwrap(), Some(Vec::new()));
    }

    #[test]
    fn test_with_records() {
        let records = vec![ContactFields::new("Ann", "Lee", "1", "a@b.c").into_record(4)];
        let storage = MemoryStorage::with_records("contacts", records.clone());
        assert_eq!(storage.load("contacts").unwrap(), Some(records));
    }
}
