use contact_list_store::error::{StorageError, StorageResult};
use contact_list_store::models::ContactRecord;
use contact_list_store::storage::{ContactStorage, MemoryStorage};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Recording storage for testing.
///
/// Wraps a MemoryStorage and tracks method calls and every saved snapshot
/// for verification.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct RecordingStorage {
    inner: MemoryStorage,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    snapshots: Arc<Mutex<Vec<Vec<ContactRecord>>>>,
}

#[allow(dead_code)]
impl RecordingStorage {
    /// Create a new empty RecordingStorage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a RecordingStorage with records already saved under `namespace`.
    pub fn with_records(namespace: &str, records: Vec<ContactRecord>) -> Self {
        Self {
            inner: MemoryStorage::with_records(namespace, records),
            ..Self::default()
        }
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// The most recently saved sequence, if any.
    pub fn last_saved(&self) -> Option<Vec<ContactRecord>> {
        self.snapshots.lock().unwrap().last().cloned()
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl ContactStorage for RecordingStorage {
    fn load(&self, namespace: &str) -> StorageResult<Option<Vec<ContactRecord>>> {
        self.track_call("load");
        self.inner.load(namespace)
    }

    fn save(&self, namespace: &str, records: &[ContactRecord]) -> StorageResult<()> {
        self.track_call("save");
        self.snapshots.lock().unwrap().push(records.to_vec());
        self.inner.save(namespace, records)
    }
}

/// Storage whose saves always fail; loads optionally fail too.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct FailingStorage {
    fail_load: bool,
    save_attempts: Arc<Mutex<usize>>,
}

#[allow(dead_code)]
impl FailingStorage {
    /// Storage that loads nothing and rejects every save.
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that also rejects loads.
    pub fn unreadable() -> Self {
        Self {
            fail_load: true,
            ..Self::default()
        }
    }

    pub fn save_attempts(&self) -> usize {
        *self.save_attempts.lock().unwrap()
    }
}

impl ContactStorage for FailingStorage {
    fn load(&self, _namespace: &str) -> StorageResult<Option<Vec<ContactRecord>>> {
        if self.fail_load {
            return Err(StorageError::Unavailable("backend offline".to_string()));
        }
        Ok(None)
    }

    fn save(&self, _namespace: &str, _records: &[ContactRecord]) -> StorageResult<()> {
        *self.save_attempts.lock().unwrap() += 1;
        Err(StorageError::Unavailable("backend offline".to_string()))
    }
}
