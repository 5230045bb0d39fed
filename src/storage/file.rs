use crate::error::{StorageError, StorageResult};
use crate::models::ContactRecord;
use crate::storage::ContactStorage;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// File-backed storage: one JSON document per namespace.
///
/// Each namespace maps to `<dir>/<namespace>.json`. The document wraps the
/// contact sequence with the namespace and the time it was written.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    dir: PathBuf,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SavedBlob<'a> {
    namespace: &'a str,
    saved_at: String,
    contacts: &'a [ContactRecord],
}

#[derive(Deserialize)]
struct LoadedBlob {
    contacts: Vec<ContactRecord>,
}

impl JsonFileStorage {
    /// Create a JsonFileStorage rooted at `dir`.
    ///
    /// The directory is created on first save, not here.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the file backing `namespace`.
    pub fn path_for(&self, namespace: &str) -> StorageResult<PathBuf> {
        if !is_plain_file_stem(namespace) {
            return Err(StorageError::InvalidNamespace(namespace.to_string()));
        }
        Ok(self.dir.join(format!("{}.json", namespace)))
    }
}

/// Namespaces must name a file directly inside the storage directory.
pub(crate) fn is_plain_file_stem(namespace: &str) -> bool {
    !namespace.trim().is_empty()
        && !namespace.contains(['/', '\\'])
        && !namespace.contains("..")
}

impl ContactStorage for JsonFileStorage {
    fn load(&self, namespace: &str) -> StorageResult<Option<Vec<ContactRecord>>> {
        let path = self.path_for(namespace)?;
        if !path.exists() {
            return Ok(None);
        }

        let data = fs::read_to_string(&path)?;
        let blob: LoadedBlob = serde_json::from_str(&data)?;
        Ok(Some(blob.contacts))
    }

    fn save(&self, namespace: &str, records: &[ContactRecord]) -> StorageResult<()> {
        let path = self.path_for(namespace)?;
        fs::create_dir_all(&self.dir)?;

        let blob = SavedBlob {
            namespace,
            saved_at: Utc::now().to_rfc3339(),
            contacts: records,
        };
        let json = serde_json::to_string_pretty(&blob)?;

        // Write beside the target and rename so readers never see a partial file
        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ContactFields;

    #[test]
    fn test_plain_file_stem() {
        assert!(is_plain_file_stem("contacts"));
        assert!(is_plain_file_stem("contacts-v2.backup"));
        assert!(!is_plain_file_stem(""));
        assert!(!is_plain_file_stem("   "));
        assert!(!is_plain_file_stem("a/b"));
        assert!(!is_plain_file_stem("a\\b"));
        assert!(!is_plain_file_stem(".."));
    }

    #[test]
    fn test_load_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path());
        assert_eq!(storage.load("contacts").unwrap(), None);
    }

    #[test]
    fn test_save_creates_directory_and_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("nested"));
        let records = vec![
            ContactFields::new("Ann", "Lee", "1", "a@b.c").into_record(1),
            ContactFields::new("Bob", "Ray", "2", "b@b.c").into_record(3),
        ];

        storage.save("contacts", &records).unwrap();

        assert!(dir.path().join("nested/contacts.json").exists());
        assert!(!dir.path().join("nested/contacts.json.tmp").exists());
        assert_eq!(storage.load("contacts").unwrap(), Some(records));
    }

    #[test]
    fn test_saved_document_shape() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path());
        let records = vec![ContactFields::new("Ann", "Lee", "1", "a@b.c").into_record(1)];

        storage.save("work", &records).unwrap();

        let raw = fs::read_to_string(dir.path().join("work.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["namespace"], "work");
        assert!(value["savedAt"].is_string());
        assert_eq!(value["contacts"][0]["firstName"], "Ann");
    }

    #[test]
    fn test_invalid_namespace_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path());

        let result = storage.save("../escape", &[]);
        assert!(matches!(result, Err(StorageError::InvalidNamespace(_))));
        assert!(matches!(
            storage.load("a/b"),
            Err(StorageError::InvalidNamespace(_))
        ));
    }

    #[test]
    fn test_corrupt_file_is_json_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("contacts.json"), "{not json").unwrap();
        let storage = JsonFileStorage::new(dir.path());

        assert!(matches!(storage.load("contacts"), Err(StorageError::Json(_))));
    }
}
