//! Contact record as held by the store and shown by the UI.

use crate::domain::fingerprint;
use serde::{Deserialize, Serialize};

/// Id carried by records that have not been assigned one by the store.
pub const UNASSIGNED_ID: i64 = -1;

/// A contact in the list.
///
/// Field names serialize in camelCase so persisted blobs and import files
/// share the shape the UI layer works with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContactRecord {
    /// Store-assigned identifier, unique within one store
    pub id: i64,

    /// Fingerprint of the four identity fields
    pub hash: String,

    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
}

/// The identity-bearing fields of a contact, without id or hash.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
}

impl ContactFields {
    /// Create a set of contact fields.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }

    /// Fingerprint of these fields.
    pub fn fingerprint(&self) -> String {
        fingerprint(&self.first_name, &self.last_name, &self.phone, &self.email)
    }

    /// Build a record with the given id and a freshly computed hash.
    pub fn into_record(self, id: i64) -> ContactRecord {
        let hash = self.fingerprint();
        ContactRecord {
            id,
            hash,
            first_name: self.first_name,
            last_name: self.last_name,
            phone: self.phone,
            email: self.email,
        }
    }
}

impl ContactRecord {
    /// The blank record used to seed new-entry forms.
    pub fn blank() -> Self {
        Self {
            id: UNASSIGNED_ID,
            hash: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            phone: String::new(),
            email: String::new(),
        }
    }

    /// Copy out the identity fields.
    pub fn fields(&self) -> ContactFields {
        ContactFields {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
        }
    }

    /// Whether `hash` matches the current identity fields.
    pub fn has_current_hash(&self) -> bool {
        self.hash == fingerprint(&self.first_name, &self.last_name, &self.phone, &self.email)
    }
}

impl Default for ContactRecord {
    fn default() -> Self {
        Self::blank()
    }
}

impl From<ContactRecord> for ContactFields {
    fn from(record: ContactRecord) -> Self {
        Self {
            first_name: record.first_name,
            last_name: record.last_name,
            phone: record.phone,
            email: record.email,
        }
    }
}

impl From<&ContactRecord> for ContactFields {
    fn from(record: &ContactRecord) -> Self {
        record.fields()
    }
}
