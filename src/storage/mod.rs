//! Persistence backends for the contact list.
//!
//! The store treats persistence as a durability side-channel: it loads the
//! whole sequence once when opened and saves the whole sequence after each
//! mutation, keyed by a namespace string.

mod file;
mod memory;

pub(crate) use file::is_plain_file_stem;
pub use file::JsonFileStorage;
pub use memory::MemoryStorage;

use crate::error::StorageResult;
use crate::models::ContactRecord;

/// Namespace the contact list is stored under unless configured otherwise.
pub const DEFAULT_NAMESPACE: &str = "contacts";

/// Key-value storage for contact sequences.
///
/// Provides abstraction over where the list is kept, enabling different
/// implementations (file, in-memory, test doubles).
pub trait ContactStorage: Send + Sync {
    /// Load the sequence saved under `namespace`, or `None` if nothing was saved.
    fn load(&self, namespace: &str) -> StorageResult<Option<Vec<ContactRecord>>>;

    /// Replace the sequence saved under `namespace`.
    fn save(&self, namespace: &str, records: &[ContactRecord]) -> StorageResult<()>;
}
