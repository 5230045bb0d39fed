//! Test doubles for the storage collaborator.

mod mock_storage;

#[allow(unused_imports)]
pub use mock_storage::{FailingStorage, RecordingStorage};
