//! Contact List Store - an in-memory contact list with fingerprint deduplication.
//!
//! The store holds an ordered list of contacts, assigns their ids, keeps a
//! fingerprint of each contact's identity fields, and imports batches of
//! loosely-typed candidates while skipping invalid and already-known entries.
//! Persistence is delegated to a pluggable storage backend.
//!
//! # Architecture
//!
//! - **models**: Contact records, identity fields, and import payloads
//! - **domain**: Fingerprinting and candidate validation errors
//! - **storage**: Storage trait with in-memory and JSON file backends
//! - **store**: The contact store and its mutation operations
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod storage;
pub mod store;

pub use config::Config;
pub use domain::{fingerprint, ValidationError};
pub use error::{ConfigError, StorageError, StoreError};
pub use models::{ContactFields, ContactRecord, ImportReport, RawImportCandidate};
pub use storage::{ContactStorage, JsonFileStorage, MemoryStorage};
pub use store::ContactStore;
