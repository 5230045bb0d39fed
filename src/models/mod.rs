//! Data models for the contact list store.
//!
//! This module contains the record type held by the store, the identity
//! fields it is built from, and the loosely-typed shape of imported
//! candidates.

pub mod contact;
pub mod import;

pub use contact::{ContactFields, ContactRecord, UNASSIGNED_ID};
pub use import::{ImportReport, RawImportCandidate};
