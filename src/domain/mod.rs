//! Domain rules for contact identity.
//!
//! This module holds the fingerprint function that defines when two
//! contacts are the same, and the validation errors raised when an
//! imported candidate cannot become a contact.

pub mod errors;
pub mod fingerprint;

pub use errors::ValidationError;
pub use fingerprint::fingerprint;
