//! Error types for the contact list store.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors returned by [`ContactStore`](crate::store::ContactStore) mutations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No record with the given id is present
    #[error("Contact not found: {0}")]
    NotFound(i64),

    /// The next id would not fit in an `i64`
    #[error("No contact id left after {0}")]
    IdSpaceExhausted(i64),
}

/// Errors that can occur in a storage backend.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the backing medium failed
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored or imported data is not valid JSON of the expected shape
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Namespace cannot be mapped onto the backing medium
    #[error("Invalid storage namespace: {0:?}")]
    InvalidNamespace(String),

    /// Backend is unavailable
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::NotFound(42);
        assert_eq!(err.to_string(), "Contact not found: 42");

        let err = StoreError::IdSpaceExhausted(i64::MAX);
        assert_eq!(
            err.to_string(),
            "No contact id left after 9223372036854775807"
        );

        let err = StorageError::Unavailable("lock poisoned".to_string());
        assert_eq!(err.to_string(), "Storage unavailable: lock poisoned");

        let err = StorageError::InvalidNamespace("../etc".to_string());
        assert_eq!(err.to_string(), "Invalid storage namespace: \"../etc\"");
    }

    #[test]
    fn test_storage_error_from_json() {
        let json_err = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let err: StorageError = json_err.into();
        assert!(err.to_string().starts_with("JSON error:"));
    }

    #[test]
    fn test_config_invalid_value_display() {
        let err = ConfigError::InvalidValue {
            var: "CONTACTS_NAMESPACE".to_string(),
            reason: "Cannot be empty".to_string(),
        };
        assert!(err.to_string().contains("CONTACTS_NAMESPACE"));
        assert!(err.to_string().contains("Cannot be empty"));
    }
}
