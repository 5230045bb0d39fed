//! Configuration management for the contact list store.
//!
//! This module handles loading and validating configuration from environment
//! variables. A `.env` file is loaded first if one is present.

use crate::error::{ConfigError, ConfigResult};
use crate::storage::{is_plain_file_stem, DEFAULT_NAMESPACE};
use std::env;
use std::path::PathBuf;

/// Default directory for file-backed storage.
pub const DEFAULT_DATA_DIR: &str = "./.contacts";

/// Configuration for the contact list store.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding persisted contact lists
    pub data_dir: PathBuf,

    /// Storage namespace the list is saved under (default: "contacts")
    pub namespace: String,

    /// JSON import batch to apply at startup, if any
    pub import_file: Option<PathBuf>,

    /// Log level used when RUST_LOG is unset (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACTS_DATA_DIR`: storage directory (default: "./.contacts")
    /// - `CONTACTS_NAMESPACE`: storage namespace (default: "contacts")
    /// - `CONTACTS_IMPORT_FILE`: path to a JSON import batch
    /// - `LOG_LEVEL`: logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let data_dir =
            env::var("CONTACTS_DATA_DIR").unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string());
        if data_dir.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "CONTACTS_DATA_DIR".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let namespace =
            env::var("CONTACTS_NAMESPACE").unwrap_or_else(|_| DEFAULT_NAMESPACE.to_string());
        if !is_plain_file_stem(&namespace) {
            return Err(ConfigError::InvalidValue {
                var: "CONTACTS_NAMESPACE".to_string(),
                reason: format!(
                    "Must be a non-empty name without path separators, got: {:?}",
                    namespace
                ),
            });
        }

        let import_file = env::var("CONTACTS_IMPORT_FILE")
            .ok()
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            data_dir: PathBuf::from(data_dir),
            namespace,
            import_file,
            log_level,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            namespace: DEFAULT_NAMESPACE.to_string(),
            import_file: None,
            log_level: "info".to_string(),
        }
    }
}
