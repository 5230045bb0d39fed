//! Contact List Store - Main entry point
//!
//! Opens the file-backed contact list, applies an optional import batch, and
//! prints the resulting list as JSON on stdout.

use anyhow::{Context, Result};
use contact_list_store::{
    Config, ContactStorage, ContactStore, JsonFileStorage, RawImportCandidate,
};
use std::fs;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging (stderr only so stdout carries just the contact list)
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(
        "Using data directory {} (namespace: {})",
        config.data_dir.display(),
        config.namespace
    );

    let storage = Arc::new(JsonFileStorage::new(&config.data_dir)) as Arc<dyn ContactStorage>;
    let mut store = match ContactStore::open(storage, config.namespace.clone()) {
        Ok(store) => store,
        Err(e) => {
            error!("Failed to open contact store: {}", e);
            return Err(e.into());
        }
    };

    if let Some(path) = &config.import_file {
        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read import file {}", path.display()))?;
        let candidates = RawImportCandidate::parse_batch(&data)
            .with_context(|| format!("Failed to parse import file {}", path.display()))?;

        let report = store.add_imported_contacts(candidates)?;
        info!(
            "Imported {} of {} contacts ({} invalid, {} duplicates)",
            report.accepted,
            report.total(),
            report.rejected_invalid,
            report.rejected_duplicate
        );
    }

    println!("{}", serde_json::to_string_pretty(store.contacts())?);
    Ok(())
}
