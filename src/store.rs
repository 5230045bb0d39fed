//! The contact list store.
//!
//! `ContactStore` owns the ordered contact sequence and is the only place
//! records are created, replaced or removed. Every record it holds carries
//! a unique id and a hash equal to the fingerprint of its current fields.
//! After each successful mutation the whole sequence is handed to the
//! injected [`ContactStorage`]; a failed save is logged and otherwise
//! ignored.

use crate::error::{StorageResult, StoreError, StoreResult};
use crate::models::{ContactFields, ContactRecord, ImportReport, RawImportCandidate};
use crate::storage::{ContactStorage, DEFAULT_NAMESPACE};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, trace, warn};

/// In-memory contact list with delegated persistence.
pub struct ContactStore {
    records: Vec<ContactRecord>,
    storage: Arc<dyn ContactStorage>,
    namespace: String,
}

impl ContactStore {
    /// Open the store saved under [`DEFAULT_NAMESPACE`].
    pub fn new(storage: Arc<dyn ContactStorage>) -> StorageResult<Self> {
        Self::open(storage, DEFAULT_NAMESPACE)
    }

    /// Open the store saved under `namespace`, rehydrating its records.
    ///
    /// A namespace that was never saved opens empty.
    pub fn open(
        storage: Arc<dyn ContactStorage>,
        namespace: impl Into<String>,
    ) -> StorageResult<Self> {
        let namespace = namespace.into();
        let records = storage.load(&namespace)?.unwrap_or_default();

        info!(
            namespace = %namespace,
            count = records.len(),
            "Contact store opened"
        );

        Ok(Self {
            records,
            storage,
            namespace,
        })
    }

    /// All records in insertion order.
    pub fn contacts(&self) -> &[ContactRecord] {
        &self.records
    }

    /// Look up a record by id.
    pub fn get(&self, id: i64) -> Option<&ContactRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Namespace the records are persisted under.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Append a new contact.
    ///
    /// The record gets id `1 + max(existing ids, 0)`; ids of deleted records
    /// are never handed out again unless they exceed every remaining id. Any
    /// `id` or `hash` carried by `data` is ignored, and no duplicate check is
    /// made.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::IdSpaceExhausted` if the largest id is already
    /// `i64::MAX`; the store is left unchanged.
    pub fn add_new_contact(
        &mut self,
        data: impl Into<ContactFields>,
    ) -> StoreResult<&ContactRecord> {
        let id = Self::id_after(self.max_id(), 0)?;
        let record = data.into().into_record(id);
        debug!(id = record.id, hash = %record.hash, "Adding contact");

        let index = self.records.len();
        self.records.push(record);
        self.persist();
        Ok(&self.records[index])
    }

    /// Replace the record with `data.id` in place, recomputing its hash.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no record has that id; the store is
    /// left unchanged and nothing is persisted.
    pub fn update_contact(&mut self, data: &ContactRecord) -> StoreResult<()> {
        let index = self.position_of(data.id)?;
        let record = data.fields().into_record(data.id);
        debug!(id = record.id, hash = %record.hash, "Updating contact");

        self.records[index] = record;
        self.persist();
        Ok(())
    }

    /// Remove the record with `data.id` and return it.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no record has that id.
    pub fn delete_contact(&mut self, data: &ContactRecord) -> StoreResult<ContactRecord> {
        let index = self.position_of(data.id)?;
        let removed = self.records.remove(index);
        debug!(id = removed.id, "Deleted contact");

        self.persist();
        Ok(removed)
    }

    /// Append every valid, previously unknown candidate from an import batch.
    ///
    /// Candidates missing any of the four identity fields are skipped, as are
    /// candidates whose fingerprint matches a record present before the
    /// batch started. Candidates within one batch are not compared with each
    /// other, so identical candidates are all kept.
    ///
    /// An accepted candidate at position `idx` of `data` gets id
    /// `1 + max(existing ids, 0) + idx`. Positions of rejected candidates
    /// are skipped, leaving gaps in the assigned ids.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::IdSpaceExhausted` if a valid candidate's id would
    /// exceed `i64::MAX`. Nothing from the batch is kept in that case.
    pub fn add_imported_contacts(
        &mut self,
        data: impl IntoIterator<Item = RawImportCandidate>,
    ) -> StoreResult<ImportReport> {
        let known_hashes: HashSet<&str> =
            self.records.iter().map(|record| record.hash.as_str()).collect();
        let base_id = self.max_id();

        let mut report = ImportReport::default();
        let mut accepted = Vec::new();

        for (idx, candidate) in data.into_iter().enumerate() {
            let fields = match ContactFields::try_from(candidate) {
                Ok(fields) => fields,
                Err(err) => {
                    trace!(position = idx, reason = %err, "Import candidate rejected");
                    report.rejected_invalid += 1;
                    continue;
                }
            };

            let record = fields.into_record(Self::id_after(base_id, idx)?);
            if known_hashes.contains(record.hash.as_str()) {
                trace!(position = idx, hash = %record.hash, "Import candidate already present");
                report.rejected_duplicate += 1;
                continue;
            }

            accepted.push(record);
        }

        report.accepted = accepted.len();
        self.records.extend(accepted);
        if report.accepted > 0 {
            self.persist();
        }

        info!(
            accepted = report.accepted,
            rejected_invalid = report.rejected_invalid,
            rejected_duplicate = report.rejected_duplicate,
            "Import batch processed"
        );
        Ok(report)
    }

    fn max_id(&self) -> i64 {
        self.records.iter().map(|record| record.id).fold(0, i64::max)
    }

    /// Id `1 + max_id + offset`, if it fits.
    fn id_after(max_id: i64, offset: usize) -> StoreResult<i64> {
        i64::try_from(offset)
            .ok()
            .and_then(|offset| max_id.checked_add(1)?.checked_add(offset))
            .ok_or_else(|| {
                warn!(max_id, offset, "Contact id space exhausted");
                StoreError::IdSpaceExhausted(max_id)
            })
    }

    fn position_of(&self, id: i64) -> StoreResult<usize> {
        self.records
            .iter()
            .position(|record| record.id == id)
            .ok_or_else(|| {
                warn!(id, "No contact with this id");
                StoreError::NotFound(id)
            })
    }

    fn persist(&self) {
        if let Err(err) = self.storage.save(&self.namespace, &self.records) {
            warn!(
                namespace = %self.namespace,
                error = %err,
                "Failed to persist contacts"
            );
        }
    }
}
