//! The RecordStore: a contact collection with uniqueness guarantees.
//!
//! The whole collection lives under one key in a [`Medium`]. Every operation
//! reads it in full, every mutation rewrites it in full. Each operation's
//! read-check-write runs under a per-store exclusion section so two callers
//! sharing the store never interleave between each other's read and write.

use contactbook_core::{decode_collection, encode_collection, encode_collection_pretty, Record};
use contactbook_store::Medium;
use tokio::sync::Mutex;

use crate::config::BookConfig;
use crate::conflict::find_conflict;
use crate::error::{BookError, Result, WriteOp};

/// A record store over a persistence medium.
///
/// Indices are positional, 0-based and dense. Deleting a record shifts every
/// later record down by one, so an index is not a stable identifier across
/// mutations; [`RecordStore::position_of_email`] gives a lookup by the email
/// key instead.
pub struct RecordStore<M: Medium> {
    /// The persistence medium.
    medium: M,
    /// Configuration.
    config: BookConfig,
    /// Serializes read-check-write sequences against this collection.
    section: Mutex<()>,
}

impl<M: Medium> RecordStore<M> {
    /// Create a record store over `medium`.
    pub fn new(medium: M, config: BookConfig) -> Self {
        Self {
            medium,
            config,
            section: Mutex::new(()),
        }
    }

    /// Create a record store with the default configuration.
    pub fn with_medium(medium: M) -> Self {
        Self::new(medium, BookConfig::default())
    }

    /// Get the medium reference.
    pub fn medium(&self) -> &M {
        &self.medium
    }

    /// Get the configuration.
    pub fn config(&self) -> &BookConfig {
        &self.config
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Reads
    // ─────────────────────────────────────────────────────────────────────────

    /// Snapshot of the whole collection, in insertion order.
    ///
    /// An absent key, a failing read, and an undecodable value all read as
    /// an empty collection. A corrupt value is left in place.
    pub async fn list(&self) -> Vec<Record> {
        let _guard = self.section.lock().await;
        self.load().await
    }

    /// The record at `index`, if any.
    pub async fn get(&self, index: i64) -> Option<Record> {
        let mut records = self.list().await;
        let position = checked_index(index, records.len()).ok()?;
        Some(records.swap_remove(position))
    }

    /// Number of records in the collection.
    pub async fn len(&self) -> usize {
        self.list().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Position of the record using `email`, if any.
    pub async fn position_of_email(&self, email: &str) -> Option<usize> {
        self.list().await.iter().position(|r| r.email == email)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Append a record to the end of the collection.
    ///
    /// # Errors
    /// - `DuplicateEmail` if any record has the same email.
    /// - `DuplicatePhone` if any record has the same country code and phone.
    /// - `PersistenceWrite` if the medium rejects the write; the previously
    ///   persisted value is left as it was.
    pub async fn append(&self, candidate: Record) -> Result<()> {
        let _guard = self.section.lock().await;
        let mut records = self.load().await;

        if let Some(conflict) = find_conflict(&records, &candidate, None) {
            tracing::debug!(existing = conflict.existing(), "append rejected: {:?}", conflict);
            return Err(conflict.into_error(&candidate));
        }

        records.push(candidate);
        self.persist(&records, WriteOp::Append).await?;

        tracing::debug!(len = records.len(), "record appended");
        Ok(())
    }

    /// Replace the record at `index`.
    ///
    /// The duplicate scan skips the record being replaced, so it may keep its
    /// own email and phone.
    ///
    /// # Errors
    /// - `IndexOutOfRange` unless `0 <= index < len`, checked before any
    ///   duplicate scan.
    /// - `DuplicateEmail` / `DuplicatePhone` against any other record.
    /// - `PersistenceWrite` if the medium rejects the write.
    pub async fn update_at(&self, index: i64, candidate: Record) -> Result<()> {
        let _guard = self.section.lock().await;
        let mut records = self.load().await;
        let position = checked_index(index, records.len())?;

        if let Some(conflict) = find_conflict(&records, &candidate, Some(position)) {
            tracing::debug!(index, existing = conflict.existing(), "update rejected: {:?}", conflict);
            return Err(conflict.into_error(&candidate));
        }

        records[position] = candidate;
        self.persist(&records, WriteOp::Update).await?;

        tracing::debug!(index, "record updated");
        Ok(())
    }

    /// Remove the record at `index`, shifting later records down by one.
    ///
    /// # Errors
    /// - `IndexOutOfRange` unless `0 <= index < len`.
    /// - `PersistenceWrite` if the medium rejects the write.
    pub async fn delete_at(&self, index: i64) -> Result<()> {
        let _guard = self.section.lock().await;
        let mut records = self.load().await;
        let position = checked_index(index, records.len())?;

        records.remove(position);
        self.persist(&records, WriteOp::Delete).await?;

        tracing::debug!(index, len = records.len(), "record deleted");
        Ok(())
    }

    /// Remove the collection from the medium.
    ///
    /// Best-effort: a failing remove is logged and otherwise ignored.
    pub async fn clear(&self) {
        let _guard = self.section.lock().await;
        let key = &self.config.collection_key;

        match self.medium.remove(key).await {
            Ok(()) => tracing::debug!(key = %key, "collection cleared"),
            Err(e) => tracing::warn!(key = %key, error = %e, "failed to clear collection"),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internals (callers hold the section)
    // ─────────────────────────────────────────────────────────────────────────

    async fn load(&self) -> Vec<Record> {
        let key = &self.config.collection_key;

        let raw = match self.medium.get(key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "failed to read collection, treating as empty");
                return Vec::new();
            }
        };

        match decode_collection(&raw) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "stored collection is malformed, treating as empty");
                Vec::new()
            }
        }
    }

    async fn persist(&self, records: &[Record], op: WriteOp) -> Result<()> {
        let key = &self.config.collection_key;

        let encoded = if self.config.pretty {
            encode_collection_pretty(records)?
        } else {
            encode_collection(records)?
        };

        self.medium.set(key, &encoded).await.map_err(|e| {
            tracing::error!(key = %key, %op, error = %e, "failed to write collection");
            BookError::PersistenceWrite { op, source: e }
        })
    }
}

/// Validate a caller-supplied index against the collection length.
fn checked_index(index: i64, len: usize) -> Result<usize> {
    usize::try_from(index)
        .ok()
        .filter(|&i| i < len)
        .ok_or(BookError::IndexOutOfRange { index, len })
}
