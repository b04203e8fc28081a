//! In-memory implementation of the Medium trait.
//!
//! This is primarily for testing. It has the same semantics as SQLite
//! but keeps everything in memory with no persistence. Individual
//! operations can be made to fail so callers can exercise their
//! failure paths.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;

use crate::error::{Result, StoreError};
use crate::traits::Medium;

/// In-memory medium implementation.
///
/// All data is lost when the medium is dropped. Thread-safe via RwLock.
pub struct MemoryMedium {
    values: RwLock<HashMap<String, String>>,
    faults: Faults,
}

#[derive(Default)]
struct Faults {
    reads: AtomicBool,
    writes: AtomicBool,
    removes: AtomicBool,
}

impl MemoryMedium {
    /// Create a new empty in-memory medium.
    pub fn new() -> Self {
        Self {
            values: RwLock::new(HashMap::new()),
            faults: Faults::default(),
        }
    }

    /// Make every `get` fail.
    pub fn with_fail_reads(self, fail: bool) -> Self {
        self.set_fail_reads(fail);
        self
    }

    /// Make every `set` fail without touching stored values.
    pub fn with_fail_writes(self, fail: bool) -> Self {
        self.set_fail_writes(fail);
        self
    }

    /// Make every `remove` fail without touching stored values.
    pub fn with_fail_removes(self, fail: bool) -> Self {
        self.set_fail_removes(fail);
        self
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.faults.reads.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.faults.writes.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_removes(&self, fail: bool) {
        self.faults.removes.store(fail, Ordering::SeqCst);
    }

    /// Plant a raw value, bypassing fault injection.
    ///
    /// Used to seed corrupt or hand-written documents.
    pub fn raw_insert(&self, key: impl Into<String>, value: impl Into<String>) -> Result<()> {
        let mut values = self.write_values()?;
        values.insert(key.into(), value.into());
        Ok(())
    }

    /// Read a raw value, bypassing fault injection.
    pub fn raw_get(&self, key: &str) -> Result<Option<String>> {
        let values = self.read_values()?;
        Ok(values.get(key).cloned())
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> Result<usize> {
        Ok(self.read_values()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    fn read_values(&self) -> Result<std::sync::RwLockReadGuard<'_, HashMap<String, String>>> {
        self.values
            .read()
            .map_err(|e| StoreError::Poisoned(e.to_string()))
    }

    fn write_values(&self) -> Result<std::sync::RwLockWriteGuard<'_, HashMap<String, String>>> {
        self.values
            .write()
            .map_err(|e| StoreError::Poisoned(e.to_string()))
    }
}

impl Default for MemoryMedium {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Medium for MemoryMedium {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        if self.faults.reads.load(Ordering::SeqCst) {
            return Err(StoreError::ReadRejected(key.to_string()));
        }
        self.raw_get(key)
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        if self.faults.writes.load(Ordering::SeqCst) {
            return Err(StoreError::WriteRejected(key.to_string()));
        }
        self.raw_insert(key, value)
    }

    async fn remove(&self, key: &str) -> Result<()> {
        if self.faults.removes.load(Ordering::SeqCst) {
            return Err(StoreError::RemoveRejected(key.to_string()));
        }
        let mut values = self.write_values()?;
        values.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_medium_basic() {
        let medium = MemoryMedium::new();

        assert_eq!(medium.get("k").await.unwrap(), None);

        medium.set("k", "v1").await.unwrap();
        assert_eq!(medium.get("k").await.unwrap().as_deref(), Some("v1"));

        medium.set("k", "v2").await.unwrap();
        assert_eq!(medium.get("k").await.unwrap().as_deref(), Some("v2"));
        assert_eq!(medium.len().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_memory_medium_remove_idempotent() {
        let medium = MemoryMedium::new();
        medium.set("k", "v").await.unwrap();

        medium.remove("k").await.unwrap();
        medium.remove("k").await.unwrap();

        assert!(!medium.contains("k").await.unwrap());
        assert!(medium.is_empty().unwrap());
    }

    #[tokio::test]
    async fn test_failed_write_keeps_previous_value() {
        let medium = MemoryMedium::new();
        medium.set("k", "before").await.unwrap();

        medium.set_fail_writes(true);
        let err = medium.set("k", "after").await.unwrap_err();
        assert!(matches!(err, StoreError::WriteRejected(ref key) if key == "k"));
        assert_eq!(medium.raw_get("k").unwrap().as_deref(), Some("before"));

        medium.set_fail_writes(false);
        medium.set("k", "after").await.unwrap();
        assert_eq!(medium.raw_get("k").unwrap().as_deref(), Some("after"));
    }

    #[tokio::test]
    async fn test_read_and_remove_faults() {
        let medium = MemoryMedium::new()
            .with_fail_reads(true)
            .with_fail_removes(true);
        medium.raw_insert("k", "v").unwrap();

        assert!(matches!(
            medium.get("k").await,
            Err(StoreError::ReadRejected(_))
        ));
        assert!(matches!(
            medium.remove("k").await,
            Err(StoreError::RemoveRejected(_))
        ));
        assert_eq!(medium.raw_get("k").unwrap().as_deref(), Some("v"));
    }
}
