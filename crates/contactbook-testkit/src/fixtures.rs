//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use std::sync::Arc;

use contactbook::{BookConfig, RecordStore};
use contactbook_core::Record;
use contactbook_store::MemoryMedium;
use tracing_subscriber::filter::LevelFilter;

/// A record store over an in-memory medium the test can still reach.
pub struct TestFixture {
    pub medium: Arc<MemoryMedium>,
    pub store: RecordStore<Arc<MemoryMedium>>,
}

impl TestFixture {
    /// Create a fixture with the default configuration.
    pub fn new() -> Self {
        Self::with_config(BookConfig::default())
    }

    /// Create a fixture with a custom configuration.
    pub fn with_config(config: BookConfig) -> Self {
        let medium = Arc::new(MemoryMedium::new());
        Self {
            store: RecordStore::new(medium.clone(), config),
            medium,
        }
    }

    /// Create a fixture whose collection key already holds `raw`.
    pub fn with_raw(raw: &str) -> Self {
        let fixture = Self::new();
        fixture
            .medium
            .raw_insert(fixture.key(), raw)
            .expect("seed raw value");
        fixture
    }

    /// Create a fixture already holding `records`, appended in order.
    pub async fn seeded(records: &[Record]) -> Self {
        let fixture = Self::new();
        for record in records {
            fixture
                .store
                .append(record.clone())
                .await
                .expect("seed record");
        }
        fixture
    }

    /// The collection key in use.
    pub fn key(&self) -> &str {
        &self.store.config().collection_key
    }

    /// The raw persisted value, bypassing the store.
    pub fn raw(&self) -> Option<String> {
        self.medium.raw_get(self.key()).expect("read raw value")
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// A deterministic record; distinct `n` give distinct emails and phones.
pub fn sample_record(n: u32) -> Record {
    Record::new(
        format!("First{n}"),
        format!("Last{n}"),
        "US",
        format!("555{n:07}"),
        format!("user{n}@example.com"),
        format!("{n} Main Street"),
    )
}

/// `count` distinct records, numbered from zero.
pub fn sample_records(count: u32) -> Vec<Record> {
    (0..count).map(sample_record).collect()
}

/// Install a test-friendly tracing subscriber. Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(LevelFilter::DEBUG)
        .try_init();
}
