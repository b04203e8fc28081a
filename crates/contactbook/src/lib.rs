//! # Contactbook
//!
//! A small local record store for personal-contact records entered through
//! a form. The store keeps one ordered collection per key and enforces two
//! uniqueness constraints: no two records share an email, and no two records
//! share a (country code, phone number) pair.
//!
//! ## Overview
//!
//! [`RecordStore`] exposes five operations over the collection:
//!
//! - `list` - snapshot of every record, in insertion order
//! - `append` - add a record at the end
//! - `update_at` - replace the record at an index
//! - `delete_at` - remove the record at an index
//! - `clear` - remove the collection entirely
//!
//! The collection is persisted through any [`Medium`](store::Medium), an
//! opaque key-value store. Unreadable stored data reads as an empty
//! collection; a failed write is reported to the caller.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use contactbook::{BookConfig, Outcome, Record, RecordStore};
//! use contactbook::store::SqliteMedium;
//!
//! async fn example() {
//!     let medium = SqliteMedium::open("contacts.db").unwrap();
//!     let store = RecordStore::new(medium, BookConfig::default());
//!
//!     let ada = Record::new(
//!         "Ada",
//!         "Lovelace",
//!         "GB",
//!         "2071234567",
//!         "ada@example.com",
//!         "12 St James's Square, London",
//!     );
//!
//!     let outcome = Outcome::from(store.append(ada).await);
//!     assert!(outcome.success);
//!
//!     for record in store.list().await {
//!         println!("{} {}", record.full_name(), contactbook::format_phone(&record));
//!     }
//! }
//! ```
//!
//! ## Re-exports
//!
//! - `contactbook::core` - Records, country codes, collection codec
//! - `contactbook::store` - Medium trait, SQLite and in-memory media

pub mod book;
pub mod config;
pub mod conflict;
pub mod error;
pub mod outcome;

// Re-export component crates
pub use contactbook_core as core;
pub use contactbook_store as store;

// Re-export main types for convenience
pub use book::RecordStore;
pub use config::{BookConfig, DEFAULT_COLLECTION_KEY};
pub use conflict::{find_conflict, Conflict};
pub use error::{BookError, Result, WriteOp};
pub use outcome::Outcome;

// Re-export commonly used core types
pub use contactbook_core::{format_phone, CountryCode, Record, RecordIdentity};
