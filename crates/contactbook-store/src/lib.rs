//! # Contactbook Store
//!
//! Persistence medium abstraction for Contactbook. Provides a trait-based
//! interface over an opaque key-value store with SQLite and in-memory
//! implementations.
//!
//! ## Overview
//!
//! A medium knows nothing about records. It maps string keys to opaque
//! string values and offers exactly three operations: `get`, `set`, and
//! `remove`. The record store above it owns encoding and every invariant.
//!
//! ## Key Types
//!
//! - [`Medium`] - The async trait for all persistence operations
//! - [`SqliteMedium`] - SQLite-backed persistent medium
//! - [`MemoryMedium`] - In-memory medium with fault injection for tests
//!
//! ## Usage
//!
//! ```rust,no_run
//! use contactbook_store::{Medium, SqliteMedium};
//!
//! async fn example() {
//!     let medium = SqliteMedium::open("contacts.db").unwrap();
//!     medium.set("user-form-data", "[]").await.unwrap();
//!     let raw = medium.get("user-form-data").await.unwrap();
//!     assert_eq!(raw.as_deref(), Some("[]"));
//! }
//! ```
//!
//! ## Design Notes
//!
//! - **Whole-value writes**: `set` replaces the value in one step; a failed
//!   write leaves the previous value in place.
//! - **Idempotent remove**: removing an absent key is not an error.

pub mod error;
pub mod memory;
pub mod schema;
pub mod sqlite;
pub mod traits;

pub use error::{Result, StoreError};
pub use memory::MemoryMedium;
pub use sqlite::SqliteMedium;
pub use traits::Medium;
