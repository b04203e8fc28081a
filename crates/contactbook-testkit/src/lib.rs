//! # Contactbook Testkit
//!
//! Testing utilities for Contactbook.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Fixed collections with their exact encoded text
//! - **Generators**: Proptest strategies for records and collections
//! - **Fixtures**: A record store over an inspectable in-memory medium
//!
//! ## Golden Vectors
//!
//! Golden vectors pin the persisted document format:
//!
//! ```rust
//! use contactbook_testkit::vectors::all_vectors;
//! use contactbook_core::encode_collection;
//!
//! for vector in all_vectors() {
//!     assert_eq!(encode_collection(&vector.records).unwrap(), vector.encoded);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use contactbook_testkit::generators::distinct_records;
//!
//! proptest! {
//!     #[test]
//!     fn appends_succeed(records in distinct_records(20)) {
//!         // ...
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust,ignore
//! use contactbook_testkit::fixtures::{sample_record, TestFixture};
//!
//! let fixture = TestFixture::new();
//! fixture.store.append(sample_record(1)).await.unwrap();
//! assert!(fixture.raw().is_some());
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{init_tracing, sample_record, sample_records, TestFixture};
pub use generators::{distinct_records, record};
pub use vectors::{all_vectors, verify_all_vectors, GoldenVector};
