//! # Contactbook Core
//!
//! Pure primitives for Contactbook: contact records, country codes, and the
//! collection encoding.
//!
//! This crate contains no I/O and no storage. It is plain data plus the
//! codec that turns an ordered collection of records into a single textual
//! value and back.
//!
//! ## Key Types
//!
//! - [`Record`] - One user's contact data, the unit of storage
//! - [`RecordIdentity`] - The fields that must be unique across a collection
//! - [`CountryCode`] - The fixed set of supported countries and their dial codes
//!
//! ## Encoding
//!
//! A collection is a plain JSON array of objects carrying exactly the six
//! record fields. See the [`codec`] module.

pub mod codec;
pub mod country;
pub mod error;
pub mod record;

pub use codec::{decode_collection, encode_collection, encode_collection_pretty};
pub use country::{format_phone, CountryCode};
pub use error::{CoreError, Result};
pub use record::{Record, RecordIdentity};
