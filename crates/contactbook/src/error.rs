//! Error types for the record store.

use std::fmt;

use contactbook_core::CoreError;
use contactbook_store::StoreError;
use thiserror::Error;

/// The mutation a write belonged to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOp {
    Append,
    Update,
    Delete,
}

impl WriteOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Append => "append",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for WriteOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur during record store operations.
#[derive(Debug, Error)]
pub enum BookError {
    /// Another record already uses this email.
    #[error("duplicate email {email:?}: already used by record {existing}")]
    DuplicateEmail { email: String, existing: usize },

    /// Another record already uses this phone number under this country code.
    #[error("duplicate phone {country_code} {phone_number}: already used by record {existing}")]
    DuplicatePhone {
        country_code: String,
        phone_number: String,
        existing: usize,
    },

    /// The index does not address a record in the collection.
    #[error("index {index} out of range for collection of length {len}")]
    IndexOutOfRange { index: i64, len: usize },

    /// The medium did not accept the rewritten collection.
    #[error("persistence write failed during {op}: {source}")]
    PersistenceWrite {
        op: WriteOp,
        #[source]
        source: StoreError,
    },

    /// The collection could not be encoded for writing.
    #[error("encoding failed: {0}")]
    Encoding(#[from] CoreError),
}

impl BookError {
    /// Whether the failure means the change was not persisted for reasons
    /// outside the caller's input.
    pub fn is_persistence_failure(&self) -> bool {
        matches!(self, Self::PersistenceWrite { .. } | Self::Encoding(_))
    }

    /// Message suitable for showing to the person filling in the form.
    pub fn user_message(&self) -> String {
        match self {
            Self::DuplicateEmail { .. } => "A user with this email already exists.".to_string(),
            Self::DuplicatePhone { .. } => {
                "A user with this phone number already exists.".to_string()
            }
            Self::IndexOutOfRange { index, .. } => {
                format!("No record exists at position {}.", index)
            }
            Self::PersistenceWrite {
                op: WriteOp::Update,
                ..
            } => "Failed to update user data. Please try again.".to_string(),
            Self::PersistenceWrite { .. } | Self::Encoding(_) => {
                "Failed to save user data. Please try again.".to_string()
            }
        }
    }
}

/// Result type for record store operations.
pub type Result<T> = std::result::Result<T, BookError>;
