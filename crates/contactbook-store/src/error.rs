//! Error types for the store module.

use thiserror::Error;

/// Errors that can occur during medium operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database error from SQLite.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// The medium refused a write.
    #[error("write rejected for key {0}")]
    WriteRejected(String),

    /// The medium refused a read.
    #[error("read rejected for key {0}")]
    ReadRejected(String),

    /// The medium refused a remove.
    #[error("remove rejected for key {0}")]
    RemoveRejected(String),

    /// A lock guarding the medium was poisoned by a panicking holder.
    #[error("lock poisoned: {0}")]
    Poisoned(String),

    /// A blocking task did not complete.
    #[error("blocking task failed: {0}")]
    Join(String),

    /// Schema bootstrap error.
    #[error("schema error: {0}")]
    Schema(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
