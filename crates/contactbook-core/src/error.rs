//! Error types for Contactbook Core.

use thiserror::Error;

/// Errors raised while encoding or decoding a collection.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("encoding error: {0}")]
    Encoding(String),

    #[error("decoding error: {0}")]
    Decoding(String),
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
