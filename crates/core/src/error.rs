//! Error types raised by stores and codecs.

use std::io;
use thiserror::Error;

/// Errors raised by a [`Store`](crate::Store) implementation.
///
/// A store that fails an operation must leave its previously persisted state
/// untouched.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Writing the entry would exceed the store's quota
    #[error("quota exceeded writing `{key}`: {requested} bytes requested, limit is {limit}")]
    QuotaExceeded {
        /// Key being written
        key: String,
        /// Projected store usage after the write, in bytes
        requested: usize,
        /// Configured quota in bytes
        limit: usize,
    },

    /// The store was opened read-only
    #[error("store is read-only, refusing to modify `{key}`")]
    ReadOnly {
        /// Key the caller tried to modify
        key: String,
    },

    /// I/O error from a file-backed store
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Persisted data could not be parsed
    #[error("corruption: {0}")]
    Corruption(String),

    /// The store cannot be reached (poisoned, closed, not present)
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl StorageError {
    /// Check if this is a quota error.
    pub fn is_quota_exceeded(&self) -> bool {
        matches!(self, StorageError::QuotaExceeded { .. })
    }

    /// Check if this is a permission error.
    pub fn is_read_only(&self) -> bool {
        matches!(self, StorageError::ReadOnly { .. })
    }
}

/// Errors raised by a [`Codec`](crate::Codec) implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The value cannot be represented in the codec's text form
    #[error("encode failed: {0}")]
    Encode(String),

    /// The text is not valid input for the codec
    #[error("decode failed: {0}")]
    Decode(String),
}

impl CodecError {
    /// Build an encode error from any displayable cause.
    pub fn encode(cause: impl std::fmt::Display) -> Self {
        CodecError::Encode(cause.to_string())
    }

    /// Build a decode error from any displayable cause.
    pub fn decode(cause: impl std::fmt::Display) -> Self {
        CodecError::Decode(cause.to_string())
    }
}

/// Result type for store operations.
pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// Result type for codec operations.
pub type CodecResult<T> = std::result::Result<T, CodecError>;
