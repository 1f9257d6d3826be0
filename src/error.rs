//! Unified error type for keepcell.
//!
//! Wraps store and codec failures and records which step of a cell's life
//! raised them.

use keepcell_core::{CodecError, StorageError};
use thiserror::Error;

/// All keepcell errors.
///
/// Every variant propagates synchronously from the operation that raised it;
/// nothing is retried or swallowed inside the cell.
#[derive(Debug, Error)]
pub enum Error {
    /// The stored entry could not be decoded during the initial read
    #[error("cannot decode stored entry for `{key}`: {source}")]
    Decode {
        /// Key whose entry was unreadable
        key: String,
        /// Codec failure
        #[source]
        source: CodecError,
    },

    /// The value could not be encoded (or decoded outside the initial read)
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    /// The store rejected the operation
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Result type for keepcell operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if the initial read hit an unreadable entry.
    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Decode { .. })
    }

    /// Check if this is a codec error raised on write-back.
    pub fn is_codec(&self) -> bool {
        matches!(self, Error::Codec(_))
    }

    /// Check if the store rejected the operation.
    pub fn is_storage(&self) -> bool {
        matches!(self, Error::Storage(_))
    }

    /// Check if the store ran out of quota.
    pub fn is_quota_exceeded(&self) -> bool {
        matches!(self, Error::Storage(e) if e.is_quota_exceeded())
    }
}
