//! Options shared by every store in this crate.
//!
//! Use the builder pattern to configure options:
//!
//! ```ignore
//! use keepcell_storage::{AccessMode, StoreOptions};
//!
//! let opts = StoreOptions::new()
//!     .access_mode(AccessMode::ReadOnly)
//!     .quota(64 * 1024);
//! ```

use crate::durability::DurabilityMode;
use keepcell_core::{StorageError, StorageResult};
use serde::{Deserialize, Serialize};

/// Quota browsers commonly apply to an origin's local storage.
pub const DEFAULT_QUOTA_BYTES: usize = 5 * 1024 * 1024;

/// Controls whether the store allows writes or is read-only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessMode {
    /// `set` and `remove` are allowed
    #[default]
    ReadWrite,
    /// `set` and `remove` fail with [`StorageError::ReadOnly`]
    ReadOnly,
}

/// Options for opening a store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreOptions {
    /// Whether writes are permitted
    pub access_mode: AccessMode,
    /// Maximum total size of keys plus values, in bytes
    pub quota: Option<usize>,
    /// fsync policy for file-backed stores
    pub durability: DurabilityMode,
}

impl StoreOptions {
    /// Create options with read-write access, no quota, buffered durability.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the access mode.
    pub fn access_mode(mut self, mode: AccessMode) -> Self {
        self.access_mode = mode;
        self
    }

    /// Shorthand for `access_mode(AccessMode::ReadOnly)`.
    pub fn read_only(self) -> Self {
        self.access_mode(AccessMode::ReadOnly)
    }

    /// Limit total store usage to `bytes`.
    pub fn quota(mut self, bytes: usize) -> Self {
        self.quota = Some(bytes);
        self
    }

    /// Apply [`DEFAULT_QUOTA_BYTES`], like browser local storage.
    pub fn browser_quota(self) -> Self {
        self.quota(DEFAULT_QUOTA_BYTES)
    }

    /// Set the durability mode (file-backed stores only).
    pub fn durability(mut self, mode: DurabilityMode) -> Self {
        self.durability = mode;
        self
    }

    /// Fail if the store does not accept writes.
    pub(crate) fn check_writable(&self, key: &str) -> StorageResult<()> {
        match self.access_mode {
            AccessMode::ReadWrite => Ok(()),
            AccessMode::ReadOnly => Err(StorageError::ReadOnly {
                key: key.to_string(),
            }),
        }
    }

    /// Fail if replacing `key` with `value` would push usage past the quota.
    ///
    /// `current` is the usage before the write, `existing` the value
    /// currently stored under `key`.
    pub(crate) fn check_quota(
        &self,
        current: usize,
        key: &str,
        existing: Option<&str>,
        value: &str,
    ) -> StorageResult<()> {
        let Some(limit) = self.quota else {
            return Ok(());
        };
        let released = existing.map_or(0, |old| entry_size(key, old));
        let requested = current.saturating_sub(released) + entry_size(key, value);
        if requested > limit {
            return Err(StorageError::QuotaExceeded {
                key: key.to_string(),
                requested,
                limit,
            });
        }
        Ok(())
    }
}

/// Bytes an entry counts against the quota.
pub(crate) fn entry_size(key: &str, value: &str) -> usize {
    key.len() + value.len()
}

/// Total bytes used by a set of entries.
pub(crate) fn usage<'a>(entries: impl Iterator<Item = (&'a String, &'a String)>) -> usize {
    entries.map(|(k, v)| entry_size(k, v)).sum()
}
