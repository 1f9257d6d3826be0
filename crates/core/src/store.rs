//! The durable key-value store seam.
//!
//! A [`Store`] is the only capability a persistent cell needs from its
//! backing storage: synchronous `get`, `set` and `remove` over string keys and
//! string values. Anything that offers these (an in-memory map in tests, a
//! JSON file, browser storage behind a binding) can back a cell.

use crate::error::StorageResult;
use std::sync::Arc;

/// Synchronous string-keyed, string-valued durable store.
///
/// Methods take `&self`: stores are shared collaborators, and two owners
/// writing the same key are last-write-wins.
pub trait Store {
    /// Get the entry stored under `key`.
    ///
    /// Returns `None` if the key doesn't exist.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Store `value` under `key`, replacing any existing entry.
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Remove the entry under `key`.
    ///
    /// Removing a missing key is not an error.
    fn remove(&self, key: &str) -> StorageResult<()>;
}

impl<S: Store + ?Sized> Store for &S {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        (**self).remove(key)
    }
}

impl<S: Store + ?Sized> Store for Box<S> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        (**self).remove(key)
    }
}

impl<S: Store + ?Sized> Store for Arc<S> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        (**self).remove(key)
    }
}
