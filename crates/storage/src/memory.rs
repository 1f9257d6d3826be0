//! In-memory store.
//!
//! The store of choice for tests and for cells whose state only needs to
//! outlive the cell, not the process.

use crate::options::{usage, StoreOptions};
use keepcell_core::{StorageResult, Store};
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;

/// In-memory string store - FxHashMap behind an RwLock
///
/// # Thread Safety
///
/// All operations are thread-safe. Share the store between cells with `&` or
/// `Arc`; concurrent writers to one key are last-write-wins.
///
/// # Example
///
/// ```ignore
/// use keepcell_storage::MemoryStore;
///
/// let store = MemoryStore::new();
/// store.set("name", r#"{"a":"123"}"#)?;
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<FxHashMap<String, String>>,
    options: StoreOptions,
}

impl MemoryStore {
    /// Create an empty read-write store with no quota.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with the given options.
    ///
    /// `options.durability` has no effect on memory stores.
    pub fn with_options(options: StoreOptions) -> Self {
        Self {
            entries: RwLock::new(FxHashMap::default()),
            options,
        }
    }

    /// Create a store pre-populated with `entries`.
    ///
    /// Seeding bypasses access mode and quota, so a read-only store can be
    /// built with content.
    pub fn seeded<K, V>(entries: impl IntoIterator<Item = (K, V)>, options: StoreOptions) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            entries: RwLock::new(map),
            options,
        }
    }

    /// Options this store was created with.
    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    /// Get number of entries.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Check if an entry exists for `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.read().contains_key(key)
    }

    /// All keys, sorted.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.entries.read().keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Copy of all entries, ordered by key.
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.entries
            .read()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Bytes currently counted against the quota.
    pub fn used_bytes(&self) -> usize {
        usage(self.entries.read().iter())
    }

    /// Remove every entry.
    pub fn clear(&self) -> StorageResult<()> {
        self.options.check_writable("*")?;
        self.entries.write().clear();
        Ok(())
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.options.check_writable(key)?;
        let mut entries = self.entries.write();
        if self.options.quota.is_some() {
            let current = usage(entries.iter());
            self.options
                .check_quota(current, key, entries.get(key).map(String::as_str), value)?;
        }
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.options.check_writable(key)?;
        self.entries.write().remove(key);
        Ok(())
    }
}
