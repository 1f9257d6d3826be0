//! PersistentCell Test Suite
//!
//! End-to-end tests for cells over real stores.
//!
//! ## Modules
//!
//! - `scenarios`: The greeting form flows (empty store, pre-populated store)
//! - `defaults`: Literal and producer defaults, presence rule
//! - `rekey`: Moving a cell between keys
//! - `errors`: Decode, codec and storage failures
//! - `file_store`: Cells over a file-backed store
//! - `properties`: Property-based round-trip and update checks

pub mod defaults;
pub mod file_store;
pub mod rekey;

pub use keepcell::prelude::*;
pub use keepcell::{CodecError, StorageError};
pub use serde::{Deserialize, Serialize};
pub use serde_json::{json, Value};

use parking_lot::Mutex;

/// The greeting form's state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Name {
    pub a: String,
}

impl Name {
    pub fn new(a: &str) -> Self {
        Self { a: a.to_string() }
    }
}

/// Store operation recorded by [`RecordingStore`]
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Get(String),
    Set(String, String),
    Remove(String),
}

/// MemoryStore wrapper that records every call and can fail on demand
#[derive(Debug, Default)]
pub struct RecordingStore {
    inner: MemoryStore,
    ops: Mutex<Vec<Op>>,
    fail_sets: Mutex<bool>,
    fail_removes: Mutex<bool>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inner(&self) -> &MemoryStore {
        &self.inner
    }

    pub fn ops(&self) -> Vec<Op> {
        self.ops.lock().clone()
    }

    pub fn clear_ops(&self) {
        self.ops.lock().clear();
    }

    pub fn fail_sets(&self, fail: bool) {
        *self.fail_sets.lock() = fail;
    }

    pub fn fail_removes(&self, fail: bool) {
        *self.fail_removes.lock() = fail;
    }
}

impl Store for RecordingStore {
    fn get(&self, key: &str) -> std::result::Result<Option<String>, StorageError> {
        self.ops.lock().push(Op::Get(key.to_string()));
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> std::result::Result<(), StorageError> {
        self.ops.lock().push(Op::Set(key.to_string(), value.to_string()));
        if *self.fail_sets.lock() {
            return Err(StorageError::Unavailable("injected set failure".into()));
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> std::result::Result<(), StorageError> {
        self.ops.lock().push(Op::Remove(key.to_string()));
        if *self.fail_removes.lock() {
            return Err(StorageError::Unavailable("injected remove failure".into()));
        }
        self.inner.remove(key)
    }
}

/// Decode the JSON entry stored under `key`
pub fn stored_json(store: &impl Store, key: &str) -> Option<Value> {
    store
        .get(key)
        .unwrap()
        .map(|text| serde_json::from_str(&text).unwrap())
}
