//! Storage backends for keepcell.
//!
//! This crate implements the [`Store`] trait with:
//! - MemoryStore: FxHashMap behind a parking_lot RwLock
//! - FileStore: a JSON object file rewritten atomically on every change
//! - StoreOptions: access mode, quota and durability shared by both

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod durability;
pub mod file;
pub mod memory;
pub mod options;

pub use durability::DurabilityMode;
pub use file::FileStore;
pub use memory::MemoryStore;
pub use options::{AccessMode, StoreOptions, DEFAULT_QUOTA_BYTES};

pub use keepcell_core::{StorageError, StorageResult, Store};
