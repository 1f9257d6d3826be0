//! # keepcell
//!
//! Persistent state cells: in-memory values mirrored into a durable
//! key-value store.
//!
//! A cell loads its value from the store when it is created, falling back to
//! a default, and writes the encoded value back on every change of value,
//! key or codec.
//!
//! ## Quick Start
//!
//! ```ignore
//! use keepcell::prelude::*;
//!
//! let store = FileStore::open("./.keepcell.json")?;
//!
//! // Stored value wins over the default
//! let mut name: PersistentCell<Name, _> =
//!     PersistentCell::create(&store, "name", Name { a: "123".into() })?;
//!
//! // Functional update, written back immediately
//! name.update(|prev| Name { a: "bob".into(), ..prev.clone() })?;
//!
//! // Move to another slot; the old entry is removed
//! name.rekey("name:v2")?;
//! ```
//!
//! ## Crates
//!
//! - `keepcell-core` - [`Store`] and [`Codec`] traits, store/codec errors
//! - `keepcell-codec` - [`JsonCodec`], [`MsgpackCodec`], [`RawCodec`], [`FnCodec`]
//! - `keepcell-storage` - [`MemoryStore`], [`FileStore`], [`StoreOptions`]

#![warn(missing_docs)]

mod builder;
mod cell;
mod error;
mod types;

pub mod prelude;

// Re-export main entry points
pub use builder::CellBuilder;
pub use cell::PersistentCell;
pub use error::{Error, Result};
pub use types::{Initial, Presence, Update};

// Re-export the seams and their implementations
pub use keepcell_codec::{FnCodec, JsonCodec, MsgpackCodec, RawCodec};
pub use keepcell_core::{Codec, CodecError, StorageError, Store};
pub use keepcell_storage::{
    AccessMode, DurabilityMode, FileStore, MemoryStore, StoreOptions, DEFAULT_QUOTA_BYTES,
};
