//! Convenient imports for keepcell.
//!
//! ```ignore
//! use keepcell::prelude::*;
//!
//! let store = MemoryStore::new();
//! let cell: PersistentCell<String, _> = PersistentCell::create(&store, "theme", "dark".to_string())?;
//! ```

// Cells
pub use crate::builder::CellBuilder;
pub use crate::cell::PersistentCell;
pub use crate::types::{Initial, Presence, Update};

// Error handling
pub use crate::error::{Error, Result};

// Traits
pub use keepcell_core::{Codec, Store};

// Codecs and stores
pub use keepcell_codec::{FnCodec, JsonCodec, MsgpackCodec, RawCodec};
pub use keepcell_storage::{AccessMode, DurabilityMode, FileStore, MemoryStore, StoreOptions};
