//! Persistent state cell.
//!
//! A [`PersistentCell`] owns a value and mirrors it into one slot of a
//! [`Store`]. The value is loaded once, at construction, and written back on
//! every change of value, key or codec.
//!
//! # Example
//!
//! ```ignore
//! use keepcell::prelude::*;
//!
//! let store = MemoryStore::new();
//! let mut cell: PersistentCell<Name, _> =
//!     PersistentCell::create(&store, "name", Name { a: "123".into() })?;
//!
//! cell.update(|prev| Name { a: "bob".into(), ..prev.clone() })?;
//! assert_eq!(cell.get().a, "bob");
//! ```
//!
//! ## Write-back
//!
//! Write-back is unconditional: the encoded value is written even when it did
//! not change. When the cell has been re-keyed since the last write-back, the
//! entry under the old key is removed first, so a cell never leaves more than
//! one entry behind.
//!
//! The in-memory value is updated before write-back starts. If write-back
//! fails the error is returned and memory stays ahead of the store until the
//! next successful write. A store failure between removing the old key and
//! writing the new one leaves both keys empty.

use crate::builder::CellBuilder;
use crate::error::{Error, Result};
use crate::types::{Initial, Presence, Update};
use keepcell_codec::JsonCodec;
use keepcell_core::{Codec, Store};
use tracing::{debug, warn};

/// An in-memory value bound to a store slot.
#[derive(Debug)]
pub struct PersistentCell<T, S, C = JsonCodec> {
    store: S,
    codec: C,
    /// Key the cell is bound to now
    key: String,
    /// Key of the entry written by the last write-back
    synced_key: String,
    value: T,
}

impl<T, S> PersistentCell<T, S, JsonCodec>
where
    S: Store,
    JsonCodec: Codec<T>,
{
    /// Create a cell using the JSON codec and perform the initial read.
    ///
    /// If `key` has a stored entry it is decoded and wins over `initial`;
    /// otherwise `initial` is used. Construction never writes to the store.
    pub fn create(store: S, key: impl Into<String>, initial: impl Into<Initial<T>>) -> Result<Self> {
        CellBuilder::with_initial(store, key, initial).open()
    }
}

impl<T: Default, S> PersistentCell<T, S, JsonCodec> {
    /// Start configuring a cell.
    ///
    /// Falls back to `T::default()` unless a default is given.
    pub fn builder(store: S, key: impl Into<String>) -> CellBuilder<T, S, JsonCodec> {
        CellBuilder::new(store, key)
    }
}

impl<T, S, C> PersistentCell<T, S, C>
where
    S: Store,
    C: Codec<T>,
{
    /// Bind a cell to `key`: `Uninitialized -> Bound(key, value)`.
    pub(crate) fn bind(
        store: S,
        codec: C,
        key: String,
        initial: Initial<T>,
        presence: Presence,
    ) -> Result<Self> {
        let value = match store.get(&key)? {
            Some(stored) if presence.admits(&stored) => {
                let value = codec.decode(&stored).map_err(|source| {
                    warn!(key = %key, error = %source, "stored entry is unreadable");
                    Error::Decode {
                        key: key.clone(),
                        source,
                    }
                })?;
                debug!(key = %key, "restored cell from store");
                value
            }
            Some(_) => {
                debug!(key = %key, "empty stored entry treated as missing");
                initial.resolve()
            }
            None => {
                debug!(key = %key, lazy = initial.is_lazy(), "no stored entry, using default");
                initial.resolve()
            }
        };

        Ok(Self {
            store,
            codec,
            synced_key: key.clone(),
            key,
            value,
        })
    }

    /// Current value. No side effects.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Apply `update` and write the result back.
    pub fn write(&mut self, update: Update<'_, T>) -> Result<()> {
        self.value = update.resolve(&self.value);
        self.sync()
    }

    /// Replace the value and write it back.
    pub fn set(&mut self, value: T) -> Result<()> {
        self.write(Update::Replace(value))
    }

    /// Compute the value from the previous one and write it back.
    pub fn update(&mut self, f: impl FnOnce(&T) -> T) -> Result<()> {
        self.write(Update::with(f))
    }

    /// Bind the cell to a new key.
    ///
    /// Writes back immediately: the entry under the old key is removed and
    /// the value is written under `key`.
    pub fn rekey(&mut self, key: impl Into<String>) -> Result<()> {
        self.key = key.into();
        self.sync()
    }

    /// Swap the codec and write the value back in the new encoding.
    pub fn set_codec(&mut self, codec: C) -> Result<()> {
        self.codec = codec;
        self.sync()
    }

    /// Write the current value back under the current key.
    ///
    /// A codec failure leaves the store untouched.
    pub fn sync(&mut self) -> Result<()> {
        let encoded = self.codec.encode(&self.value).map_err(|e| {
            warn!(key = %self.key, error = %e, "cannot encode cell value");
            Error::Codec(e)
        })?;

        if self.synced_key != self.key {
            debug!(from = %self.synced_key, to = %self.key, "re-keyed cell, removing previous entry");
            self.store.remove(&self.synced_key).map_err(|e| {
                warn!(key = %self.synced_key, error = %e, "cannot remove previous entry");
                Error::Storage(e)
            })?;
        }
        self.synced_key.clone_from(&self.key);

        self.store.set(&self.key, &encoded).map_err(|e| {
            warn!(key = %self.key, error = %e, "cannot write cell back");
            Error::Storage(e)
        })?;
        debug!(key = %self.key, bytes = encoded.len(), "wrote cell back");
        Ok(())
    }
}

impl<T, S, C> PersistentCell<T, S, C> {
    /// Key the cell is bound to.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Codec in use.
    pub fn codec(&self) -> &C {
        &self.codec
    }

    /// Take the value out of the cell.
    ///
    /// The stored entry is left in place.
    pub fn into_inner(self) -> T {
        self.value
    }
}
