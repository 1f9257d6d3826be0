//! Builder for persistent cells.

use crate::cell::PersistentCell;
use crate::error::Result;
use crate::types::{Initial, Presence};
use keepcell_codec::JsonCodec;
use keepcell_core::{Codec, Store};

/// Builder for cell configuration.
///
/// # Example
///
/// ```ignore
/// // Literal default, JSON codec
/// let cell = PersistentCell::<String, _>::builder(&store, "theme")
///     .default_value("dark".to_string())
///     .open()?;
///
/// // Producer default, MessagePack codec
/// let cell = CellBuilder::with_initial(&store, "settings", Initial::lazy(Settings::load))
///     .codec(MsgpackCodec::new())
///     .open()?;
/// ```
#[derive(Debug)]
pub struct CellBuilder<T, S, C = JsonCodec> {
    store: S,
    key: String,
    initial: Initial<T>,
    codec: C,
    presence: Presence,
}

impl<T: Default, S> CellBuilder<T, S, JsonCodec> {
    /// Create a builder that falls back to `T::default()`.
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self::with_initial(store, key, T::default())
    }
}

impl<T, S> CellBuilder<T, S, JsonCodec> {
    /// Create a builder with an explicit default.
    pub fn with_initial(store: S, key: impl Into<String>, initial: impl Into<Initial<T>>) -> Self {
        Self {
            store,
            key: key.into(),
            initial: initial.into(),
            codec: JsonCodec::new(),
            presence: Presence::default(),
        }
    }
}

impl<T, S, C> CellBuilder<T, S, C> {
    /// Use `value` when the key has no stored entry.
    pub fn default_value(mut self, value: T) -> Self {
        self.initial = Initial::Value(value);
        self
    }

    /// Call `producer` when the key has no stored entry.
    ///
    /// The producer runs at most once, and not at all if a stored entry wins.
    pub fn default_with(mut self, producer: impl FnOnce() -> T + 'static) -> Self {
        self.initial = Initial::lazy(producer);
        self
    }

    /// Set which stored entries count as present.
    pub fn presence(mut self, presence: Presence) -> Self {
        self.presence = presence;
        self
    }

    /// Use a different codec.
    pub fn codec<C2>(self, codec: C2) -> CellBuilder<T, S, C2> {
        CellBuilder {
            store: self.store,
            key: self.key,
            initial: self.initial,
            codec,
            presence: self.presence,
        }
    }

    /// Open the cell, performing the initial read.
    pub fn open(self) -> Result<PersistentCell<T, S, C>>
    where
        S: Store,
        C: Codec<T>,
    {
        PersistentCell::bind(self.store, self.codec, self.key, self.initial, self.presence)
    }
}
