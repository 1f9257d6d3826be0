//! Value-level inputs to a cell: defaults, updates and the presence rule.

use std::fmt;

/// Initial value for a cell whose key has no stored entry.
///
/// The default is consulted at most once, during construction, and only if
/// the store has nothing for the key. A [`Initial::Lazy`] producer is not
/// called at all when a stored entry wins.
pub enum Initial<T> {
    /// Use this value as-is
    Value(T),
    /// Call this producer to build the value
    Lazy(Box<dyn FnOnce() -> T>),
}

impl<T> Initial<T> {
    /// A literal default.
    pub fn value(value: T) -> Self {
        Initial::Value(value)
    }

    /// A default built on demand.
    pub fn lazy(producer: impl FnOnce() -> T + 'static) -> Self {
        Initial::Lazy(Box::new(producer))
    }

    /// Check if this default is a producer.
    pub fn is_lazy(&self) -> bool {
        matches!(self, Initial::Lazy(_))
    }

    pub(crate) fn resolve(self) -> T {
        match self {
            Initial::Value(value) => value,
            Initial::Lazy(producer) => producer(),
        }
    }
}

impl<T> From<T> for Initial<T> {
    fn from(value: T) -> Self {
        Initial::Value(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for Initial<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Initial::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Initial::Lazy(_) => f.write_str("Lazy(..)"),
        }
    }
}

/// A write to a cell: a replacement value or a function of the previous one.
pub enum Update<'a, T> {
    /// Replace the value
    Replace(T),
    /// Compute the new value from the previous value
    Apply(Box<dyn FnOnce(&T) -> T + 'a>),
}

impl<'a, T> Update<'a, T> {
    /// A functional update.
    ///
    /// ```ignore
    /// cell.write(Update::with(|prev: &Name| Name { a: "bob".into(), ..prev.clone() }))?;
    /// ```
    pub fn with(f: impl FnOnce(&T) -> T + 'a) -> Self {
        Update::Apply(Box::new(f))
    }

    pub(crate) fn resolve(self, previous: &T) -> T {
        match self {
            Update::Replace(value) => value,
            Update::Apply(f) => f(previous),
        }
    }
}

impl<T> From<T> for Update<'_, T> {
    fn from(value: T) -> Self {
        Update::Replace(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for Update<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Update::Replace(value) => f.debug_tuple("Replace").field(value).finish(),
            Update::Apply(_) => f.write_str("Apply(..)"),
        }
    }
}

/// Which stored entries count as present during the initial read.
///
/// Browser-era callers tested the stored string for truthiness, so an empty
/// stored string fell through to the default. [`Presence::NonEmpty`] keeps
/// that behavior; [`Presence::Exists`] treats any entry as present and hands
/// it to the codec.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Presence {
    /// Any stored entry is decoded, including the empty string
    #[default]
    Exists,
    /// An empty stored string is treated as missing
    NonEmpty,
}

impl Presence {
    /// Check if `stored` counts as a present entry under this rule.
    pub fn admits(&self, stored: &str) -> bool {
        match self {
            Presence::Exists => true,
            Presence::NonEmpty => !stored.is_empty(),
        }
    }
}
