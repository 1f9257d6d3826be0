//! The value/text conversion seam.

use crate::error::CodecResult;
use std::sync::Arc;

/// Bidirectional conversion between a value and its stored string form.
///
/// Equality after a round trip is the codec's own notion of equality: a
/// lossy codec is allowed, as long as `decode(encode(v))` is what the caller
/// expects to read back.
pub trait Codec<T> {
    /// Encode a value into its stored text.
    fn encode(&self, value: &T) -> CodecResult<String>;

    /// Decode stored text back into a value.
    fn decode(&self, text: &str) -> CodecResult<T>;
}

impl<T, C: Codec<T> + ?Sized> Codec<T> for &C {
    fn encode(&self, value: &T) -> CodecResult<String> {
        (**self).encode(value)
    }

    fn decode(&self, text: &str) -> CodecResult<T> {
        (**self).decode(text)
    }
}

impl<T, C: Codec<T> + ?Sized> Codec<T> for Box<C> {
    fn encode(&self, value: &T) -> CodecResult<String> {
        (**self).encode(value)
    }

    fn decode(&self, text: &str) -> CodecResult<T> {
        (**self).decode(text)
    }
}

impl<T, C: Codec<T> + ?Sized> Codec<T> for Arc<C> {
    fn encode(&self, value: &T) -> CodecResult<String> {
        (**self).encode(value)
    }

    fn decode(&self, text: &str) -> CodecResult<T> {
        (**self).decode(text)
    }
}
