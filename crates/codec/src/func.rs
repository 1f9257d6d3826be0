//! Codec assembled from a serialize/deserialize closure pair.

use keepcell_core::{Codec, CodecResult};
use std::fmt;
use std::marker::PhantomData;

/// A codec built from two closures.
///
/// # Example
///
/// ```ignore
/// let upper = FnCodec::new(
///     |v: &String| Ok(v.to_uppercase()),
///     |s: &str| Ok(s.to_lowercase()),
/// );
/// ```
pub struct FnCodec<T, E, D> {
    encode: E,
    decode: D,
    _value: PhantomData<fn() -> T>,
}

impl<T, E, D> FnCodec<T, E, D>
where
    E: Fn(&T) -> CodecResult<String>,
    D: Fn(&str) -> CodecResult<T>,
{
    /// Create a codec from an encode and a decode closure.
    pub fn new(encode: E, decode: D) -> Self {
        Self {
            encode,
            decode,
            _value: PhantomData,
        }
    }
}

impl<T, E, D> Codec<T> for FnCodec<T, E, D>
where
    E: Fn(&T) -> CodecResult<String>,
    D: Fn(&str) -> CodecResult<T>,
{
    fn encode(&self, value: &T) -> CodecResult<String> {
        (self.encode)(value)
    }

    fn decode(&self, text: &str) -> CodecResult<T> {
        (self.decode)(text)
    }
}

impl<T, E, D> fmt::Debug for FnCodec<T, E, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnCodec").finish_non_exhaustive()
    }
}
