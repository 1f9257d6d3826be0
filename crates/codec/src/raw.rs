//! Identity codec for plain strings.

use keepcell_core::{Codec, CodecResult};

/// Stores `String` values verbatim, with no quoting or escaping.
///
/// Useful for cells whose value already is the stored text (tokens, theme
/// names) and for reading entries written by other tools.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawCodec;

impl Codec<String> for RawCodec {
    fn encode(&self, value: &String) -> CodecResult<String> {
        Ok(value.clone())
    }

    fn decode(&self, text: &str) -> CodecResult<String> {
        Ok(text.to_string())
    }
}
