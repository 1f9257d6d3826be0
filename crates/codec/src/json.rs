//! JSON codec backed by serde_json.

use keepcell_core::{Codec, CodecError, CodecResult};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Structured-text codec using serde_json.
///
/// Compact output by default; [`JsonCodec::pretty`] indents. Values JSON
/// cannot represent (non-finite floats, maps with non-string keys) fail with
/// [`CodecError::Encode`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonCodec {
    pretty: bool,
}

impl JsonCodec {
    /// Create a compact JSON codec.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a JSON codec that writes indented output.
    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    /// Check if this codec indents its output.
    pub fn is_pretty(&self) -> bool {
        self.pretty
    }
}

impl<T: Serialize + DeserializeOwned> Codec<T> for JsonCodec {
    fn encode(&self, value: &T) -> CodecResult<String> {
        let text = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        text.map_err(CodecError::encode)
    }

    fn decode(&self, text: &str) -> CodecResult<T> {
        serde_json::from_str(text).map_err(CodecError::decode)
    }
}
