//! MessagePack codec, base64-wrapped so the stored form stays text.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use keepcell_core::{Codec, CodecError, CodecResult};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Binary codec using rmp-serde with named struct fields.
///
/// Stores are string-valued, so the MessagePack bytes are encoded with the
/// standard base64 alphabet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MsgpackCodec;

impl MsgpackCodec {
    /// Create a MessagePack codec.
    pub fn new() -> Self {
        Self
    }
}

impl<T: Serialize + DeserializeOwned> Codec<T> for MsgpackCodec {
    fn encode(&self, value: &T) -> CodecResult<String> {
        let bytes = rmp_serde::to_vec_named(value).map_err(CodecError::encode)?;
        Ok(STANDARD.encode(bytes))
    }

    fn decode(&self, text: &str) -> CodecResult<T> {
        let bytes = STANDARD
            .decode(text.trim())
            .map_err(|e| CodecError::decode(format!("invalid base64: {}", e)))?;
        rmp_serde::from_slice(&bytes).map_err(CodecError::decode)
    }
}
