//! Codecs for keepcell values.
//!
//! - [`JsonCodec`]: serde_json text, the default for every cell
//! - [`MsgpackCodec`]: MessagePack bytes wrapped in base64
//! - [`RawCodec`]: stores `String` values verbatim
//! - [`FnCodec`]: a caller-supplied serialize/deserialize closure pair

#![warn(missing_docs)]
#![warn(clippy::all)]

mod func;
mod json;
mod msgpack;
mod raw;

pub use func::FnCodec;
pub use json::JsonCodec;
pub use msgpack::MsgpackCodec;
pub use raw::RawCodec;

pub use keepcell_core::{Codec, CodecError, CodecResult};
