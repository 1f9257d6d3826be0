//! Core traits and error types for keepcell.
//!
//! This crate defines the two seams every persistent cell is built on:
//!
//! - [`Store`]: a synchronous string-keyed, string-valued durable store
//! - [`Codec`]: a bidirectional conversion between a value and its stored text
//!
//! Concrete stores live in `keepcell-storage`, concrete codecs in
//! `keepcell-codec`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codec;
pub mod error;
pub mod store;

pub use codec::Codec;
pub use error::{CodecError, CodecResult, StorageError, StorageResult};
pub use store::Store;
