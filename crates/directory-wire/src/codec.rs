//! # Transaction Codec
//!
//! Thin wrappers over bincode, the binary primitive this protocol consumes.
//! Field order in the payload structs is the argument order on the wire.

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Encode or decode failure from the underlying binary codec.
#[derive(Debug, Error)]
#[error("codec: {0}")]
pub struct CodecError(#[from] bincode::Error);

/// Encode a value into its wire byte sequence.
pub fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, CodecError> {
    Ok(bincode::serialize(value)?)
}

/// Decode a value from its wire byte sequence.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, CodecError> {
    Ok(bincode::deserialize(bytes)?)
}
