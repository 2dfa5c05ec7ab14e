//! JSON codec seam.
//!
//! The facades never call `serde_json` for payload bytes directly; they go
//! through a `JsonCodec` so hosts can substitute their own configured codec.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::http::BoxError;

/// Encode failure or decode failure reported by a `JsonCodec`.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct CodecError(#[source] BoxError);

impl CodecError {
    pub fn new(source: impl Into<BoxError>) -> Self {
        Self(source.into())
    }
}

/// Converts between in-memory values and JSON bytes.
pub trait JsonCodec {
    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, CodecError>;

    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, CodecError>;
}

/// `JsonCodec` backed by `serde_json` with its default settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerdeJsonCodec;

impl JsonCodec for SerdeJsonCodec {
    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, CodecError> {
        serde_json::to_vec(value).map_err(CodecError::new)
    }

    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, CodecError> {
        serde_json::from_slice(bytes).map_err(CodecError::new)
    }
}
