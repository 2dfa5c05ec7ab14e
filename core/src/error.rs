//! Error types for the book catalog client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the book does not exist" from "the server returned an unexpected
//! status." All other non-2xx responses land in `Http` with the raw status
//! code and body bytes for diagnosis. `InvalidArgument` is raised before any
//! transport call is made.

use crate::codec::CodecError;
use crate::http::TransportError;

/// Errors returned by `BookApi`, `BookClient` and `AsyncBookClient`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A parameter or payload would produce a malformed request.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The request payload could not be encoded to JSON.
    #[error("serialization failed: {0}")]
    Serialization(#[source] CodecError),

    /// The transport could not complete the exchange.
    #[error("transport failed: {0}")]
    Transport(#[from] TransportError),

    /// The server returned 404.
    #[error("book not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {}", String::from_utf8_lossy(.body))]
    Http { status: u16, body: Vec<u8> },

    /// The response body did not decode into the expected shape.
    #[error("deserialization failed: {0}")]
    Deserialization(#[source] CodecError),
}

impl ApiError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        ApiError::InvalidArgument(message.into())
    }

    /// Status code of the failed response, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::NotFound => Some(404),
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
