//! Typed client for a remote book catalog service.
//!
//! # Overview
//! Three operations (`find_by_isbn`, `find_all`, `create`) are mapped onto
//! HTTP requests against a configured base URL. Callers never assemble
//! URLs, set headers, or parse payloads themselves.
//!
//! # Design
//! - `BookApi` is the mapping layer. It builds `HttpRequest` values and
//!   parses `HttpResponse` values without touching the network
//!   (host-does-IO pattern), so it is deterministic and easy to test.
//! - `BookClient` and `AsyncBookClient` are thin facades that run the
//!   exchange through an `HttpTransport` / `AsyncHttpTransport` supplied at
//!   construction. They hold no state beyond their configuration.
//! - Payload bytes go through a `JsonCodec`; `SerdeJsonCodec` is the default.
//! - `UreqTransport` (feature `ureq`, on by default) is a ready-made
//!   blocking transport.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod async_client;
pub mod client;
pub mod codec;
pub mod config;
pub mod error;
pub mod http;
pub mod mapping;
#[cfg(feature = "ureq")]
pub mod transport;
pub mod types;

pub use async_client::AsyncBookClient;
pub use client::BookClient;
pub use codec::{CodecError, JsonCodec, SerdeJsonCodec};
pub use config::{ClientConfig, DEFAULT_LINKS_FIELD};
pub use error::ApiError;
pub use http::{AsyncHttpTransport, HttpMethod, HttpRequest, HttpResponse, HttpTransport, TransportError};
pub use mapping::BookApi;
#[cfg(feature = "ureq")]
pub use transport::{UreqTransport, DEFAULT_BODY_LIMIT};
pub use types::{Book, BookResource, Links};
