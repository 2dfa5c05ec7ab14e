//! Blocking facade over `BookApi` and an `HttpTransport`.
//!
//! Each operation is one request/response exchange on the caller's thread.
//! `BookClient` is stateless after construction; it is safe to share
//! between threads exactly when its transport and codec are.

use crate::codec::{JsonCodec, SerdeJsonCodec};
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, HttpTransport};
use crate::mapping::BookApi;
use crate::types::{Book, BookResource};

/// Typed client for the book catalog service.
#[derive(Debug, Clone)]
pub struct BookClient<T, C = SerdeJsonCodec> {
    api: BookApi<C>,
    transport: T,
}

impl<T: HttpTransport> BookClient<T, SerdeJsonCodec> {
    /// Client over `base_url` using `serde_json` and the `_links` envelope.
    pub fn new(base_url: &str, transport: T) -> Result<Self, ApiError> {
        Self::with_config(&ClientConfig::new(base_url), transport, SerdeJsonCodec)
    }
}

impl<T: HttpTransport, C: JsonCodec> BookClient<T, C> {
    pub fn with_config(config: &ClientConfig, transport: T, codec: C) -> Result<Self, ApiError> {
        Ok(Self {
            api: BookApi::with_codec(config, codec)?,
            transport,
        })
    }

    /// The request/response mapping this client drives.
    pub fn api(&self) -> &BookApi<C> {
        &self.api
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// `GET {base}/{isbn}`.
    pub fn find_by_isbn(&self, isbn: &str) -> Result<BookResource, ApiError> {
        let request = self.api.build_find_by_isbn(isbn)?;
        let response = self.execute(&request)?;
        self.api.parse_find_by_isbn(response)
    }

    /// `GET {base}`; books come back in server order.
    pub fn find_all(&self) -> Result<Vec<BookResource>, ApiError> {
        let request = self.api.build_find_all();
        let response = self.execute(&request)?;
        self.api.parse_find_all(response)
    }

    /// `POST {base}` with the book as a JSON body.
    pub fn create(&self, book: &Book) -> Result<(), ApiError> {
        let request = self.api.build_create(book)?;
        let response = self.execute(&request)?;
        self.api.parse_create(response)
    }

    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        Ok(self.transport.exchange(request)?)
    }
}
