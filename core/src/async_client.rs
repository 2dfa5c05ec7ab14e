//! Async facade with the same contracts as `BookClient`.
//!
//! The mapping is shared with the blocking client; only the exchange is
//! awaited. Ordering between concurrent calls is whatever the transport
//! gives.

use crate::codec::{JsonCodec, SerdeJsonCodec};
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{AsyncHttpTransport, HttpRequest, HttpResponse};
use crate::mapping::BookApi;
use crate::types::{Book, BookResource};

/// Non-blocking typed client for the book catalog service.
#[derive(Debug, Clone)]
pub struct AsyncBookClient<T, C = SerdeJsonCodec> {
    api: BookApi<C>,
    transport: T,
}

impl<T: AsyncHttpTransport> AsyncBookClient<T, SerdeJsonCodec> {
    pub fn new(base_url: &str, transport: T) -> Result<Self, ApiError> {
        Self::with_config(&ClientConfig::new(base_url), transport, SerdeJsonCodec)
    }
}

impl<T: AsyncHttpTransport, C: JsonCodec> AsyncBookClient<T, C> {
    pub fn with_config(config: &ClientConfig, transport: T, codec: C) -> Result<Self, ApiError> {
        Ok(Self {
            api: BookApi::with_codec(config, codec)?,
            transport,
        })
    }

    pub fn api(&self) -> &BookApi<C> {
        &self.api
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn find_by_isbn(&self, isbn: &str) -> Result<BookResource, ApiError> {
        let request = self.api.build_find_by_isbn(isbn)?;
        let response = self.execute(&request).await?;
        self.api.parse_find_by_isbn(response)
    }

    pub async fn find_all(&self) -> Result<Vec<BookResource>, ApiError> {
        let request = self.api.build_find_all();
        let response = self.execute(&request).await?;
        self.api.parse_find_all(response)
    }

    pub async fn create(&self, book: &Book) -> Result<(), ApiError> {
        let request = self.api.build_create(book)?;
        let response = self.execute(&request).await?;
        self.api.parse_create(response)
    }

    async fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        Ok(self.transport.exchange(request).await?)
    }
}
