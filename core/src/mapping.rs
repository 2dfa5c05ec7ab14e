//! Stateless HTTP request builder and response parser for the book API.
//!
//! # Design
//! `BookApi` holds only its validated configuration and codec and carries
//! no mutable state between calls. Each operation is split into a `build_*`
//! method that produces an `HttpRequest` and a `parse_*` method that
//! consumes an `HttpResponse`. The facades in `client` and `async_client`
//! run the exchange in between; hosts with their own I/O stack can call
//! these methods directly.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::codec::{CodecError, JsonCodec, SerdeJsonCodec};
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Book, BookResource, ResourceEnvelope};

/// Everything outside the RFC 3986 unreserved set is escaped.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

const CONTENT_TYPE: &str = "Content-Type";
const APPLICATION_JSON: &str = "application/json";

/// Maps the three catalog operations onto HTTP requests and back.
#[derive(Debug, Clone)]
pub struct BookApi<C = SerdeJsonCodec> {
    base_url: String,
    links_field: String,
    codec: C,
}

impl BookApi<SerdeJsonCodec> {
    /// `BookApi` over `base_url` with the default links field and codec.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Self::with_codec(&ClientConfig::new(base_url), SerdeJsonCodec)
    }
}

impl<C: JsonCodec> BookApi<C> {
    pub fn with_codec(config: &ClientConfig, codec: C) -> Result<Self, ApiError> {
        Ok(Self {
            base_url: config.normalized_base_url()?,
            links_field: config.validated_links_field()?,
            codec,
        })
    }

    /// Base URL with any single trailing slash removed.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn links_field(&self) -> &str {
        &self.links_field
    }

    pub fn build_find_by_isbn(&self, isbn: &str) -> Result<HttpRequest, ApiError> {
        require_text("isbn", isbn)?;
        Ok(HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}/{}", self.base_url, encode_segment(isbn)),
            headers: Vec::new(),
            body: None,
        })
    }

    pub fn build_find_all(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: self.base_url.clone(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create(&self, book: &Book) -> Result<HttpRequest, ApiError> {
        require_text("author", &book.author)?;
        require_text("title", &book.title)?;
        require_text("isbn", &book.isbn)?;
        let body = self.codec.encode(book).map_err(ApiError::Serialization)?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: self.base_url.clone(),
            headers: vec![(CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string())],
            body: Some(body),
        })
    }

    pub fn parse_find_by_isbn(&self, response: HttpResponse) -> Result<BookResource, ApiError> {
        check_status(&response)?;
        let envelope: ResourceEnvelope =
            self.codec.decode(&response.body).map_err(ApiError::Deserialization)?;
        self.resolve(envelope)
    }

    /// An empty (or blank) 2xx body is an empty catalog.
    pub fn parse_find_all(&self, response: HttpResponse) -> Result<Vec<BookResource>, ApiError> {
        check_status(&response)?;
        if response.body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }
        let envelopes: Vec<ResourceEnvelope> =
            self.codec.decode(&response.body).map_err(ApiError::Deserialization)?;
        envelopes.into_iter().map(|e| self.resolve(e)).collect()
    }

    /// Any 2xx is success; the response body is discarded.
    pub fn parse_create(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    fn resolve(&self, envelope: ResourceEnvelope) -> Result<BookResource, ApiError> {
        envelope
            .into_resource(&self.links_field)
            .map_err(|e| ApiError::Deserialization(CodecError::new(e)))
    }
}

/// Percent-encode `value` as a single URL path segment.
pub fn encode_segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}

fn require_text(name: &str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::invalid(format!("{name} must not be blank")));
    }
    Ok(())
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}
