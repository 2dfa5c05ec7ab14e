//! HTTP wire values and the transport seams the facades are generic over.
//!
//! # Design
//! Requests and responses are plain data. `BookApi` builds `HttpRequest`
//! values and parses `HttpResponse` values without touching the network;
//! whatever implements `HttpTransport` (or `AsyncHttpTransport`) performs
//! the actual exchange. Bodies are raw bytes so the codec, not the
//! transport, decides how they are interpreted.

use std::sync::Arc;

use async_trait::async_trait;

/// Boxed error cause carried by `TransportError`.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An HTTP request described as plain data.
///
/// `url` is the full absolute URL, base included. Headers keep the order
/// they were added in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    /// First value of header `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }
}

/// An HTTP response described as plain data, body fully buffered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Shorthand for a response with no headers.
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    /// Body as text for diagnostics; invalid UTF-8 is replaced.
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

fn find_header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}

/// A transport-level failure: connection refused, timeout, DNS, TLS.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct TransportError {
    message: String,
    #[source]
    source: Option<BoxError>,
}

impl TransportError {
    /// Wrap an underlying I/O or client error.
    pub fn new(source: impl Into<BoxError>) -> Self {
        let source = source.into();
        Self {
            message: source.to_string(),
            source: Some(source),
        }
    }

    /// A failure with no underlying cause.
    pub fn msg(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }
}

/// Performs one blocking HTTP request/response exchange.
///
/// Implementations must return the complete response for every status
/// code, 4xx and 5xx included; only failures to obtain a response at all
/// are `TransportError`s. A transport shared between threads must be
/// `Sync`; the facades add no locking of their own.
pub trait HttpTransport {
    fn exchange(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

impl<T: HttpTransport + ?Sized> HttpTransport for &T {
    fn exchange(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).exchange(request)
    }
}

impl<T: HttpTransport + ?Sized> HttpTransport for Arc<T> {
    fn exchange(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).exchange(request)
    }
}

/// Non-blocking counterpart of `HttpTransport` with the same contract.
#[async_trait]
pub trait AsyncHttpTransport: Send + Sync {
    async fn exchange(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

#[async_trait]
impl<T: AsyncHttpTransport + ?Sized> AsyncHttpTransport for Arc<T> {
    async fn exchange(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).exchange(request).await
    }
}
