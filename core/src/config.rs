//! Client configuration: where the catalog lives and how its resources
//! advertise links.

use serde::Deserialize;
use url::Url;

use crate::error::ApiError;

/// Hypermedia envelope key used when none is configured.
pub const DEFAULT_LINKS_FIELD: &str = "_links";

const RESERVED_FIELDS: [&str; 3] = ["author", "title", "isbn"];

/// Configuration for `BookApi` and the facades built on it.
///
/// Deserializable so hosts can embed it in their own config files:
///
/// ```toml
/// base_url = "https://api.example.test/books"
/// links_field = "_links"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClientConfig {
    pub base_url: String,
    #[serde(default = "default_links_field")]
    pub links_field: String,
}

fn default_links_field() -> String {
    DEFAULT_LINKS_FIELD.to_string()
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            links_field: default_links_field(),
        }
    }

    pub fn with_links_field(mut self, links_field: impl Into<String>) -> Self {
        self.links_field = links_field.into();
        self
    }

    /// Check the configuration and return the normalized base URL.
    ///
    /// The base must be an absolute URL that can carry a path and has no
    /// query or fragment. One trailing slash is removed.
    pub(crate) fn normalized_base_url(&self) -> Result<String, ApiError> {
        let raw = self.base_url.trim();
        if raw.is_empty() {
            return Err(ApiError::invalid("base URL must not be blank"));
        }
        let parsed = Url::parse(raw)
            .map_err(|e| ApiError::invalid(format!("base URL {raw:?} is not an absolute URL: {e}")))?;
        if parsed.cannot_be_a_base() {
            return Err(ApiError::invalid(format!("base URL {raw:?} cannot carry a path")));
        }
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(ApiError::invalid(format!(
                "base URL {raw:?} must not have a query or fragment"
            )));
        }
        Ok(raw.strip_suffix('/').unwrap_or(raw).to_string())
    }

    pub(crate) fn validated_links_field(&self) -> Result<String, ApiError> {
        let field = self.links_field.trim();
        if field.is_empty() {
            return Err(ApiError::invalid("links field must not be blank"));
        }
        if RESERVED_FIELDS.contains(&field) {
            return Err(ApiError::invalid(format!(
                "links field {field:?} collides with a book attribute"
            )));
        }
        Ok(field.to_string())
    }
}
