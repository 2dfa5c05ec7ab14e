//! Domain DTOs for the book catalog API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently;
//! integration tests catch any drift between the two crates.
//!
//! `BookResource` carries a hypermedia envelope whose key is configurable,
//! so it is decoded in two steps: the codec produces a `ResourceEnvelope`
//! holding the scalar fields plus every unrecognized key, and the envelope
//! is then resolved against the configured links field. Unknown keys are
//! dropped at that point.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Link relation name → target URL.
pub type Links = BTreeMap<String, String>;

/// Submission payload for creating a book.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Book {
    pub author: String,
    pub title: String,
    pub isbn: String,
}

impl Book {
    pub fn new(author: impl Into<String>, title: impl Into<String>, isbn: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            title: title.into(),
            isbn: isbn.into(),
        }
    }
}

/// A book as returned by the server, with its navigation links.
///
/// Serializes with the links under `_links`; decoding from a server
/// response goes through `BookApi`, which honours the configured key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookResource {
    pub author: String,
    pub title: String,
    pub isbn: String,
    #[serde(rename = "_links", default, deserialize_with = "deserialize_links")]
    pub links: Links,
}

impl BookResource {
    /// Target URL of link relation `rel`.
    pub fn link(&self, rel: &str) -> Option<&str> {
        self.links.get(rel).map(String::as_str)
    }
}

/// A link target as servers emit it: either a bare URL or a HAL link
/// object (`{"href": "..."}`).
#[derive(Deserialize)]
#[serde(untagged)]
enum LinkTarget {
    Url(String),
    Object { href: String },
}

impl LinkTarget {
    fn into_url(self) -> String {
        match self {
            LinkTarget::Url(url) | LinkTarget::Object { href: url } => url,
        }
    }
}

fn deserialize_links<'de, D>(deserializer: D) -> Result<Links, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = BTreeMap::<String, LinkTarget>::deserialize(deserializer)?;
    Ok(raw.into_iter().map(|(rel, target)| (rel, target.into_url())).collect())
}

/// Wire shape of a `BookResource` before the links field is picked out.
#[derive(Deserialize)]
pub(crate) struct ResourceEnvelope {
    author: String,
    title: String,
    isbn: String,
    #[serde(flatten)]
    rest: serde_json::Map<String, serde_json::Value>,
}

impl ResourceEnvelope {
    /// Resolve the envelope, taking links from `links_field` when present.
    pub(crate) fn into_resource(mut self, links_field: &str) -> Result<BookResource, serde_json::Error> {
        let links = match self.rest.remove(links_field) {
            Some(value) => deserialize_links(value)?,
            None => Links::new(),
        };
        Ok(BookResource {
            author: self.author,
            title: self.title,
            isbn: self.isbn,
            links,
        })
    }
}
