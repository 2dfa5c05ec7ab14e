use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Book {
    pub author: String,
    pub title: String,
    pub isbn: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Links {
    #[serde(rename = "self")]
    pub self_link: Link,
}

/// A stored book as served, HAL style.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BookResource {
    pub author: String,
    pub title: String,
    pub isbn: String,
    #[serde(rename = "_links")]
    pub links: Links,
}

impl From<Book> for BookResource {
    fn from(book: Book) -> Self {
        let href = format!("/books/{}", utf8_percent_encode(&book.isbn, SEGMENT));
        Self {
            author: book.author,
            title: book.title,
            isbn: book.isbn,
            links: Links {
                self_link: Link { href },
            },
        }
    }
}

/// Books in insertion order.
pub type Db = Arc<RwLock<Vec<Book>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Vec::new()));
    Router::new()
        .route("/books", get(list_books).post(create_book))
        .route("/books/{isbn}", get(get_book))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_books(State(db): State<Db>) -> Json<Vec<BookResource>> {
    let books = db.read().await;
    Json(books.iter().cloned().map(BookResource::from).collect())
}

async fn create_book(
    State(db): State<Db>,
    Json(input): Json<Book>,
) -> Result<(StatusCode, Json<BookResource>), StatusCode> {
    let mut books = db.write().await;
    if books.iter().any(|b| b.isbn == input.isbn) {
        tracing::debug!(isbn = %input.isbn, "duplicate isbn rejected");
        return Err(StatusCode::CONFLICT);
    }
    books.push(input.clone());
    Ok((StatusCode::CREATED, Json(input.into())))
}

async fn get_book(
    State(db): State<Db>,
    Path(isbn): Path<String>,
) -> Result<Json<BookResource>, StatusCode> {
    let books = db.read().await;
    books
        .iter()
        .find(|b| b.isbn == isbn)
        .cloned()
        .map(|b| Json(b.into()))
        .ok_or(StatusCode::NOT_FOUND)
}
