//! Full catalog lifecycle against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then exercises every client
//! operation over real HTTP through `UreqTransport`. Validates that request
//! building, the transport, and response parsing agree with the actual
//! server.

#![cfg(feature = "ureq")]

use std::io;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use book_core::{ApiError, Book, BookClient, UreqTransport};

/// In-memory sink for formatted log lines.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with every tracing event on this thread written to a string.
fn capture_logs<R>(f: impl FnOnce() -> R) -> (R, String) {
    let out = Captured::default();
    let writer = out.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let result = tracing::subscriber::with_default(subscriber, f);
    let logs = String::from_utf8(out.0.lock().unwrap().clone()).unwrap();
    (result, logs)
}

fn start_server() -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

#[test]
fn catalog_lifecycle() {
    // Step 1: start mock server on a random port.
    let addr = start_server();
    let client = BookClient::new(&format!("http://{addr}/books/"), UreqTransport::new()).unwrap();

    // Step 2: list — should be empty.
    let books = client.find_all().unwrap();
    assert!(books.is_empty(), "expected empty list");

    // Step 3: lookup before create — NotFound.
    let err = client.find_by_isbn("978-0134685991").unwrap_err();
    assert!(matches!(err, ApiError::NotFound));

    // Step 4: create two books.
    let bloch = Book::new("Bloch", "Effective Java", "978-0134685991");
    let knuth = Book::new("Knuth", "TAOCP", "0-201-89683-4");
    client.create(&bloch).unwrap();
    client.create(&knuth).unwrap();

    // Step 5: fetch one back, links included.
    let fetched = client.find_by_isbn("978-0134685991").unwrap();
    assert_eq!(fetched.author, "Bloch");
    assert_eq!(fetched.title, "Effective Java");
    assert_eq!(fetched.isbn, "978-0134685991");
    assert_eq!(fetched.link("self"), Some("/books/978-0134685991"));

    // Step 6: list preserves server order.
    let isbns: Vec<String> = client.find_all().unwrap().into_iter().map(|b| b.isbn).collect();
    assert_eq!(isbns, ["978-0134685991", "0-201-89683-4"]);

    // Step 7: duplicate create surfaces the server's status.
    let err = client.create(&knuth).unwrap_err();
    assert!(matches!(err, ApiError::Http { status: 409, .. }), "{err:?}");

    // Step 8: an isbn that needs escaping survives the round trip.
    let odd = Book::new("Anon", "Odd", "has space/and?more");
    client.create(&odd).unwrap();
    let fetched = client.find_by_isbn("has space/and?more").unwrap();
    assert_eq!(fetched.title, "Odd");

    // Step 9: blank isbn is rejected locally.
    let err = client.find_by_isbn("  ").unwrap_err();
    assert!(matches!(err, ApiError::InvalidArgument(_)));
}

#[test]
fn unreachable_server_is_a_transport_error() {
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let client = BookClient::new(&format!("http://{addr}/books"), UreqTransport::new()).unwrap();

    let err = client.find_all().unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)), "{err:?}");
}

#[test]
fn oversized_body_is_a_transport_error() {
    let addr = start_server();
    let base = format!("http://{addr}/books");
    let client = BookClient::new(&base, UreqTransport::new()).unwrap();
    client.create(&Book::new("Knuth", "TAOCP", "0-201-89683-4")).unwrap();

    let capped = BookClient::new(&base, UreqTransport::new().with_body_limit(16)).unwrap();
    let err = capped.find_all().unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)), "{err:?}");

    assert_eq!(client.find_all().unwrap().len(), 1);
}

#[test]
fn transport_logs_each_exchange() {
    let addr = start_server();
    let client = BookClient::new(&format!("http://{addr}/books"), UreqTransport::new()).unwrap();

    let (result, logs) = capture_logs(|| client.find_all());
    assert!(result.unwrap().is_empty());
    assert!(logs.contains("sending request"), "{logs}");
    assert!(logs.contains("received response"), "{logs}");
    assert!(logs.contains("status=200"), "{logs}");
}
