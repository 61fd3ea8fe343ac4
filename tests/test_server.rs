//! Socket-level end-to-end tests: a real listener on an ephemeral port,
//! raw bytes in, raw bytes out. One request per connection, then EOF.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::time::{sleep, timeout};
use wisp::config::Config;
use wisp::server::listener::serve;

static DIR_SEQ: AtomicUsize = AtomicUsize::new(0);

async fn spawn_server() -> (SocketAddr, PathBuf) {
    spawn_server_with_limit(256).await
}

async fn spawn_server_with_limit(max_connections: usize) -> (SocketAddr, PathBuf) {
    let dir = std::env::temp_dir().join(format!(
        "wisp-e2e-test-{}-{}",
        std::process::id(),
        DIR_SEQ.fetch_add(1, Ordering::Relaxed)
    ));
    std::fs::create_dir_all(&dir).unwrap();

    let mut cfg = Config::default();
    cfg.files.directory = dir.clone();
    cfg.server.max_connections = max_connections;

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let _ = serve(listener, cfg).await;
    });

    (addr, dir)
}

async fn exchange(addr: SocketAddr, request: &[u8]) -> Vec<u8> {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.write_all(request).await.unwrap();

    let mut response = Vec::new();
    stream.read_to_end(&mut response).await.unwrap();
    response
}

#[tokio::test]
async fn test_root_returns_exact_bare_200() {
    let (addr, _dir) = spawn_server().await;

    let response = exchange(addr, b"GET / HTTP/1.1\r\nHost: localhost\r\n\r\n").await;

    assert_eq!(response, b"HTTP/1.1 200 OK\r\n\r\n");
}

#[tokio::test]
async fn test_echo_over_the_wire() {
    let (addr, _dir) = spawn_server().await;

    let response = exchange(addr, b"GET /echo/pear HTTP/1.1\r\nHost: localhost\r\n\r\n").await;
    let text = String::from_utf8(response).unwrap();

    assert!(text.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(text.contains("Content-Type: text/plain\r\n"));
    assert!(text.contains("Content-Length: 4\r\n"));
    assert!(text.ends_with("\r\n\r\npear"));
}

#[tokio::test]
async fn test_unknown_path_returns_404() {
    let (addr, _dir) = spawn_server().await;

    let response = exchange(addr, b"GET /unknown/path HTTP/1.1\r\nHost: localhost\r\n\r\n").await;

    assert_eq!(response, b"HTTP/1.1 404 Not Found\r\n\r\n");
}

#[tokio::test]
async fn test_malformed_request_line_returns_400() {
    let (addr, _dir) = spawn_server().await;

    let response = exchange(addr, b"BOGUS\r\n\r\n").await;

    assert_eq!(response, b"HTTP/1.1 400 Bad Request\r\n\r\n");
}

#[tokio::test]
async fn test_user_agent_over_the_wire() {
    let (addr, _dir) = spawn_server().await;

    let response = exchange(
        addr,
        b"GET /user-agent HTTP/1.1\r\nUser-Agent: foo/1.0\r\n\r\n",
    )
    .await;
    let text = String::from_utf8(response).unwrap();

    assert!(text.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(text.contains("Content-Length: 7\r\n"));
    assert!(text.ends_with("\r\n\r\nfoo/1.0"));
}

#[tokio::test]
async fn test_files_round_trip_over_the_wire() {
    let (addr, _dir) = spawn_server().await;

    let post = exchange(
        addr,
        b"POST /files/test.txt HTTP/1.1\r\nContent-Length: 5\r\n\r\nhello",
    )
    .await;
    assert_eq!(post, b"HTTP/1.1 201 Created\r\n\r\n");

    let get = exchange(addr, b"GET /files/test.txt HTTP/1.1\r\nHost: localhost\r\n\r\n").await;
    let text = String::from_utf8(get).unwrap();

    assert!(text.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(text.contains("Content-Type: application/octet-stream\r\n"));
    assert!(text.ends_with("\r\n\r\nhello"));
}

#[tokio::test]
async fn test_eof_before_request_closes_without_response() {
    let (addr, _dir) = spawn_server().await;

    let mut stream = TcpStream::connect(addr).await.unwrap();
    // FIN without sending anything: the worker sees a zero-length read
    stream.shutdown().await.unwrap();

    let mut response = Vec::new();
    stream.read_to_end(&mut response).await.unwrap();

    assert!(response.is_empty());
}

#[tokio::test]
async fn test_connection_limit_defers_excess_clients() {
    let (addr, _dir) = spawn_server_with_limit(1).await;

    // First client takes the only slot and sends nothing
    let held = TcpStream::connect(addr).await.unwrap();
    sleep(Duration::from_millis(50)).await;

    // Second client is not accepted while the slot is held
    let mut waiting = TcpStream::connect(addr).await.unwrap();
    waiting
        .write_all(b"GET / HTTP/1.1\r\nHost: localhost\r\n\r\n")
        .await
        .unwrap();

    let mut buf = [0u8; 32];
    let early = timeout(Duration::from_millis(200), waiting.read(&mut buf)).await;
    assert!(early.is_err());

    // Releasing the held connection frees the slot and the second
    // client gets served
    drop(held);

    let mut response = Vec::new();
    waiting.read_to_end(&mut response).await.unwrap();
    assert_eq!(response, b"HTTP/1.1 200 OK\r\n\r\n");
}

#[tokio::test]
async fn test_repeated_get_is_byte_identical() {
    let (addr, _dir) = spawn_server().await;

    let first = exchange(addr, b"GET /echo/stable HTTP/1.1\r\nHost: localhost\r\n\r\n").await;
    let second = exchange(addr, b"GET /echo/stable HTTP/1.1\r\nHost: localhost\r\n\r\n").await;

    assert_eq!(first, second);
}
