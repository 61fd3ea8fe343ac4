use std::collections::HashMap;
use std::io::Read;

use flate2::read::GzDecoder;
use wisp::http::encoding::{accepts_gzip, gzip};
use wisp::http::request::{Method, Request};

fn request_with_accept_encoding(value: Option<&str>) -> Request {
    let mut headers = HashMap::new();
    if let Some(v) = value {
        headers.insert("Accept-Encoding".to_string(), v.to_string());
    }

    Request {
        method: Method::GET,
        path: "/".to_string(),
        version: "HTTP/1.1".to_string(),
        headers,
        body: vec![],
    }
}

#[test]
fn test_accepts_gzip_exact_token() {
    let req = request_with_accept_encoding(Some("gzip"));
    assert!(accepts_gzip(&req));
}

#[test]
fn test_accepts_gzip_among_other_tokens() {
    let req = request_with_accept_encoding(Some("deflate, gzip, br"));
    assert!(accepts_gzip(&req));
}

#[test]
fn test_accepts_gzip_trims_token_whitespace() {
    let req = request_with_accept_encoding(Some("deflate,  gzip "));
    assert!(accepts_gzip(&req));
}

#[test]
fn test_accepts_gzip_rejects_other_encodings() {
    let req = request_with_accept_encoding(Some("deflate, br"));
    assert!(!accepts_gzip(&req));
}

#[test]
fn test_accepts_gzip_is_case_sensitive() {
    let req = request_with_accept_encoding(Some("GZIP"));
    assert!(!accepts_gzip(&req));
}

#[test]
fn test_accepts_gzip_rejects_partial_token() {
    let req = request_with_accept_encoding(Some("gzip2, x-gzip"));
    assert!(!accepts_gzip(&req));
}

#[test]
fn test_accepts_gzip_absent_header() {
    let req = request_with_accept_encoding(None);
    assert!(!accepts_gzip(&req));
}

#[test]
fn test_gzip_output_decodes_back_to_input() {
    let input = b"the quick brown fox jumps over the lazy dog";
    let compressed = gzip(input).unwrap();

    let mut decoder = GzDecoder::new(compressed.as_slice());
    let mut decoded = Vec::new();
    decoder.read_to_end(&mut decoded).unwrap();

    assert_eq!(decoded, input.to_vec());
}

#[test]
fn test_gzip_carries_gzip_magic_bytes() {
    let compressed = gzip(b"abc").unwrap();

    assert!(compressed.len() >= 2);
    assert_eq!(&compressed[..2], &[0x1f, 0x8b]);
}

#[test]
fn test_gzip_empty_input() {
    let compressed = gzip(b"").unwrap();

    let mut decoder = GzDecoder::new(compressed.as_slice());
    let mut decoded = Vec::new();
    decoder.read_to_end(&mut decoded).unwrap();

    assert!(decoded.is_empty());
}
