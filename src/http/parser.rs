use crate::http::request::{Method, Request};
use std::collections::HashMap;

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    MalformedRequest,
}

/// Parses one HTTP request out of a raw inbound buffer.
///
/// The buffer is whatever a single socket read produced; there is no
/// multi-read reassembly. A body shorter than the declared Content-Length
/// is taken as received rather than rejected.
pub fn parse_request(buf: &[u8]) -> Result<Request, ParseError> {
    // Header/body separator must be present in the buffer
    let headers_end = find_headers_end(buf).ok_or(ParseError::MalformedRequest)?;
    let header_bytes = &buf[..headers_end];
    let body_bytes = &buf[headers_end + 4..];

    let headers_str =
        std::str::from_utf8(header_bytes).map_err(|_| ParseError::MalformedRequest)?;

    let mut lines = headers_str.split("\r\n");

    // Request line: exactly method / path / version, single-space separated
    let request_line = lines.next().ok_or(ParseError::MalformedRequest)?;
    let mut parts = request_line.split(' ');

    let method_str = parts.next().ok_or(ParseError::MalformedRequest)?;
    let path = parts.next().ok_or(ParseError::MalformedRequest)?;
    let version = parts.next().ok_or(ParseError::MalformedRequest)?;

    if method_str.is_empty() || version.is_empty() || !path.starts_with('/') {
        return Err(ParseError::MalformedRequest);
    }

    let method = Method::parse(method_str);

    // Headers: split on the first ": "; lines without one are skipped,
    // duplicate names are last-wins
    let mut headers = HashMap::new();

    for line in lines {
        if line.is_empty() {
            continue;
        }

        if let Some((key, value)) = line.split_once(": ") {
            headers.insert(key.to_string(), value.to_string());
        }
    }

    // Body: bounded by Content-Length when present and numeric; a POST
    // without one takes the literal remaining bytes, other methods none
    let declared: Option<usize> = headers
        .get("Content-Length")
        .and_then(|v| v.parse().ok());

    let body = match declared {
        Some(n) => body_bytes[..n.min(body_bytes.len())].to_vec(),
        None if method == Method::POST => body_bytes.to_vec(),
        None => Vec::new(),
    };

    Ok(Request {
        method,
        path: path.to_string(),
        version: version.to_string(),
        headers,
        body,
    })
}

fn find_headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_get() {
        let req = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";

        let parsed = parse_request(req).unwrap();

        assert_eq!(parsed.path, "/");
        assert_eq!(parsed.headers.get("Host").unwrap(), "example.com");
    }
}
