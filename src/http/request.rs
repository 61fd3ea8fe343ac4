use std::collections::HashMap;

/// HTTP request methods.
///
/// The server routes GET and POST. Anything else parses as `Other` and
/// falls through routing to a 404 rather than failing the parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// POST - Create or submit data
    POST,
    /// Any other method token
    Other,
}

impl Method {
    /// Maps a method token to a `Method`. Unknown tokens are `Other`,
    /// never a parse failure.
    pub fn parse(s: &str) -> Self {
        match s {
            "GET" => Method::GET,
            "POST" => Method::POST,
            _ => Method::Other,
        }
    }
}

/// Represents a parsed HTTP request from a client.
///
/// Constructed once per connection from the inbound buffer and immutable
/// thereafter. Duplicate header names are last-wins.
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method (GET, POST, other)
    pub method: Method,
    /// The request path (e.g., "/echo/abc"), always starts with `/`
    pub path: String,
    /// HTTP version token from the request line (typically "HTTP/1.1")
    pub version: String,
    /// Request headers as key-value pairs
    pub headers: HashMap<String, String>,
    /// Request body bytes, possibly empty
    pub body: Vec<u8>,
}

impl Request {
    /// Retrieves a header value by its exact (case-sensitive) name.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(|v| v.as_str())
    }
}
