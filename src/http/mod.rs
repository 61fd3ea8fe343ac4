//! HTTP protocol implementation.
//!
//! This module implements a minimal HTTP/1.1 server core: one request per
//! connection, hand-rolled parsing, optional gzip response encoding.
//!
//! # Architecture
//!
//! - **`connection`**: The per-connection handler implementing the
//!   request-response state machine
//! - **`parser`**: Parses an incoming HTTP request from a raw byte buffer
//! - **`request`**: HTTP request representation and header accessors
//! - **`response`**: HTTP response representation with builder pattern
//! - **`encoding`**: Accept-Encoding negotiation and the gzip compressor
//! - **`writer`**: Serializes and writes HTTP responses to the client
//!
//! # Connection State Machine
//!
//! Each client connection goes through a state machine:
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Wait for the request bytes
//!        └──────┬──────┘
//!               │ Request parsed (malformed → Writing a 400)
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Route and generate the response
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response to client
//!        └──────┬───────────┘
//!               │ Response sent
//!               └─ Close → Closed
//! ```
//!
//! There is no keep-alive: exactly one request is served, then the socket
//! is closed.

pub mod connection;
pub mod encoding;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
