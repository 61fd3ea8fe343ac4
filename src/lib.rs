//! Wisp - Minimal HTTP/1.1 Server
//!
//! Core library for request parsing, routing and response framing.

pub mod config;
pub mod http;
pub mod router;
pub mod server;
