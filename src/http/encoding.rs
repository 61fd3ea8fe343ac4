//! Accept-Encoding negotiation and the gzip compressor.

use std::io::Write;

use flate2::Compression;
use flate2::write::GzEncoder;

use crate::http::request::Request;

#[derive(Debug)]
pub enum CompressionError {
    Failed(std::io::Error),
}

impl std::fmt::Display for CompressionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompressionError::Failed(e) => write!(f, "gzip compression failed: {}", e),
        }
    }
}

impl std::error::Error for CompressionError {}

/// Decides whether the response may use gzip.
///
/// Splits the Accept-Encoding value on commas, trims each token, and
/// returns true iff any token equals `gzip` exactly (case-sensitive).
/// An absent header means no compression.
///
/// The decision is advisory: the root, echo and user-agent handlers honor
/// it, file responses are always sent uncompressed.
pub fn accepts_gzip(req: &Request) -> bool {
    req.header("Accept-Encoding")
        .map(|v| v.split(',').any(|token| token.trim() == "gzip"))
        .unwrap_or(false)
}

/// Compresses `data` with gzip framing at best-compression level.
pub fn gzip(data: &[u8]) -> Result<Vec<u8>, CompressionError> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::best());
    encoder
        .write_all(data)
        .map_err(CompressionError::Failed)?;
    encoder.finish().map_err(CompressionError::Failed)
}
