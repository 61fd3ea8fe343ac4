//! Handler behaviors bound by the route table.

use std::path::Path;

use crate::http::encoding::{self, CompressionError};
use crate::http::request::Request;
use crate::http::response::{Response, ResponseBuilder, StatusCode};

/// `GET /` — bare 200. When gzip is negotiated the response is flagged
/// with Content-Encoding but still carries no body.
pub fn root(req: &Request) -> Response {
    if encoding::accepts_gzip(req) {
        ResponseBuilder::new(StatusCode::Ok)
            .header("Content-Encoding", "gzip")
            .build()
    } else {
        Response::ok_empty()
    }
}

/// `GET /echo/{value}` — reflects the literal path remainder as the body.
/// The remainder may be empty, in which case the body is empty and
/// Content-Length is 0.
pub fn echo(value: &str, req: &Request) -> Result<Response, CompressionError> {
    text_response(value.as_bytes(), StatusCode::Ok, req)
}

/// `GET /user-agent` — reflects the User-Agent header value. A request
/// without one gets a 404 carrying only the content type.
pub fn user_agent(req: &Request) -> Result<Response, CompressionError> {
    match req.header("User-Agent") {
        Some(ua) => text_response(ua.as_bytes(), StatusCode::Ok, req),
        None => Ok(ResponseBuilder::new(StatusCode::NotFound)
            .header("Content-Type", "text/plain")
            .build()),
    }
}

/// `GET /files/{name}` — fresh read on every request, no caching.
/// Any read error maps to the generic 404.
pub async fn read_file(directory: &Path, name: &str) -> Response {
    let path = directory.join(name);

    match tokio::fs::read(&path).await {
        Ok(contents) => ResponseBuilder::new(StatusCode::Ok)
            .header("Content-Type", "application/octet-stream")
            .body(contents)
            .build(),
        Err(e) => {
            tracing::warn!("Read of {} failed: {}", path.display(), e);
            Response::not_found()
        }
    }
}

/// `POST /files/{name}` — writes the request body verbatim, creating or
/// truncating the file. Any write error maps to the generic 404.
pub async fn write_file(directory: &Path, name: &str, req: &Request) -> Response {
    let path = directory.join(name);

    match tokio::fs::write(&path, &req.body).await {
        Ok(()) => ResponseBuilder::new(StatusCode::Created).build(),
        Err(e) => {
            tracing::warn!("Write of {} failed: {}", path.display(), e);
            Response::not_found()
        }
    }
}

// Content-Length is set explicitly so a reflected empty string still
// advertises its length, unlike the builder's non-empty-only default.
fn text_response(
    body: &[u8],
    status: StatusCode,
    req: &Request,
) -> Result<Response, CompressionError> {
    let builder = ResponseBuilder::new(status).header("Content-Type", "text/plain");

    let response = if encoding::accepts_gzip(req) {
        let compressed = encoding::gzip(body)?;
        builder
            .header("Content-Encoding", "gzip")
            .header("Content-Length", compressed.len().to_string())
            .body(compressed)
            .build()
    } else {
        builder
            .header("Content-Length", body.len().to_string())
            .body(body.to_vec())
            .build()
    };

    Ok(response)
}
