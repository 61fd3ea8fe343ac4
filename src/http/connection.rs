use std::sync::Arc;

use bytes::BytesMut;
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;

use crate::http::parser::parse_request;
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;
use crate::router::Router;

/// Upper bound on the single inbound read.
const MAX_REQUEST_BYTES: usize = 4096;

pub struct Connection {
    stream: TcpStream,
    router: Arc<Router>,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(ResponseWriter),
    Closed,
}

impl Connection {
    pub fn new(stream: TcpStream, router: Arc<Router>) -> Self {
        Self {
            stream,
            router,
            state: ConnectionState::Reading,
        }
    }

    /// Drives the connection through its state machine: read one request,
    /// route it, write one response, close.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    self.state = match self.read_request().await? {
                        ReadOutcome::Request(req) => ConnectionState::Processing(req),
                        ReadOutcome::Malformed => {
                            tracing::warn!("Malformed request line, answering 400");
                            ConnectionState::Writing(ResponseWriter::new(
                                &Response::bad_request(),
                            ))
                        }
                        ReadOutcome::Eof => ConnectionState::Closed,
                    };
                }

                ConnectionState::Processing(req) => {
                    let response = self.router.dispatch(req).await?;
                    self.state = ConnectionState::Writing(ResponseWriter::new(&response));
                }

                ConnectionState::Writing(writer) => {
                    writer.write_to_stream(&mut self.stream).await?;
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Performs the single blocking receive. A zero-length read means the
    /// client went away before sending anything. Whatever arrived in that
    /// one read is the whole request; there is no reassembly.
    async fn read_request(&mut self) -> anyhow::Result<ReadOutcome> {
        let mut buf = BytesMut::with_capacity(MAX_REQUEST_BYTES);

        let n = self.stream.read_buf(&mut buf).await?;
        if n == 0 {
            return Ok(ReadOutcome::Eof);
        }

        match parse_request(&buf) {
            Ok(req) => Ok(ReadOutcome::Request(req)),
            Err(_) => Ok(ReadOutcome::Malformed),
        }
    }
}

enum ReadOutcome {
    Request(Request),
    Malformed,
    Eof,
}
