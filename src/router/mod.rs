//! Route table and dispatch.
//!
//! Routes pair an HTTP method with a path matcher (exact or prefix) and a
//! handler. The table is built once at startup, matched top-to-bottom,
//! first match wins. Paths are compared literally: no percent-decoding,
//! no trailing-slash collapsing.

pub mod handlers;

use std::path::PathBuf;

use crate::http::request::{Method, Request};
use crate::http::response::Response;

#[derive(Debug, Clone, Copy)]
enum Pattern {
    Exact(&'static str),
    Prefix(&'static str),
}

#[derive(Debug, Clone, Copy)]
enum HandlerKind {
    Root,
    Echo,
    UserAgent,
    ReadFile,
    WriteFile,
}

struct Route {
    method: Method,
    pattern: Pattern,
    /// Prefix routes with this set only match when something follows the
    /// prefix; `/files/` alone is a routing miss.
    capture_required: bool,
    handler: HandlerKind,
}

impl Route {
    fn capture<'p>(&self, method: Method, path: &'p str) -> Option<&'p str> {
        if method != self.method {
            return None;
        }

        match self.pattern {
            Pattern::Exact(p) => (path == p).then_some(""),
            Pattern::Prefix(p) => match path.strip_prefix(p) {
                Some(rest) if !self.capture_required || !rest.is_empty() => Some(rest),
                _ => None,
            },
        }
    }
}

pub struct Router {
    routes: Vec<Route>,
    directory: PathBuf,
}

impl Router {
    pub fn new(directory: PathBuf) -> Self {
        let routes = vec![
            Route {
                method: Method::GET,
                pattern: Pattern::Exact("/"),
                capture_required: false,
                handler: HandlerKind::Root,
            },
            Route {
                method: Method::GET,
                pattern: Pattern::Prefix("/echo/"),
                capture_required: false,
                handler: HandlerKind::Echo,
            },
            Route {
                method: Method::GET,
                pattern: Pattern::Exact("/user-agent"),
                capture_required: false,
                handler: HandlerKind::UserAgent,
            },
            Route {
                method: Method::GET,
                pattern: Pattern::Prefix("/files/"),
                capture_required: true,
                handler: HandlerKind::ReadFile,
            },
            Route {
                method: Method::POST,
                pattern: Pattern::Prefix("/files/"),
                capture_required: true,
                handler: HandlerKind::WriteFile,
            },
        ];

        Self { routes, directory }
    }

    /// Selects the handler for a request and runs it. A miss yields the
    /// generic 404; only compression failures propagate as errors.
    pub async fn dispatch(&self, req: &Request) -> anyhow::Result<Response> {
        for route in &self.routes {
            if let Some(capture) = route.capture(req.method, &req.path) {
                return self.invoke(route.handler, capture, req).await;
            }
        }

        Ok(Response::not_found())
    }

    async fn invoke(
        &self,
        handler: HandlerKind,
        capture: &str,
        req: &Request,
    ) -> anyhow::Result<Response> {
        match handler {
            HandlerKind::Root => Ok(handlers::root(req)),
            HandlerKind::Echo => Ok(handlers::echo(capture, req)?),
            HandlerKind::UserAgent => Ok(handlers::user_agent(req)?),
            HandlerKind::ReadFile => Ok(handlers::read_file(&self.directory, capture).await),
            HandlerKind::WriteFile => {
                Ok(handlers::write_file(&self.directory, capture, req).await)
            }
        }
    }
}
