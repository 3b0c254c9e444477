//! HTTP front end for the lookup service.
//!
//! ```text
//! GET /registry/{name}[.json]   -> lookup(name)
//! GET /r/{name}.json            -> lookup(name)
//! GET /registry/registry[.json] -> aggregate index
//! ```
//!
//! `tiny_http` accepts connections on a dedicated thread and forwards each
//! request over a channel into the tokio runtime, where every request is
//! handled in its own task. Handlers share nothing but the immutable
//! [`RegistryLookup`].

use std::sync::Arc;
use std::thread;

use tiny_http::{Header, Method, Request, Response, Server};
use tokio::sync::{Notify, mpsc};

use crate::error::{LookupError, ServerError};
use crate::registry::lookup::RegistryLookup;

/// Requests queued between the accept thread and the runtime.
const REQUEST_QUEUE_DEPTH: usize = 64;

/// Status and JSON body for one response.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpReply {
    pub status: u16,
    pub body: serde_json::Value,
}

impl HttpReply {
    fn ok(body: serde_json::Value) -> Self {
        Self { status: 200, body }
    }

    fn error(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            body: serde_json::json!({ "error": message.into() }),
        }
    }

    fn from_lookup_error(err: &LookupError) -> Self {
        Self {
            status: err.status_code(),
            body: err.to_body(),
        }
    }
}

/// Where a request path points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/registry/{name}` or `/r/{name}`.
    Lookup(String),
    NotFound,
    BadRequest,
}

/// Map a raw request URL (path plus optional query) to a route.
pub fn route(raw_url: &str) -> Route {
    let Ok(parsed) = url::Url::parse(&format!("http://localhost{raw_url}")) else {
        return Route::BadRequest;
    };
    let Some(segments) = parsed.path_segments() else {
        return Route::NotFound;
    };

    let segments: Vec<&str> = segments.collect();
    match segments.as_slice() {
        ["registry" | "r", name] if !name.is_empty() => match urlencoding::decode(name) {
            Ok(decoded) => Route::Lookup(decoded.into_owned()),
            Err(_) => Route::BadRequest,
        },
        _ => Route::NotFound,
    }
}

/// Compute the reply for one request.
pub async fn handle(lookup: &RegistryLookup, method: &Method, raw_url: &str) -> HttpReply {
    if !matches!(method, Method::Get | Method::Head) {
        return HttpReply::error(405, format!("Method {method} not allowed"));
    }

    match route(raw_url) {
        Route::Lookup(name) => match lookup.lookup(&name).await {
            Ok(value) => HttpReply::ok(value),
            Err(e) => {
                tracing::debug!(name = %name, "Lookup miss: {}", e);
                HttpReply::from_lookup_error(&e)
            }
        },
        Route::NotFound => HttpReply::error(404, format!("No route for {raw_url}")),
        Route::BadRequest => HttpReply::error(400, "Bad Request"),
    }
}

/// Handle for stopping a running server.
#[derive(Clone, Debug)]
pub struct ShutdownHandle {
    notify: Arc<Notify>,
}

impl ShutdownHandle {
    pub fn shutdown(&self) {
        self.notify.notify_one();
    }
}

/// A bound, not yet running, lookup server.
pub struct RegistryServer {
    server: Arc<Server>,
    port: u16,
    shutdown: ShutdownHandle,
}

impl RegistryServer {
    /// Bind to `addr` (`host:port`; port 0 picks a free port).
    pub fn bind(addr: &str) -> Result<Self, ServerError> {
        let server = Server::http(addr).map_err(|e| ServerError::Bind {
            addr: addr.to_string(),
            reason: e.to_string(),
        })?;
        let port = server
            .server_addr()
            .to_ip()
            .map(|a| a.port())
            .ok_or_else(|| ServerError::Bind {
                addr: addr.to_string(),
                reason: "unable to determine bound port".to_string(),
            })?;

        Ok(Self {
            server: Arc::new(server),
            port,
            shutdown: ShutdownHandle {
                notify: Arc::new(Notify::new()),
            },
        })
    }

    /// Port the listener is bound to.
    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn shutdown_handle(&self) -> ShutdownHandle {
        self.shutdown.clone()
    }

    /// Serve requests until the shutdown handle fires.
    pub async fn run(self, lookup: Arc<RegistryLookup>) -> Result<(), ServerError> {
        let (tx, mut rx) = mpsc::channel::<Request>(REQUEST_QUEUE_DEPTH);

        let accept_server = Arc::clone(&self.server);
        let accept = thread::Builder::new()
            .name("registry-accept".to_string())
            .spawn(move || {
                while let Ok(request) = accept_server.recv() {
                    if tx.blocking_send(request).is_err() {
                        break;
                    }
                }
            })
            .map_err(|e| ServerError::Task(e.to_string()))?;

        tracing::info!(port = self.port, "Registry server listening");

        loop {
            tokio::select! {
                _ = self.shutdown.notify.notified() => break,
                maybe_req = rx.recv() => {
                    let Some(req) = maybe_req else { break };
                    let lookup = Arc::clone(&lookup);
                    let method = req.method().clone();
                    let url = req.url().to_string();
                    tokio::spawn(async move {
                        let reply = handle(&lookup, &method, &url).await;
                        tracing::info!(
                            method = %method,
                            url = %url,
                            status = reply.status,
                            "Request served"
                        );
                        if let Err(e) = tokio::task::spawn_blocking(move || respond(req, reply)).await {
                            tracing::warn!(url = %url, "Response task failed: {}", e);
                        }
                    });
                }
            }
        }

        self.server.unblock();
        drop(rx);
        accept
            .join()
            .map_err(|_| ServerError::Task("accept thread panicked".to_string()))?;

        tracing::info!("Registry server stopped");
        Ok(())
    }
}

fn respond(req: Request, reply: HttpReply) {
    let mut response = Response::from_string(reply.body.to_string()).with_status_code(reply.status);
    if let Ok(header) = Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]) {
        response = response.with_header(header);
    }
    if let Err(e) = req.respond(response) {
        tracing::debug!("Failed to write response: {}", e);
    }
}
