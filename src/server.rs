//! HTTP server and graceful shutdown.
//!
//! The mux itself never touches a socket. This module is the transport layer
//! that does: it accepts connections with hyper, buffers each request body,
//! runs the synchronous dispatch on tokio's blocking pool, and answers
//! `404 Not Found` when no handler wrote anything.
//!
//! # Graceful shutdown
//!
//! On **SIGTERM** or **SIGINT** the server:
//! 1. Immediately stops `listener.accept()`, so no new connections are made.
//! 2. Lets every in-flight connection task run to completion.
//! 3. Returns from [`Server::serve`], which lets `main` exit cleanly.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

use bytes::Bytes;
use http::StatusCode;
use http_body_util::{BodyExt, Full};
use hyper::body::Incoming;
use hyper::service::service_fn;
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto::Builder as ConnBuilder;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

use crate::error::Error;
use crate::mux::Mux;
use crate::response::Recorder;

/// The HTTP server.
pub struct Server {
    addr: SocketAddr,
}

impl Server {
    /// Configures the server to bind to `addr` when [`serve`](Server::serve)
    /// is called.
    ///
    /// ```rust,no_run
    /// use baton::Server;
    /// let server = Server::bind(([0, 0, 0, 0], 3000).into());
    /// ```
    pub fn bind(addr: SocketAddr) -> Self {
        Self { addr }
    }

    /// Starts accepting connections and dispatching them through `mux`.
    ///
    /// Returns only after a full graceful shutdown.
    pub async fn serve(self, mux: Mux) -> Result<(), Error> {
        let listener = TcpListener::bind(self.addr).await?;
        let mux = Arc::new(mux);

        info!(addr = %self.addr, routes = mux.len(), "baton listening");

        let mut tasks = tokio::task::JoinSet::new();

        let shutdown = shutdown_signal();
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                // Check shutdown first so a SIGTERM stops accepting even if
                // more connections are queued.
                biased;

                () = &mut shutdown => {
                    info!(in_flight = tasks.len(), "shutdown signal received, draining connections");
                    break;
                }

                res = listener.accept() => {
                    let (stream, remote_addr) = match res {
                        Ok(v) => v,
                        Err(e) => {
                            error!("accept error: {e}");
                            continue;
                        }
                    };

                    let mux = Arc::clone(&mux);
                    let io = TokioIo::new(stream);

                    tasks.spawn(async move {
                        let svc = service_fn(move |req| dispatch(Arc::clone(&mux), req));

                        if let Err(e) = ConnBuilder::new(TokioExecutor::new())
                            .serve_connection(io, svc)
                            .await
                        {
                            error!(peer = %remote_addr, "connection error: {e}");
                        }
                    });
                }

                // Reap finished connection tasks so the JoinSet does not grow
                // without bound on long-running servers.
                Some(_) = tasks.join_next(), if !tasks.is_empty() => {}
            }
        }

        while tasks.join_next().await.is_some() {}

        info!("baton stopped");
        Ok(())
    }
}

// ── Request dispatch ──────────────────────────────────────────────────────────

async fn dispatch(
    mux: Arc<Mux>,
    req: hyper::Request<Incoming>,
) -> Result<http::Response<Full<Bytes>>, Infallible> {
    let (parts, body) = req.into_parts();
    let body = match body.collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) => {
            warn!("failed to read request body: {e}");
            return Ok(status_only(StatusCode::BAD_REQUEST));
        }
    };

    Ok(respond(mux, http::Request::from_parts(parts, body)).await)
}

/// Runs one buffered request through `mux`.
///
/// Handlers are synchronous and may block for as long as their chain runs,
/// so dispatch happens on the blocking pool rather than a runtime worker.
pub(crate) async fn respond(mux: Arc<Mux>, req: http::Request<Bytes>) -> http::Response<Full<Bytes>> {
    let outcome = tokio::task::spawn_blocking(move || {
        let mut recorder = Recorder::new();
        mux.serve(&mut recorder, &req);
        recorder
    })
    .await;

    match outcome {
        Ok(recorder) if recorder.is_untouched() => status_only(StatusCode::NOT_FOUND),
        Ok(recorder) => recorder.into_response(),
        Err(e) => {
            error!("handler panicked: {e}");
            status_only(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

fn status_only(status: StatusCode) -> http::Response<Full<Bytes>> {
    let mut response = http::Response::new(Full::new(Bytes::new()));
    *response.status_mut() = status;
    response
}

// ── Shutdown signal ───────────────────────────────────────────────────────────

/// Resolves on the first SIGTERM or Ctrl-C. A signal that cannot be
/// installed is logged and never fires.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("failed to install Ctrl-C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let sigterm = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let sigterm = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c   => {}
        () = sigterm  => {}
    }
}
