//! # baton
//!
//! An HTTP request router where handlers pass control along explicitly.
//!
//! ## The contract
//!
//! A [`Mux`] holds routes in registration order. Each route is a method, a
//! pattern and a chain of one or more handlers. For every request baton
//! walks that list once:
//!
//! - The first route whose method and pattern match runs its first handler.
//! - A handler calls [`Request::next`] to run the next handler in its chain,
//!   or, when its chain is used up, the next route that matches.
//! - A handler that does not call `next` ends dispatch for that request.
//! - If nothing matches, nothing runs and nothing is written. Answering `404`
//!   is the transport's decision, not the router's.
//!
//! `next` is a plain function call. The handler that made it resumes once
//! everything downstream has returned, which is all middleware needs:
//!
//! ```rust
//! use baton::{Mux, Request, ResponseWriter, handler_fn};
//!
//! fn require_token(w: &mut dyn ResponseWriter, req: &mut Request<'_>) {
//!     if req.header("x-token") == Some("secret") {
//!         req.next(w);
//!     } else {
//!         w.set_status(http::StatusCode::UNAUTHORIZED);
//!     }
//! }
//!
//! fn get_user(w: &mut dyn ResponseWriter, req: &mut Request<'_>) {
//!     let id = req.param("id").unwrap_or("unknown");
//!     let _ = w.json(format!(r#"{{"id":"{id}"}}"#).as_bytes());
//! }
//!
//! let mux = Mux::new()
//!     .chain("GET", "/users/:id", (require_token, get_user))
//!     .get("/files/*path", handler_fn(|w, req| {
//!         let _ = w.text(req.param("path").unwrap_or("index"));
//!     }));
//! ```
//!
//! ## Patterns
//!
//! `/`-delimited segments: literals match exactly, `:name` captures one
//! non-empty segment, and a trailing `*name` captures the rest of the path.
//! Patterns are validated when they are registered; a `Mux` that was built
//! never fails at request time.
//!
//! ## Serving
//!
//! [`Mux::serve`] takes any [`ResponseWriter`] and an `http::Request<Bytes>`.
//! [`Server`] is a ready-made hyper transport around it:
//!
//! ```rust,no_run
//! use baton::{Mux, Server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mux = Mux::new();
//!     Server::bind(([0, 0, 0, 0], 3000).into()).serve(mux).await.unwrap();
//! }
//! ```

mod config;
mod error;
mod handler;
mod matcher;
mod method;
mod mux;
mod params;
mod pattern;
mod queue;
mod request;
mod response;
mod server;

pub mod middleware;

pub use config::{Config, MethodCase};
pub use error::Error;
pub use handler::{BoxedHandler, Handler, IntoHandlers, Unchained, handler_fn, unchained};
pub use matcher::check;
pub use method::MethodFilter;
pub use mux::Mux;
pub use params::Params;
pub use pattern::{Pattern, Segment};
pub use request::Request;
pub use response::{ContentType, Recorder, ResponseWriter};
pub use server::Server;
