//! Ordered route registry and the dispatch entry point.
//!
//! Routes are tried in the order they were registered and the first one that
//! matches wins. There is no specificity ranking: register `/users/me` before
//! `/users/:id` if you want it to take precedence.
//!
//! Registration takes `&mut self`; serving takes `&self`. Once a [`Mux`] is
//! shared (an `Arc`, or moved into a [`Server`](crate::Server)) the route table
//! can no longer change, so concurrent requests read it without locking.

use std::fmt;

use bytes::Bytes;
use tracing::debug;

use crate::config::Config;
use crate::error::Error;
use crate::handler::{BoxedHandler, Handler, IntoHandlers};
use crate::pattern::Pattern;
use crate::queue::Queue;
use crate::request::{Continuation, Request};
use crate::response::ResponseWriter;

/// One registered (method, pattern, handler chain) triple.
pub(crate) struct Route {
    pub(crate) pattern: Pattern,
    /// Never empty.
    pub(crate) handlers: Vec<BoxedHandler>,
}

/// The request multiplexer.
///
/// ```rust
/// use baton::{Mux, Request, ResponseWriter, handler_fn};
///
/// fn auth(w: &mut dyn ResponseWriter, req: &mut Request<'_>) {
///     if req.header("authorization").is_some() {
///         req.next(w);
///     }
/// }
///
/// fn show_user(w: &mut dyn ResponseWriter, req: &mut Request<'_>) {
///     let id = req.param("id").unwrap_or("unknown");
///     let _ = w.text(&format!("user {id}"));
/// }
///
/// let mux = Mux::new()
///     .chain("GET", "/users/:id", (auth, show_user))
///     .any("/*path", handler_fn(|w, _req| {
///         let _ = w.text("fallback");
///     }));
/// ```
#[derive(Default)]
pub struct Mux {
    routes: Vec<Route>,
    config: Config,
}

impl Mux {
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty mux that compiles patterns under `config`.
    pub fn with_config(config: Config) -> Self {
        Self { routes: Vec::new(), config }
    }

    /// Registers a handler chain for `method` and `pattern`.
    ///
    /// `method` is compared against the request method as configured; the
    /// configured any-method token (`*` by default) accepts every method.
    /// Fails if the pattern does not compile or `handlers` is empty.
    pub fn add(
        &mut self,
        method: &str,
        pattern: &str,
        handlers: impl IntoHandlers,
    ) -> Result<&mut Self, Error> {
        let handlers = handlers.into_handlers();
        if handlers.is_empty() {
            return Err(Error::NoHandlers {
                method: method.to_owned(),
                pattern: pattern.to_owned(),
            });
        }

        let pattern = Pattern::compile(method, pattern, &self.config)?;
        debug!(route = %pattern, handlers = handlers.len(), "route registered");
        self.routes.push(Route { pattern, handlers });
        Ok(self)
    }

    /// Registers a handler chain. Returns `self` for chaining.
    ///
    /// # Panics
    ///
    /// Panics if [`add`](Mux::add) would fail. Routes are set up once at
    /// startup, where a bad pattern is a programming error.
    pub fn chain(mut self, method: &str, pattern: &str, handlers: impl IntoHandlers) -> Self {
        if let Err(e) = self.add(method, pattern, handlers) {
            panic!("invalid route {method} `{pattern}`: {e}");
        }
        self
    }

    /// Registers a single handler. Returns `self` for chaining.
    ///
    /// # Panics
    ///
    /// Panics if the pattern does not compile.
    pub fn on(self, method: &str, pattern: &str, handler: impl Handler) -> Self {
        self.chain(method, pattern, (handler,))
    }

    pub fn get(self, pattern: &str, handler: impl Handler) -> Self {
        self.on("GET", pattern, handler)
    }

    pub fn post(self, pattern: &str, handler: impl Handler) -> Self {
        self.on("POST", pattern, handler)
    }

    pub fn put(self, pattern: &str, handler: impl Handler) -> Self {
        self.on("PUT", pattern, handler)
    }

    pub fn delete(self, pattern: &str, handler: impl Handler) -> Self {
        self.on("DELETE", pattern, handler)
    }

    pub fn patch(self, pattern: &str, handler: impl Handler) -> Self {
        self.on("PATCH", pattern, handler)
    }

    pub fn head(self, pattern: &str, handler: impl Handler) -> Self {
        self.on("HEAD", pattern, handler)
    }

    pub fn options(self, pattern: &str, handler: impl Handler) -> Self {
        self.on("OPTIONS", pattern, handler)
    }

    /// Registers a handler for every method.
    pub fn any(self, pattern: &str, handler: impl Handler) -> Self {
        let token = self.config.any_method.clone();
        self.on(&token, pattern, handler)
    }

    /// Compiled patterns in registration order.
    pub fn patterns(&self) -> impl Iterator<Item = &Pattern> {
        self.routes.iter().map(|r| &r.pattern)
    }

    pub fn len(&self) -> usize { self.routes.len() }
    pub fn is_empty(&self) -> bool { self.routes.is_empty() }

    /// Dispatches one request.
    ///
    /// Returns once the chain ends: either a handler stops calling
    /// [`Request::next`], or no route is left to match. In the latter case
    /// nothing is written to `w`; answering `404` is up to the caller.
    pub fn serve(&self, w: &mut dyn ResponseWriter, req: &http::Request<Bytes>) {
        Queue::new(&self.routes, req, None).advance(w);
    }
}

/// A mux mounted inside another route's chain.
///
/// It matches against the full request path and links its parameter scopes
/// to the outer route's, so `req.param` sees both. When none of its routes
/// match it returns without touching `w`; it does not continue the outer
/// chain.
impl Handler for Mux {
    fn call(&self, w: &mut dyn ResponseWriter, req: &mut Request<'_>) {
        Queue::new(&self.routes, req.inner(), Some(req.scope())).advance(w);
    }
}

impl fmt::Debug for Mux {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.routes.iter().map(|r| r.pattern.to_string())).finish()
    }
}
