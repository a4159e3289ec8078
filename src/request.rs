//! The request view handed to handlers.

use std::sync::Arc;

use bytes::Bytes;
use http::{HeaderMap, Method, Uri};

use crate::params::Params;
use crate::response::ResponseWriter;

/// The next dispatch step, bound to one in-flight request.
pub(crate) trait Continuation {
    fn advance(&mut self, w: &mut dyn ResponseWriter);
}

/// An incoming request as seen by one handler in a chain.
///
/// Method, URI, headers and body pass through untouched from the transport.
/// On top of that it carries the parameters captured by the matched route
/// and the continuation that runs the next handler or route.
pub struct Request<'a> {
    inner: &'a http::Request<Bytes>,
    params: Arc<Params>,
    next: &'a mut dyn Continuation,
}

impl<'a> Request<'a> {
    pub(crate) fn new(
        inner: &'a http::Request<Bytes>,
        params: Arc<Params>,
        next: &'a mut dyn Continuation,
    ) -> Self {
        Self { inner, params, next }
    }

    pub fn method(&self) -> &Method { self.inner.method() }
    pub fn uri(&self) -> &Uri { self.inner.uri() }
    pub fn path(&self) -> &str { self.inner.uri().path() }
    pub fn headers(&self) -> &HeaderMap { self.inner.headers() }
    pub fn body(&self) -> &Bytes { self.inner.body() }

    /// The request exactly as the transport delivered it.
    pub fn inner(&self) -> &'a http::Request<Bytes> { self.inner }

    /// Case-insensitive header lookup. `None` if absent or not visible ASCII.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.inner.headers().get(name)?.to_str().ok()
    }

    /// Returns a named path parameter, searching enclosing scopes too.
    ///
    /// For a route `/users/:id`, `req.param("id")` on `/users/42` returns `Some("42")`.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key)
    }

    pub fn params(&self) -> &Params { &self.params }

    pub(crate) fn scope(&self) -> Arc<Params> {
        Arc::clone(&self.params)
    }

    /// Runs the next handler of this route, or the next route that matches,
    /// and returns once it does. Does nothing when the chain is exhausted.
    pub fn next(&mut self, w: &mut dyn ResponseWriter) {
        self.next.advance(w)
    }
}
