//! Per-request dispatch cursor.
//!
//! A [`Queue`] holds what is left of the active route's handlers and the
//! routes not yet tried. [`advance`](Continuation::advance) runs exactly one
//! step:
//!
//! 1. pop the next handler of the active route and call it, or
//! 2. scan forward for the next matching route and call its first handler, or
//! 3. do nothing, because both lists are empty.
//!
//! Chaining to the next handler and falling through to the next route are the
//! same call; they only differ in which list still has entries. A handler's
//! continuation is a plain nested call into `advance`, so the caller resumes
//! once the downstream chain returns.

use std::sync::Arc;

use bytes::Bytes;
use tracing::trace;

use crate::handler::BoxedHandler;
use crate::matcher;
use crate::mux::Route;
use crate::params::Params;
use crate::request::{Continuation, Request};
use crate::response::ResponseWriter;

pub(crate) struct Queue<'r> {
    handlers: &'r [BoxedHandler],
    routes: &'r [Route],
    request: &'r http::Request<Bytes>,
    /// Scope of the enclosing dispatch, if this queue runs inside another mux.
    parent: Option<Arc<Params>>,
    scope: Arc<Params>,
}

impl<'r> Queue<'r> {
    pub(crate) fn new(
        routes: &'r [Route],
        request: &'r http::Request<Bytes>,
        parent: Option<Arc<Params>>,
    ) -> Self {
        let mut scope = Params::new();
        scope.set_parent(parent.clone());
        Self { handlers: &[], routes, request, parent, scope: Arc::new(scope) }
    }

    fn invoke(&mut self, handler: &'r BoxedHandler, w: &mut dyn ResponseWriter) {
        let request = self.request;
        let scope = Arc::clone(&self.scope);
        handler.call(w, &mut Request::new(request, scope, self));
    }
}

impl Continuation for Queue<'_> {
    fn advance(&mut self, w: &mut dyn ResponseWriter) {
        let handlers = self.handlers;
        if let Some((handler, rest)) = handlers.split_first() {
            self.handlers = rest;
            self.invoke(handler, w);
            return;
        }

        let request = self.request;
        let method = request.method().as_str();
        let path = request.uri().path();

        loop {
            let routes = self.routes;
            let Some((route, rest)) = routes.split_first() else {
                break;
            };
            self.routes = rest;

            let Some(mut params) = matcher::check(&route.pattern, method, path) else {
                continue;
            };
            let Some((first, rest)) = route.handlers.split_first() else {
                continue;
            };

            trace!(route = %route.pattern, path, "route matched");
            params.set_parent(self.parent.clone());
            self.scope = Arc::new(params);
            self.handlers = rest;
            self.invoke(first, w);
            return;
        }

        trace!(method, path, "dispatch exhausted");
    }
}
