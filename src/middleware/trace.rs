use std::time::Instant;

use tracing::{info, info_span};

use crate::handler::Handler;
use crate::request::Request;
use crate::response::ResponseWriter;

/// Wraps the rest of the chain in an `info` span and logs its latency.
///
/// Register it first, on a catch-all route, so every later route runs
/// inside the span:
///
/// ```rust
/// use baton::{Mux, middleware};
///
/// let mux = Mux::new().any("/*path", middleware::trace());
/// ```
pub fn trace() -> Trace {
    Trace
}

/// See [`trace()`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Trace;

impl Handler for Trace {
    fn call(&self, w: &mut dyn ResponseWriter, req: &mut Request<'_>) {
        let span = info_span!("request", method = %req.method(), path = req.path());
        let _enter = span.enter();

        let start = Instant::now();
        req.next(w);
        info!(elapsed = ?start.elapsed(), "request finished");
    }
}
