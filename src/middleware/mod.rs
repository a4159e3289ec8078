//! Built-in chained handlers.
//!
//! Middleware in baton is an ordinary [`Handler`](crate::Handler) placed at
//! the front of a route's chain. It does its work, calls
//! [`Request::next`](crate::Request::next), and picks up again once
//! everything downstream has returned.
//!
//! - [`trace()`]: per-request span with method, path and latency

mod trace;

pub use trace::{Trace, trace};
