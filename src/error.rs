//! Unified error type.

/// The error type returned by baton's fallible operations.
///
/// Everything here is a setup-time failure: a route that cannot be compiled,
/// or a server that cannot bind. Request-time outcomes such as "no route
/// matched" are not errors and never surface as an `Error`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("empty route pattern")]
    EmptyPattern,

    #[error("empty route method for pattern `{pattern}`")]
    EmptyMethod { pattern: String },

    #[error("wildcard `{name}` must be the last segment of `{pattern}`")]
    WildcardNotLast { pattern: String, name: String },

    #[error("parameter `{name}` appears more than once in `{pattern}`")]
    DuplicateName { pattern: String, name: String },

    #[error("unnamed parameter or wildcard in `{pattern}`")]
    EmptyName { pattern: String },

    #[error("no handlers provided for {method} `{pattern}`")]
    NoHandlers { method: String, pattern: String },

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
