//! Route method filter.
//!
//! A route accepts either one verb or every verb. Verbs are kept as the
//! registered string rather than a closed enum: extension methods such as
//! `PURGE` or `PROPFIND` route like any other.

use std::fmt;

use crate::config::{Config, MethodCase};

/// The method half of a compiled route.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MethodFilter {
    /// Accepts every request method.
    Any,
    /// Accepts a method byte-equal to this one.
    Exact(String),
    /// Accepts a method equal to this one ignoring ASCII case.
    IgnoreCase(String),
}

impl MethodFilter {
    pub(crate) fn new(method: &str, config: &Config) -> Self {
        if method == config.any_method {
            return Self::Any;
        }
        match config.method_case {
            MethodCase::Sensitive   => Self::Exact(method.to_owned()),
            MethodCase::Insensitive => Self::IgnoreCase(method.to_owned()),
        }
    }

    /// Whether a request with `method` passes this filter.
    pub fn accepts(&self, method: &str) -> bool {
        match self {
            Self::Any           => true,
            Self::Exact(m)      => m == method,
            Self::IgnoreCase(m) => m.eq_ignore_ascii_case(method),
        }
    }
}

impl fmt::Display for MethodFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("*"),
            Self::Exact(m) | Self::IgnoreCase(m) => f.write_str(m),
        }
    }
}
