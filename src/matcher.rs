//! Matches a request method and path against one compiled [`Pattern`].
//!
//! Exact match only. There is no ranking between routes: the first route in
//! registration order that matches wins.

use crate::params::Params;
use crate::pattern::{Pattern, Segment};

/// Splits a request path into segments.
///
/// One leading `/` is dropped and the root path has no segments. Empty
/// segments are kept: `/users/` is `["users", ""]`.
pub(crate) fn split_path(path: &str) -> Vec<&str> {
    let path = path.strip_prefix('/').unwrap_or(path);
    if path.is_empty() {
        return Vec::new();
    }
    path.split('/').collect()
}

/// Tests `pattern` against a request. On success returns a fresh scope with
/// every captured value and no parent.
pub fn check(pattern: &Pattern, method: &str, path: &str) -> Option<Params> {
    if !pattern.method.accepts(method) {
        return None;
    }

    let parts = split_path(path);
    if !pattern.has_wildcard() && parts.len() != pattern.segments.len() {
        return None;
    }

    let mut params = Params::new();
    for (i, segment) in pattern.segments.iter().enumerate() {
        match segment {
            Segment::Literal(text) => {
                if parts.get(i) != Some(&text.as_str()) {
                    return None;
                }
            }
            Segment::Param(name) => match parts.get(i) {
                Some(part) if !part.is_empty() => params.set(name.as_str(), *part),
                _ => return None,
            },
            Segment::Wildcard(name) => {
                let rest = parts.get(i..).unwrap_or_default().join("/");
                params.set(name.as_str(), rest);
                return Some(params);
            }
        }
    }

    Some(params)
}
