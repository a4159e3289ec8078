//! Route pattern compiler.
//!
//! A pattern is a `/`-delimited template. Each non-empty piece becomes one
//! [`Segment`]:
//!
//! | Piece | Segment | Matches |
//! |---|---|---|
//! | `users` | `Literal("users")` | exactly `users` |
//! | `:id` | `Param("id")` | any one non-empty segment |
//! | `*rest` | `Wildcard("rest")` | everything left, slashes included |
//!
//! All syntax checks happen here, once, at registration. A [`Pattern`] that
//! exists is well-formed, so the matcher never has to second-guess it.

use std::collections::HashSet;
use std::fmt;

use crate::config::Config;
use crate::error::Error;
use crate::method::MethodFilter;

/// One compiled piece of a route pattern.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Segment {
    Literal(String),
    Param(String),
    /// Only ever the final segment.
    Wildcard(String),
}

/// A compiled route: method filter plus segments. Immutable once built.
#[derive(Clone, Debug)]
pub struct Pattern {
    pub(crate) method: MethodFilter,
    pub(crate) segments: Vec<Segment>,
    source: String,
}

impl Pattern {
    /// Compiles `pattern` for `method` under `config`.
    ///
    /// Fails on an empty pattern or method, a wildcard that is not last, a
    /// repeated capture name, or a sigil with no name after it.
    pub fn compile(method: &str, pattern: &str, config: &Config) -> Result<Self, Error> {
        if pattern.is_empty() {
            return Err(Error::EmptyPattern);
        }
        if method.is_empty() {
            return Err(Error::EmptyMethod { pattern: pattern.to_owned() });
        }

        let pieces: Vec<&str> = pattern.split('/').filter(|p| !p.is_empty()).collect();
        let mut segments = Vec::with_capacity(pieces.len());
        let mut names = HashSet::new();

        for (i, piece) in pieces.iter().enumerate() {
            let segment = if let Some(name) = piece.strip_prefix(config.param_sigil) {
                Segment::Param(name.to_owned())
            } else if let Some(name) = piece.strip_prefix(config.wildcard_sigil) {
                if i + 1 != pieces.len() {
                    return Err(Error::WildcardNotLast {
                        pattern: pattern.to_owned(),
                        name: name.to_owned(),
                    });
                }
                Segment::Wildcard(name.to_owned())
            } else {
                Segment::Literal((*piece).to_owned())
            };

            if let Segment::Param(name) | Segment::Wildcard(name) = &segment {
                if name.is_empty() {
                    return Err(Error::EmptyName { pattern: pattern.to_owned() });
                }
                if !names.insert(name.clone()) {
                    return Err(Error::DuplicateName {
                        pattern: pattern.to_owned(),
                        name: name.clone(),
                    });
                }
            }
            segments.push(segment);
        }

        Ok(Self {
            method: MethodFilter::new(method, config),
            segments,
            source: pattern.to_owned(),
        })
    }

    pub fn method(&self) -> &MethodFilter { &self.method }
    pub fn segments(&self) -> &[Segment] { &self.segments }

    /// The pattern string as registered.
    pub fn as_str(&self) -> &str { &self.source }

    pub(crate) fn has_wildcard(&self) -> bool {
        matches!(self.segments.last(), Some(Segment::Wildcard(_)))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.source)
    }
}
