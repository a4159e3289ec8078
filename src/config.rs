//! Pattern syntax and method-matching policy.
//!
//! A [`Config`] is consulted only while routes are registered. Every route
//! compiles down to segments and a [`MethodFilter`](crate::MethodFilter) that
//! already carry the policy, so nothing here is read on the request path.
//!
//! ```rust
//! use baton::{Config, MethodCase, Mux};
//!
//! let mux = Mux::with_config(
//!     Config::default()
//!         .param_sigil('$')
//!         .method_case(MethodCase::Insensitive),
//! );
//! ```

/// How a route's method is compared against the request method.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum MethodCase {
    /// `GET` only matches `GET`. RFC 9110 §9.1 says methods are case-sensitive.
    #[default]
    Sensitive,
    /// `get` matches `GET`, `Get`, ...
    Insensitive,
}

/// Route registration policy.
#[derive(Clone, Debug)]
pub struct Config {
    pub(crate) param_sigil: char,
    pub(crate) wildcard_sigil: char,
    pub(crate) any_method: String,
    pub(crate) method_case: MethodCase,
}

impl Config {
    /// Prefix marking a single-segment parameter. Default `:`.
    ///
    /// # Panics
    ///
    /// Panics if `sigil` is `/` or equals the wildcard sigil.
    pub fn param_sigil(mut self, sigil: char) -> Self {
        assert_ne!(sigil, '/', "`/` cannot be a parameter sigil");
        assert_ne!(sigil, self.wildcard_sigil, "parameter and wildcard sigils must differ");
        self.param_sigil = sigil;
        self
    }

    /// Prefix marking a trailing catch-all segment. Default `*`.
    ///
    /// # Panics
    ///
    /// Panics if `sigil` is `/` or equals the parameter sigil.
    pub fn wildcard_sigil(mut self, sigil: char) -> Self {
        assert_ne!(sigil, '/', "`/` cannot be a wildcard sigil");
        assert_ne!(sigil, self.param_sigil, "parameter and wildcard sigils must differ");
        self.wildcard_sigil = sigil;
        self
    }

    /// Method string that registers a route for every verb. Default `*`.
    pub fn any_method(mut self, token: impl Into<String>) -> Self {
        self.any_method = token.into();
        self
    }

    pub fn method_case(mut self, case: MethodCase) -> Self {
        self.method_case = case;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            param_sigil: ':',
            wildcard_sigil: '*',
            any_method: "*".to_owned(),
            method_case: MethodCase::Sensitive,
        }
    }
}
