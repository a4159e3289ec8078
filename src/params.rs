//! Captured path parameters, chained to the enclosing dispatch's scope.

use std::collections::HashMap;
use std::sync::Arc;

/// Named values captured by one route match.
///
/// A nested [`Mux`](crate::Mux) links its scope to the caller's, so lookups
/// fall through to outer bindings while inner names shadow outer ones. The
/// link only ever points outward; scopes cannot form cycles.
#[derive(Debug, Default)]
pub struct Params {
    values: HashMap<String, String>,
    parent: Option<Arc<Params>>,
}

impl Params {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub(crate) fn set_parent(&mut self, parent: Option<Arc<Params>>) {
        self.parent = parent;
    }

    /// Looks up `key` in this scope, then in each enclosing scope.
    ///
    /// An empty binding counts as unset, so a wildcard that captured nothing
    /// does not hide an outer value of the same name.
    pub fn get(&self, key: &str) -> Option<&str> {
        match self.values.get(key) {
            Some(v) if !v.is_empty() => Some(v.as_str()),
            _ => self.parent.as_deref().and_then(|p| p.get(key)),
        }
    }

    /// Whether `key` is bound in this scope, regardless of its value.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Bindings of this scope only, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize { self.values.len() }
    pub fn is_empty(&self) -> bool { self.values.is_empty() }
    pub fn parent(&self) -> Option<&Params> { self.parent.as_deref() }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::Params;

    fn scope(pairs: &[(&str, &str)], parent: Option<Arc<Params>>) -> Params {
        let mut params = Params::new();
        for (k, v) in pairs {
            params.set(*k, *v);
        }
        params.set_parent(parent);
        params
    }

    #[test]
    fn test_get_own_binding() {
        let params = scope(&[("id", "42")], None);
        assert_eq!(params.get("id"), Some("42"));
        assert_eq!(params.get("missing"), None);
        assert_eq!(params.len(), 1);
        assert!(params.contains("id"));
    }

    #[test]
    fn test_iter_own_bindings_only() {
        let parent = Arc::new(scope(&[("org", "acme")], None));
        let child = scope(&[("id", "7"), ("tab", "")], Some(parent));

        let mut pairs: Vec<_> = child.iter().collect();
        pairs.sort();
        assert_eq!(pairs, vec![("id", "7"), ("tab", "")]);
    }

    #[test]
    fn test_child_shadows_parent() {
        let parent = Arc::new(scope(&[("id", "outer"), ("org", "acme")], None));
        let child = scope(&[("id", "inner")], Some(parent));
        assert_eq!(child.get("id"), Some("inner"));
        assert_eq!(child.get("org"), Some("acme"));
        assert_eq!(child.get("nope"), None);
    }

    #[test]
    fn test_empty_binding_falls_through() {
        let parent = Arc::new(scope(&[("rest", "a/b")], None));
        let child = scope(&[("rest", "")], Some(parent));
        assert!(child.contains("rest"));
        assert_eq!(child.get("rest"), Some("a/b"));

        let orphan = scope(&[("rest", "")], None);
        assert_eq!(orphan.get("rest"), None);
    }

    #[test]
    fn test_deep_chain() {
        let root = Arc::new(scope(&[("a", "1")], None));
        let mid = Arc::new(scope(&[("b", "2")], Some(root)));
        let leaf = scope(&[], Some(mid));
        assert!(leaf.is_empty());
        assert_eq!(leaf.get("a"), Some("1"));
        assert_eq!(leaf.get("b"), Some("2"));
        assert_eq!(leaf.parent().and_then(|p| p.parent()).map(Params::len), Some(1));
    }
}
