//! Namespaced key parsing and validation.
//!
//! A key has the form `namespace:path/to/item`. It is split on the first
//! colon; everything after it is the item path.
//!
//! Valid namespaces:
//! - Must be non-empty
//! - Must not contain `/`, `\`, NUL or `..`
//! - Must not be `.`
//!
//! Valid item paths:
//! - Must be non-empty
//! - Must not contain `\`, NUL or `..`
//! - Must not start or end with `/`
//! - Must not contain consecutive slashes (`//`)
//! - Components between slashes must not be `.`

use std::fmt;
use std::str::FromStr;

use crate::error::{PackError, PackResult};

/// Characters that are forbidden anywhere in a namespace or item path.
const FORBIDDEN_CHARS: &[char] = &['\\', '\0'];

/// A parsed `namespace:path` key.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemKey {
    pub namespace: String,
    pub path: String,
}

impl ItemKey {
    /// Build a key from its parts, validating both.
    pub fn new(namespace: impl Into<String>, path: impl Into<String>) -> PackResult<Self> {
        let key = Self {
            namespace: namespace.into(),
            path: path.into(),
        };
        validate_namespace(&key.namespace)?;
        validate_item_path(&key.path)?;
        Ok(key)
    }

    /// Parse and validate `namespace:path`.
    ///
    /// # Examples
    ///
    /// ```
    /// use mcpack_pack::key::ItemKey;
    ///
    /// let key = ItemKey::parse("my_pack:foo/bar").unwrap();
    /// assert_eq!(key.namespace, "my_pack");
    /// assert_eq!(key.path, "foo/bar");
    /// assert!(ItemKey::parse("foo").is_err());
    /// assert!(ItemKey::parse("ns:../escape").is_err());
    /// ```
    pub fn parse(key: &str) -> PackResult<Self> {
        let (namespace, path) = key
            .split_once(':')
            .ok_or_else(|| PackError::invalid_key(key, "missing ':' between namespace and path"))?;
        validate_namespace(namespace).map_err(|e| rekey(e, key))?;
        validate_item_path(path).map_err(|e| rekey(e, key))?;
        Ok(Self {
            namespace: namespace.to_string(),
            path: path.to_string(),
        })
    }
}

impl FromStr for ItemKey {
    type Err = PackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

/// Report the whole key rather than the failing half.
fn rekey(err: PackError, key: &str) -> PackError {
    match err {
        PackError::InvalidKey { reason, .. } => PackError::invalid_key(key, reason),
        other => other,
    }
}

/// Validate a namespace name, returning `Ok(())` if valid.
pub fn validate_namespace(name: &str) -> PackResult<()> {
    validate_component("namespace", name)
}

/// Validate a data pack name. Same rules as namespaces.
pub fn validate_pack_name(name: &str) -> PackResult<()> {
    validate_component("pack name", name)
}

fn validate_component(label: &str, name: &str) -> PackResult<()> {
    if name.is_empty() {
        return Err(PackError::invalid_key(name, format!("{label} must not be empty")));
    }
    if name.contains('/') {
        return Err(PackError::invalid_key(name, format!("{label} must not contain '/'")));
    }
    if name == "." || name.contains("..") {
        return Err(PackError::invalid_key(name, format!("{label} must not be '.' or contain '..'")));
    }
    check_forbidden(name)
}

/// Validate an item path, returning `Ok(())` if valid.
///
/// The path becomes a relative directory path under the kind's folder, so
/// anything that could escape that folder is rejected.
pub fn validate_item_path(path: &str) -> PackResult<()> {
    if path.is_empty() {
        return Err(PackError::invalid_key(path, "path must not be empty"));
    }

    check_forbidden(path)?;

    // Must not contain `..` (parent traversal).
    if path.contains("..") {
        return Err(PackError::invalid_key(path, "must not contain '..'"));
    }

    if path.starts_with('/') || path.ends_with('/') {
        return Err(PackError::invalid_key(path, "must not start or end with '/'"));
    }

    if path.contains("//") {
        return Err(PackError::invalid_key(path, "must not contain consecutive slashes '//'"));
    }

    if path.split('/').any(|component| component == ".") {
        return Err(PackError::invalid_key(path, "path components must not be '.'"));
    }

    Ok(())
}

fn check_forbidden(value: &str) -> PackResult<()> {
    for ch in FORBIDDEN_CHARS {
        if value.contains(*ch) {
            return Err(PackError::invalid_key(
                value,
                format!("contains forbidden character: {ch:?}"),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parse_simple_key() {
        let key = ItemKey::parse("ns:foo/bar").unwrap();
        assert_eq!(key.namespace, "ns");
        assert_eq!(key.path, "foo/bar");
        assert_eq!(key.to_string(), "ns:foo/bar");
    }

    #[test]
    fn splits_on_first_colon() {
        let key = ItemKey::parse("ns:a:b").unwrap();
        assert_eq!(key.namespace, "ns");
        assert_eq!(key.path, "a:b");
    }

    #[test]
    fn reject_missing_colon() {
        let err = ItemKey::parse("foo").unwrap_err();
        assert!(matches!(err, PackError::InvalidKey { .. }));
    }

    #[test]
    fn reject_parent_traversal() {
        for key in ["ns:../x", "ns:a/../b", "ns:a/..", "ns:..", "..:x"] {
            let err = ItemKey::parse(key).unwrap_err();
            assert!(
                matches!(&err, PackError::InvalidKey { key: k, .. } if k == key),
                "{key}: {err}"
            );
        }
    }

    #[test]
    fn reject_empty_parts() {
        assert!(ItemKey::parse(":path").is_err());
        assert!(ItemKey::parse("ns:").is_err());
    }

    #[test]
    fn reject_slash_boundaries() {
        assert!(validate_item_path("/abs").is_err());
        assert!(validate_item_path("trailing/").is_err());
        assert!(validate_item_path("a//b").is_err());
    }

    #[test]
    fn reject_dot_components() {
        assert!(validate_item_path(".").is_err());
        assert!(validate_item_path("a/./b").is_err());
        assert!(validate_item_path(".hidden").is_ok());
    }

    #[test]
    fn reject_backslash() {
        assert!(validate_item_path("a\\b").is_err());
        assert!(validate_namespace("a\\b").is_err());
    }

    #[test]
    fn namespace_rules() {
        assert!(validate_namespace("minecraft").is_ok());
        assert!(validate_namespace("my_pack-2.0").is_ok());
        assert!(validate_namespace("a/b").is_err());
        assert!(validate_namespace(".").is_err());
        assert!(validate_namespace("").is_err());
    }

    #[test]
    fn new_validates() {
        assert!(ItemKey::new("ns", "ok/path").is_ok());
        assert!(ItemKey::new("ns", "../bad").is_err());
    }

    proptest! {
        #[test]
        fn valid_paths_parse(
            ns in "[a-z0-9_]{1,12}",
            parts in prop::collection::vec("[a-z0-9_-]{1,8}", 1..5),
        ) {
            let path = parts.join("/");
            let key = ItemKey::parse(&format!("{ns}:{path}")).unwrap();
            prop_assert_eq!(key.namespace, ns);
            prop_assert_eq!(key.path, path);
        }

        #[test]
        fn dotdot_always_rejected(prefix in "[a-z/]{0,6}", suffix in "[a-z/]{0,6}") {
            let key = format!("ns:{prefix}..{suffix}");
            prop_assert!(ItemKey::parse(&key).is_err());
        }
    }
}
