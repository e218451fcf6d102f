//! Statistic references

use crate::{Dimensions, Placeholders};
use serde::{Deserialize, Serialize};
use statexpr_ast::{StatRef, WILDCARD};
use std::cmp::Ordering;
use std::fmt;
use std::iter;

/// Identity of one statistic: `category.name{key:"value",...}`
///
/// Equality and hashing cover all three parts. Ordering is primarily by
/// [`qualified_name`](Self::qualified_name) and falls back to the dimensions
/// so that it stays consistent with equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatReference {
    category: String,
    name: String,
    #[serde(default, skip_serializing_if = "Dimensions::is_empty")]
    dimensions: Dimensions,
}

impl StatReference {
    pub fn new(category: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            name: name.into(),
            dimensions: Dimensions::new(),
        }
    }

    /// Build from a parsed reference; an explicit category wins over `default_category`.
    /// A repeated dimension key keeps its last value.
    pub fn from_ast(node: &StatRef, default_category: &str) -> Self {
        let category = node.category.as_deref().unwrap_or(default_category);
        let dimensions = node
            .dimensions
            .iter()
            .map(|d| (d.key.clone(), d.value.clone()))
            .collect();
        Self {
            category: category.to_string(),
            name: node.name.clone(),
            dimensions,
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    pub fn dimension(&self, key: &str) -> Option<&str> {
        self.dimensions.get(key).map(String::as_str)
    }

    /// `category.name`, the primary sort key
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.category, self.name)
    }

    /// True iff some dimension value is `*`
    pub fn is_wildcarded(&self) -> bool {
        self.dimensions.values().any(|v| v == WILDCARD)
    }

    /// Same category, name and dimension keys; values may differ
    pub fn keys_equal(&self, other: &Self) -> bool {
        self.category == other.category
            && self.name == other.name
            && self.dimensions.len() == other.dimensions.len()
            && self.dimensions.keys().eq(other.dimensions.keys())
    }

    /// Copy with the dimension mapping replaced
    pub fn with_dimensions(&self, dimensions: Dimensions) -> Self {
        Self {
            category: self.category.clone(),
            name: self.name.clone(),
            dimensions,
        }
    }

    /// Copy where each `*` dimension bound in `placeholders` takes the bound value
    pub fn resolve_placeholders(&self, placeholders: &Placeholders) -> Self {
        let dimensions = self
            .dimensions
            .iter()
            .map(|(key, value)| {
                let resolved = match placeholders.get(key) {
                    Some(bound) if value == WILDCARD => bound.clone(),
                    _ => value.clone(),
                };
                (key.clone(), resolved)
            })
            .collect();
        self.with_dimensions(dimensions)
    }

    /// Copy with every `*` dimension replaced by `marker`
    pub fn replace_wildcards(&self, marker: &str) -> Self {
        let dimensions = self
            .dimensions
            .iter()
            .map(|(key, value)| {
                let value = if value == WILDCARD { marker } else { value.as_str() };
                (key.clone(), value.to_string())
            })
            .collect();
        self.with_dimensions(dimensions)
    }

    fn qualified_bytes(&self) -> impl Iterator<Item = u8> + '_ {
        self.category
            .bytes()
            .chain(iter::once(b'.'))
            .chain(self.name.bytes())
    }
}

impl Ord for StatReference {
    fn cmp(&self, other: &Self) -> Ordering {
        self.qualified_bytes()
            .cmp(other.qualified_bytes())
            .then_with(|| self.dimensions.cmp(&other.dimensions))
    }
}

impl PartialOrd for StatReference {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for StatReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.category.is_empty() {
            write!(f, "{}.", self.category)?;
        }
        f.write_str(&self.name)?;
        if !self.dimensions.is_empty() {
            let dims: Vec<String> = self
                .dimensions
                .iter()
                .map(|(k, v)| format!("{k}:\"{v}\""))
                .collect();
            write!(f, "{{{}}}", dims.join(","))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn dims(pairs: &[(&str, &str)]) -> Dimensions {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn stat(category: &str, name: &str, pairs: &[(&str, &str)]) -> StatReference {
        StatReference::new(category, name).with_dimensions(dims(pairs))
    }

    #[test]
    fn test_display_sorts_dimensions() {
        let r = stat("cat", "name", &[("B", "y"), ("A", "x")]);
        assert_eq!(r.to_string(), "cat.name{A:\"x\",B:\"y\"}");
    }

    #[test]
    fn test_display_without_category_or_dimensions() {
        assert_eq!(StatReference::new("", "kills").to_string(), "kills");
        assert_eq!(StatReference::new("pvp", "kills").to_string(), "pvp.kills");
    }

    #[rstest]
    #[case(&[], false)]
    #[case(&[("map", "foo")], false)]
    #[case(&[("map", "*")], true)]
    #[case(&[("map", "foo"), ("mode", "*")], true)]
    fn test_is_wildcarded(#[case] pairs: &[(&str, &str)], #[case] expected: bool) {
        assert_eq!(stat("c", "n", pairs).is_wildcarded(), expected);
    }

    #[test]
    fn test_keys_equal() {
        let wild = stat("c", "kills", &[("map", "*")]);
        assert!(wild.keys_equal(&stat("c", "kills", &[("map", "foo")])));
        assert!(!wild.keys_equal(&stat("c", "shots", &[("map", "foo")])));
        assert!(!wild.keys_equal(&stat("c", "kills", &[("mode", "foo")])));
        assert!(!wild.keys_equal(&stat("c", "kills", &[("map", "foo"), ("mode", "x")])));
        assert!(!wild.keys_equal(&stat("other", "kills", &[("map", "foo")])));
    }

    #[test]
    fn test_equality_covers_dimensions() {
        assert_ne!(
            stat("c", "kills", &[("map", "foo")]),
            stat("c", "kills", &[("map", "bar")])
        );
        assert_eq!(
            stat("c", "kills", &[("map", "foo")]),
            stat("c", "kills", &[("map", "foo")])
        );
    }

    #[test]
    fn test_ordering_by_qualified_name() {
        let mut refs = vec![
            stat("b", "a", &[]),
            stat("a", "z", &[("k", "2")]),
            stat("a", "z", &[("k", "1")]),
            stat("a", "b", &[]),
        ];
        refs.sort();
        let rendered: Vec<String> = refs.iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            vec!["a.b", "a.z{k:\"1\"}", "a.z{k:\"2\"}", "b.a"]
        );
    }

    #[test]
    fn test_resolve_placeholders_only_touches_wildcards() {
        let r = stat("c", "kills", &[("map", "*"), ("mode", "ctf")]);
        let placeholders = dims(&[("map", "foo"), ("mode", "dm")]);
        assert_eq!(
            r.resolve_placeholders(&placeholders),
            stat("c", "kills", &[("map", "foo"), ("mode", "ctf")])
        );
    }

    #[test]
    fn test_resolve_placeholders_unbound_wildcard_stays() {
        let r = stat("c", "kills", &[("map", "*")]);
        let resolved = r.resolve_placeholders(&dims(&[("other", "x")]));
        assert!(resolved.is_wildcarded());
    }

    #[test]
    fn test_replace_wildcards() {
        let r = stat("c", "kills", &[("map", "*"), ("mode", "ctf")]);
        assert_eq!(
            r.replace_wildcards("sample_3"),
            stat("c", "kills", &[("map", "sample_3"), ("mode", "ctf")])
        );
    }

    #[test]
    fn test_from_ast_defaults_category() {
        let node = StatRef::new("kills").with_dimension("map", "x").with_dimension("map", "y");
        let r = StatReference::from_ast(&node, "fallback");
        assert_eq!(r.category(), "fallback");
        assert_eq!(r.dimension("map"), Some("y"));

        let explicit = StatRef::new("kills").with_category("pvp");
        assert_eq!(StatReference::from_ast(&explicit, "fallback").category(), "pvp");
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_value(stat("c", "kills", &[("map", "foo")])).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"category": "c", "name": "kills", "dimensions": {"map": "foo"}})
        );
        let bare = serde_json::to_value(StatReference::new("c", "n")).unwrap();
        assert_eq!(bare, serde_json::json!({"category": "c", "name": "n"}));
    }
}
