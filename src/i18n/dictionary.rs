//! Translation dictionary: the nested key → string tree for one language.
//!
//! Dictionaries are parsed from JSON objects whose values are either strings
//! (leaves) or further objects (nodes). Anything else (numbers, booleans,
//! arrays, null) is rejected at load time, so every value reachable from the
//! root is one of the two `TranslationValue` variants.

use serde::Deserialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// A single value in a translation tree.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TranslationValue {
    /// Display string at the end of a key path
    Leaf(String),

    /// Nested mapping of further segments
    Node(BTreeMap<String, TranslationValue>),
}

impl TranslationValue {
    /// Build a leaf from anything string-like.
    pub fn leaf(text: impl Into<String>) -> Self {
        TranslationValue::Leaf(text.into())
    }

    /// Build a node from `(segment, value)` pairs.
    pub fn node<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, TranslationValue)>,
    {
        TranslationValue::Node(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Returns the leaf string, or `None` for a node.
    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            TranslationValue::Leaf(text) => Some(text),
            TranslationValue::Node(_) => None,
        }
    }

    /// Every leaf below this value as `(key path, text)`, in key order.
    ///
    /// `path` is the key path of this value itself; a leaf yields just `path`.
    pub fn leaves(&self, path: &str) -> Vec<(String, &str)> {
        let mut out = Vec::new();
        self.collect_leaves(path.to_string(), &mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, path: String, out: &mut Vec<(String, &'a str)>) {
        match self {
            TranslationValue::Leaf(text) => out.push((path, text)),
            TranslationValue::Node(children) => {
                for (segment, child) in children {
                    child.collect_leaves(join_path(&path, segment), out);
                }
            }
        }
    }
}

/// Errors produced while parsing a dictionary.
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("translation dictionary must be a JSON object of strings and objects: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Root mapping of one language's translations.
///
/// Immutable once built. Switching languages swaps the whole dictionary
/// rather than editing one in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Dictionary {
    root: BTreeMap<String, TranslationValue>,
}

impl Dictionary {
    /// Create a dictionary from an already-built root mapping.
    pub fn new(root: BTreeMap<String, TranslationValue>) -> Self {
        Self { root }
    }

    /// Parse a dictionary from a JSON document.
    ///
    /// # Example
    /// ```
    /// use site_i18n::i18n::Dictionary;
    ///
    /// let dictionary = Dictionary::from_json_str(r#"{"nav": {"home": "Home"}}"#).unwrap();
    /// assert_eq!(dictionary.len(), 1);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, DictionaryError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Top-level value for a single segment.
    pub fn get(&self, segment: &str) -> Option<&TranslationValue> {
        self.root.get(segment)
    }

    /// Top-level mapping.
    pub fn root(&self) -> &BTreeMap<String, TranslationValue> {
        &self.root
    }

    /// Number of top-level entries.
    pub fn len(&self) -> usize {
        self.root.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Every leaf in the tree as `(key path, text)`, in key order.
    pub fn leaves(&self) -> Vec<(String, &str)> {
        self.root
            .iter()
            .flat_map(|(segment, value)| value.leaves(segment))
            .collect()
    }
}

impl From<BTreeMap<String, TranslationValue>> for Dictionary {
    fn from(root: BTreeMap<String, TranslationValue>) -> Self {
        Self::new(root)
    }
}

/// Append a segment to a dot-separated key path.
pub(crate) fn join_path(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_string()
    } else {
        format!("{}.{}", prefix, segment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nested_dictionary() {
        let dictionary =
            Dictionary::from_json_str(r#"{"nav": {"home": "Home", "about": "About"}, "title": "Site"}"#)
                .expect("Should parse");

        assert_eq!(dictionary.len(), 2);
        assert_eq!(dictionary.get("title"), Some(&TranslationValue::leaf("Site")));
        assert!(matches!(dictionary.get("nav"), Some(TranslationValue::Node(_))));
    }

    #[test]
    fn test_parse_empty_object() {
        let dictionary = Dictionary::from_json_str("{}").expect("Should parse");
        assert!(dictionary.is_empty());
    }

    #[test]
    fn test_parse_rejects_number_leaf() {
        let result = Dictionary::from_json_str(r#"{"nav": {"count": 3}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_rejects_array_and_null() {
        assert!(Dictionary::from_json_str(r#"{"items": ["a", "b"]}"#).is_err());
        assert!(Dictionary::from_json_str(r#"{"items": null}"#).is_err());
        assert!(Dictionary::from_json_str(r#"{"flag": true}"#).is_err());
    }

    #[test]
    fn test_parse_rejects_non_object_root() {
        assert!(Dictionary::from_json_str(r#""just a string""#).is_err());
        assert!(Dictionary::from_json_str("not json").is_err());
    }

    #[test]
    fn test_leaves_are_sorted_full_paths() {
        let dictionary = Dictionary::from_json_str(
            r#"{"nav": {"home": "Home", "about": "About"}, "footer": {"legal": {"terms": "Terms"}}}"#,
        )
        .unwrap();

        let leaves = dictionary.leaves();
        assert_eq!(
            leaves,
            vec![
                ("footer.legal.terms".to_string(), "Terms"),
                ("nav.about".to_string(), "About"),
                ("nav.home".to_string(), "Home"),
            ]
        );
    }

    #[test]
    fn test_value_leaves_are_prefixed_with_path() {
        let value = TranslationValue::node([
            ("title", TranslationValue::leaf("Divisions")),
            (
                "technology",
                TranslationValue::node([("name", TranslationValue::leaf("Technology"))]),
            ),
        ]);

        assert_eq!(
            value.leaves("divisions"),
            vec![
                ("divisions.technology.name".to_string(), "Technology"),
                ("divisions.title".to_string(), "Divisions"),
            ]
        );
        assert_eq!(
            TranslationValue::leaf("Home").leaves("nav.home"),
            vec![("nav.home".to_string(), "Home")]
        );
    }

    #[test]
    fn test_builders_match_parsed_value() {
        let built = Dictionary::from(BTreeMap::from([(
            "nav".to_string(),
            TranslationValue::node([("home", TranslationValue::leaf("Home"))]),
        )]));
        let parsed = Dictionary::from_json_str(r#"{"nav": {"home": "Home"}}"#).unwrap();
        assert_eq!(built, parsed);
    }

    #[test]
    fn test_as_leaf() {
        assert_eq!(TranslationValue::leaf("x").as_leaf(), Some("x"));
        let node = TranslationValue::node::<&str, _>([]);
        assert_eq!(node.as_leaf(), None);
    }

    #[test]
    fn test_join_path() {
        assert_eq!(join_path("", "nav"), "nav");
        assert_eq!(join_path("nav", "home"), "nav.home");
    }
}
