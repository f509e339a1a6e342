//! Key-path resolution against a translation dictionary.
//!
//! A key path such as `"nav.home"` is split on `.` and walked one segment at
//! a time. Resolution never fails loudly: an unresolved path degrades to the
//! caller's fallback, or to the key path itself so that untranslated text is
//! visible in the page instead of breaking it.

use crate::i18n::dictionary::{Dictionary, TranslationValue};
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Outcome of resolving a key path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// The path ended on a leaf string
    Found(&'a str),

    /// The path did not resolve; the caller's fallback was used
    Fallback(&'a str),

    /// The path did not resolve and no usable fallback was given
    RawKey(&'a str),
}

impl Resolution<'_> {
    /// The display string for this outcome.
    pub fn as_str(&self) -> &str {
        match *self {
            Resolution::Found(text) | Resolution::Fallback(text) | Resolution::RawKey(text) => text,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Resolution::Found(_))
    }
}

/// Walk `key_path` and return the leaf string it names, if any.
///
/// The walk aborts as soon as a segment is missing or the current value is a
/// leaf with segments still left. A path that ends on a node is unresolved.
pub fn lookup<'a>(dictionary: &'a Dictionary, key_path: &str) -> Option<&'a str> {
    let mut segments = key_path.split('.');
    let mut current = dictionary.get(segments.next()?)?;

    for segment in segments {
        current = match current {
            TranslationValue::Node(children) => children.get(segment)?,
            TranslationValue::Leaf(_) => return None,
        };
    }

    current.as_leaf()
}

/// Resolve `key_path`, reporting which branch produced the result.
pub fn resolve_detailed<'a>(
    dictionary: &'a Dictionary,
    key_path: &'a str,
    fallback: Option<&'a str>,
) -> Resolution<'a> {
    match lookup(dictionary, key_path) {
        Some(text) => Resolution::Found(text),
        None => match fallback {
            Some(fallback) if !fallback.is_empty() => Resolution::Fallback(fallback),
            _ => Resolution::RawKey(key_path),
        },
    }
}

/// Resolve `key_path` to a display string.
///
/// Returns the leaf string when the path resolves; otherwise `fallback` when
/// it is present and non-empty; otherwise `key_path` unchanged.
///
/// # Example
/// ```
/// use site_i18n::i18n::{resolve, Dictionary};
///
/// let dictionary = Dictionary::from_json_str(r#"{"nav": {"home": "Home"}}"#).unwrap();
/// assert_eq!(resolve(&dictionary, "nav.home", None), "Home");
/// assert_eq!(resolve(&dictionary, "nav.missing", None), "nav.missing");
/// assert_eq!(resolve(&dictionary, "nav.missing", Some("Default")), "Default");
/// ```
pub fn resolve(dictionary: &Dictionary, key_path: &str, fallback: Option<&str>) -> String {
    resolve_detailed(dictionary, key_path, fallback)
        .as_str()
        .to_string()
}

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

fn placeholder_regex() -> &'static Regex {
    PLACEHOLDER_REGEX.get_or_init(|| Regex::new(r"\{([A-Za-z0-9_]+)\}").unwrap())
}

/// Substitute `{name}` placeholders in `template`.
///
/// Placeholders without a matching parameter are left as written.
pub fn interpolate(template: &str, params: &[(&str, &str)]) -> String {
    placeholder_regex()
        .replace_all(template, |caps: &regex::Captures| {
            let name = &caps[1];
            params
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Names of all `{name}` placeholders in `text`.
pub(crate) fn placeholders(text: &str) -> BTreeSet<String> {
    placeholder_regex()
        .captures_iter(text)
        .map(|cap| cap[1].to_string())
        .collect()
}
