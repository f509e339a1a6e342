//! Dictionaries bundled into the binary.
//!
//! Each supported language ships one JSON file under `src/i18n/locales/`.
//! Deployments can override them at runtime with `TRANSLATIONS_DIR`.

use crate::i18n::Language;

/// English dictionary (canonical)
pub const ENGLISH_SOURCE: &str = include_str!("locales/en.json");

/// Hindi dictionary
pub const HINDI_SOURCE: &str = include_str!("locales/hi.json");

/// Spanish dictionary
pub const SPANISH_SOURCE: &str = include_str!("locales/es.json");

/// Bundled JSON source for `language`, if one ships with the crate.
pub fn embedded_source(language: Language) -> Option<&'static str> {
    match language.code() {
        "en" => Some(ENGLISH_SOURCE),
        "hi" => Some(HINDI_SOURCE),
        "es" => Some(SPANISH_SOURCE),
        _ => None,
    }
}
