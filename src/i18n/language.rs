//! Language type: validated language representation.
//!
//! A `Language` can only be built from a code present in the registry, so
//! code holding one never has to handle an unsupported value.

use crate::document::TextDirection;
use crate::i18n::{LanguageConfig, LanguageRegistry};
use anyhow::{bail, Result};
use std::fmt;
use std::str::FromStr;

/// A validated language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "en", "hi", "es")
    code: &'static str,
}

impl Language {
    pub const ENGLISH: Language = Language { code: "en" };
    pub const HINDI: Language = Language { code: "hi" };
    pub const SPANISH: Language = Language { code: "es" };

    /// Create a Language from a language code string.
    ///
    /// Matching is exact (`"en"`, not `"EN"` or `"en-GB"`); use
    /// [`crate::locale::match_supported`] for locale tags.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is registered
    /// * `Err` if the code is not found
    pub fn from_code(code: &str) -> Result<Language> {
        match LanguageRegistry::get().get_by_code(code) {
            Some(config) => Ok(Language { code: config.code }),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// Get the canonical language (English).
    pub fn canonical() -> Language {
        let config = LanguageRegistry::get().canonical();
        Language { code: config.code }
    }

    /// All supported languages, in switcher order.
    pub fn all() -> Vec<Language> {
        LanguageRegistry::get()
            .list()
            .into_iter()
            .map(|config| Language { code: config.code })
            .collect()
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the language code is not found in the registry. This cannot
    /// happen for values built through `from_code`, `all` or the constants.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    /// English name of the language (e.g., "Hindi").
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Native name of the language (e.g., "हिन्दी").
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    pub fn flag(&self) -> &'static str {
        self.config().flag
    }

    pub fn direction(&self) -> TextDirection {
        self.config().direction
    }

    pub fn is_canonical(&self) -> bool {
        self.config().is_canonical
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

impl FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(code: &str) -> Result<Self> {
        Language::from_code(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Constant Tests ====================

    #[test]
    fn test_english_constant() {
        let english = Language::ENGLISH;
        assert_eq!(english.code(), "en");
        assert_eq!(english.name(), "English");
        assert!(english.is_canonical());
    }

    #[test]
    fn test_hindi_constant() {
        let hindi = Language::HINDI;
        assert_eq!(hindi.code(), "hi");
        assert_eq!(hindi.name(), "Hindi");
        assert_eq!(hindi.native_name(), "हिन्दी");
        assert!(!hindi.is_canonical());
    }

    #[test]
    fn test_spanish_constant() {
        let spanish = Language::SPANISH;
        assert_eq!(spanish.code(), "es");
        assert_eq!(spanish.native_name(), "Español");
        assert!(!spanish.is_canonical());
    }

    // ==================== from_code Tests ====================

    #[test]
    fn test_from_code_matches_constants() {
        assert_eq!(Language::from_code("en").unwrap(), Language::ENGLISH);
        assert_eq!(Language::from_code("hi").unwrap(), Language::HINDI);
        assert_eq!(Language::from_code("es").unwrap(), Language::SPANISH);
    }

    #[test]
    fn test_from_code_invalid() {
        let result = Language::from_code("fr");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown"));
    }

    #[test]
    fn test_from_code_is_case_sensitive() {
        assert!(Language::from_code("HI").is_err());
    }

    #[test]
    fn test_from_code_empty() {
        assert!(Language::from_code("").is_err());
    }

    #[test]
    fn test_parse_via_from_str() {
        let language: Language = "es".parse().expect("Should parse");
        assert_eq!(language, Language::SPANISH);
        assert!("de".parse::<Language>().is_err());
    }

    // ==================== Collection Tests ====================

    #[test]
    fn test_canonical_returns_english() {
        assert_eq!(Language::canonical(), Language::ENGLISH);
    }

    #[test]
    fn test_all_lists_supported_set() {
        assert_eq!(
            Language::all(),
            vec![Language::ENGLISH, Language::HINDI, Language::SPANISH]
        );
    }

    // ==================== Trait Tests ====================

    #[test]
    fn test_display_is_code() {
        assert_eq!(Language::HINDI.to_string(), "hi");
    }

    #[test]
    fn test_language_copy() {
        let lang1 = Language::ENGLISH;
        let lang2 = lang1;
        assert_eq!(lang1, lang2);
    }

    #[test]
    fn test_metadata_access() {
        let lang = Language::SPANISH;
        assert_eq!(lang.flag(), "🇪🇸");
        assert_eq!(lang.direction(), TextDirection::Ltr);
        assert_eq!(lang.config().code, "es");
    }
}
