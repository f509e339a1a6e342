//! Language registry: Single source of truth for all supported languages.
//!
//! This module provides a centralized registry of all languages the site can
//! display. It uses a singleton pattern with `OnceLock` to ensure thread-safe
//! initialization and access.

use crate::document::TextDirection;
use std::sync::OnceLock;

/// Configuration for a supported language.
///
/// Contains all metadata shown by the language switcher and needed to update
/// document attributes, plus whether the language is the canonical one.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "en", "hi", "es")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "Hindi", "Spanish")
    pub name: &'static str,

    /// Native name of the language (e.g., "English", "हिन्दी", "Español")
    pub native_name: &'static str,

    /// Flag emoji shown next to the language in the switcher
    pub flag: &'static str,

    /// Writing direction used for the document `dir` attribute
    pub direction: TextDirection,

    /// Whether this is the canonical language (only one should be true).
    /// Its dictionary is the reference for validation, and it is the
    /// default when neither a stored preference nor the locale decides.
    pub is_canonical: bool,
}

/// Global language registry singleton.
///
/// Initialized once on first access and immutable thereafter.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its code.
    ///
    /// Codes are matched exactly; callers normalize case beforehand.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get all languages, in switcher order.
    pub fn list(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// Get the canonical language configuration.
    ///
    /// # Panics
    /// Panics if no canonical language is found or if multiple canonical
    /// languages are defined (this indicates a configuration error).
    pub fn canonical(&self) -> &LanguageConfig {
        let canonical_langs: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_canonical)
            .collect();

        match canonical_langs.len() {
            0 => panic!("No canonical language found in registry"),
            1 => canonical_langs[0],
            _ => panic!("Multiple canonical languages found in registry"),
        }
    }
}

/// The three languages the site ships with. English is canonical.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            flag: "🇬🇧",
            direction: TextDirection::Ltr,
            is_canonical: true,
        },
        LanguageConfig {
            code: "hi",
            name: "Hindi",
            native_name: "हिन्दी",
            flag: "🇮🇳",
            direction: TextDirection::Ltr,
            is_canonical: false,
        },
        LanguageConfig {
            code: "es",
            name: "Spanish",
            native_name: "Español",
            flag: "🇪🇸",
            direction: TextDirection::Ltr,
            is_canonical: false,
        },
    ]
}
