//! Translation catalog: one dictionary per supported language.
//!
//! The catalog is built once at start-up, either from the dictionaries bundled
//! into the binary or from a directory of `<code>.json` files, and is never
//! mutated afterwards.

use crate::i18n::dictionary::{Dictionary, DictionaryError};
use crate::i18n::strings::embedded_source;
use crate::i18n::Language;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors produced while building a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read translation file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid translation file {name}")]
    Invalid {
        name: String,
        #[source]
        source: DictionaryError,
    },

    #[error("no dictionary for language '{0}'")]
    MissingLanguage(&'static str),
}

/// Immutable set of dictionaries, keyed by language.
#[derive(Debug, Clone)]
pub struct TranslationCatalog {
    dictionaries: HashMap<Language, Arc<Dictionary>>,
}

impl TranslationCatalog {
    /// Build a catalog from `(language, dictionary)` pairs.
    ///
    /// Every supported language must be present.
    pub fn from_dictionaries<I>(dictionaries: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (Language, Dictionary)>,
    {
        let dictionaries: HashMap<_, _> = dictionaries
            .into_iter()
            .map(|(language, dictionary)| (language, Arc::new(dictionary)))
            .collect();

        if let Some(missing) = Language::all()
            .into_iter()
            .find(|language| !dictionaries.contains_key(language))
        {
            return Err(CatalogError::MissingLanguage(missing.code()));
        }

        Ok(Self { dictionaries })
    }

    /// Parse the dictionaries bundled with the crate.
    pub fn embedded() -> Result<Self, CatalogError> {
        let mut dictionaries = Vec::new();

        for language in Language::all() {
            let source =
                embedded_source(language).ok_or(CatalogError::MissingLanguage(language.code()))?;
            let dictionary =
                Dictionary::from_json_str(source).map_err(|source| CatalogError::Invalid {
                    name: format!("{}.json (embedded)", language.code()),
                    source,
                })?;
            debug!(
                "Loaded embedded dictionary for {} ({} sections)",
                language,
                dictionary.len()
            );
            dictionaries.push((language, dictionary));
        }

        Self::from_dictionaries(dictionaries)
    }

    /// Read `<code>.json` for every supported language from `dir`.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let dir = dir.as_ref();
        let mut dictionaries = Vec::new();

        for language in Language::all() {
            let path = dir.join(format!("{}.json", language.code()));
            let source = std::fs::read_to_string(&path).map_err(|source| CatalogError::Read {
                path: path.clone(),
                source,
            })?;
            let dictionary =
                Dictionary::from_json_str(&source).map_err(|source| CatalogError::Invalid {
                    name: path.display().to_string(),
                    source,
                })?;
            dictionaries.push((language, dictionary));
        }

        info!("Loaded {} dictionaries from {}", dictionaries.len(), dir.display());
        Self::from_dictionaries(dictionaries)
    }

    /// Dictionary for `language`.
    ///
    /// Construction guarantees every supported language is present; an empty
    /// dictionary is returned otherwise, so lookups degrade to raw keys.
    pub fn dictionary(&self, language: Language) -> Arc<Dictionary> {
        self.dictionaries
            .get(&language)
            .cloned()
            .unwrap_or_default()
    }

    /// Languages present in the catalog, in switcher order.
    pub fn languages(&self) -> Vec<Language> {
        Language::all()
            .into_iter()
            .filter(|language| self.dictionaries.contains_key(language))
            .collect()
    }
}
