//! Language context: the single owner of the current language.
//!
//! Every consumer gets translations and the active language through an
//! `I18nContext` that is passed to it (or observed via [`I18nContext::subscribe`]).
//! `set_language` is the only way to change the language; it swaps the active
//! dictionary wholesale, persists the choice and rewrites the document
//! metadata.

use crate::config::Config;
use crate::document::DocumentMetadata;
use crate::i18n::{
    interpolate, resolve_detailed, Dictionary, Language, TranslationCatalog, TranslationMetrics,
};
use crate::locale::{match_supported, runtime_locale};
use crate::preference::{FilePreferenceStore, PreferenceStore, LANGUAGE_KEY};
use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Where the initial language came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageSource {
    /// A valid code was found in the preference store
    Stored,

    /// The runtime locale's primary subtag matched a supported language
    Locale,

    /// Neither of the above; the configured default was used
    Default,
}

/// Decide the initial language.
///
/// Order: stored preference (if present and supported), then the runtime
/// locale's primary subtag, then `default_language`. Unreadable stores count
/// as "no preference".
pub fn initial_language(
    store: &dyn PreferenceStore,
    locale_signal: Option<&str>,
    default_language: Language,
) -> (Language, LanguageSource) {
    match store.get(LANGUAGE_KEY) {
        Ok(Some(code)) => match Language::from_code(&code) {
            Ok(language) => return (language, LanguageSource::Stored),
            Err(e) => debug!("Ignoring stored language: {}", e),
        },
        Ok(None) => {}
        Err(e) => warn!("Failed to read language preference: {:#}", anyhow::Error::from(e)),
    }

    if let Some(language) = locale_signal.and_then(match_supported) {
        return (language, LanguageSource::Locale);
    }

    (default_language, LanguageSource::Default)
}

/// Injectable state container for the active language.
pub struct I18nContext {
    catalog: Arc<TranslationCatalog>,
    language: Language,
    active: Arc<Dictionary>,
    store: Box<dyn PreferenceStore>,
    document: DocumentMetadata,
    changes: watch::Sender<Language>,
}

impl I18nContext {
    /// Create the context and enter its initial state.
    ///
    /// The initial language is written back to the store and the document
    /// metadata, as on every later transition.
    pub fn initialize(
        catalog: Arc<TranslationCatalog>,
        store: Box<dyn PreferenceStore>,
        locale_signal: Option<&str>,
        default_language: Language,
    ) -> Self {
        let (language, source) = initial_language(&*store, locale_signal, default_language);
        info!("Initial language: {} ({:?})", language, source);

        let (changes, _) = watch::channel(language);
        let mut context = Self {
            active: catalog.dictionary(language),
            catalog,
            language,
            store,
            document: DocumentMetadata::for_language(language),
            changes,
        };
        context.persist();
        context
    }

    /// Build a context from configuration: catalog from `TRANSLATIONS_DIR` or
    /// the bundled dictionaries, file-backed preferences, OS/override locale.
    pub fn from_config(config: &Config) -> Result<Self> {
        let catalog = match &config.translations_dir {
            Some(dir) => TranslationCatalog::from_dir(dir)
                .with_context(|| format!("Failed to load translations from {}", dir.display()))?,
            None => TranslationCatalog::embedded().context("Failed to load bundled translations")?,
        };

        let store = FilePreferenceStore::new(&config.preference_file);
        let locale = runtime_locale(config.locale_override.as_deref());
        debug!("Runtime locale signal: {:?}", locale);

        Ok(Self::initialize(
            Arc::new(catalog),
            Box::new(store),
            locale.as_deref(),
            config.default_language,
        ))
    }

    /// Current language.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Languages offered by the switcher.
    pub fn languages(&self) -> Vec<Language> {
        self.catalog.languages()
    }

    pub fn document(&self) -> &DocumentMetadata {
        &self.document
    }

    /// Dictionary of the current language.
    pub fn dictionary(&self) -> &Dictionary {
        &self.active
    }

    /// Receiver that observes every language transition.
    pub fn subscribe(&self) -> watch::Receiver<Language> {
        self.changes.subscribe()
    }

    /// Move to `language`.
    ///
    /// Selecting the current language is a no-op. Otherwise the active
    /// dictionary is swapped, the choice is persisted and the document
    /// metadata is updated. A failed store write is logged and does not undo
    /// the transition.
    pub fn set_language(&mut self, language: Language) {
        if language == self.language {
            debug!("Language already {}", language);
            return;
        }

        info!("Switching language {} -> {}", self.language, language);
        self.language = language;
        self.active = self.catalog.dictionary(language);
        self.persist();
        self.changes.send_replace(language);
        TranslationMetrics::global().record_language_switch();
    }

    /// Translate `key`, falling back to the key itself.
    pub fn t(&self, key: &str) -> String {
        self.translate(key, None)
    }

    /// Translate `key`, falling back to `default` when it is non-empty.
    pub fn t_or(&self, key: &str, default: &str) -> String {
        self.translate(key, Some(default))
    }

    /// Translate `key` and substitute `{name}` placeholders.
    pub fn t_with(&self, key: &str, params: &[(&str, &str)]) -> String {
        interpolate(&self.t(key), params)
    }

    fn translate(&self, key: &str, fallback: Option<&str>) -> String {
        let resolution = resolve_detailed(&self.active, key, fallback);
        if !resolution.is_found() {
            debug!("Untranslated key '{}' for {}", key, self.language);
        }
        TranslationMetrics::global().record_resolution(&resolution);
        resolution.as_str().to_string()
    }

    fn persist(&mut self) {
        if let Err(e) = self.store.set(LANGUAGE_KEY, self.language.code()) {
            warn!(
                "Failed to persist language {}: {:#}",
                self.language,
                anyhow::Error::from(e)
            );
        }
        self.document.apply(self.language);
    }
}
