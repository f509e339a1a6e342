//! Translation lookup and language selection for the corporate site.
//!
//! - [`i18n`]: supported languages, dictionaries, key-path resolution
//! - [`context`]: the injectable state container holding the current language
//! - [`preference`]: durable storage for the chosen language
//! - [`locale`]: runtime locale signal used for the initial language
//! - [`document`]: `lang`/`dir` metadata updated on every language change
//! - [`config`]: environment configuration
//! - [`cli`]: command line of the `site-i18n` binary

pub mod cli;
pub mod config;
pub mod context;
pub mod document;
pub mod i18n;
pub mod locale;
pub mod preference;

pub use context::{I18nContext, LanguageSource};
pub use i18n::{resolve, Dictionary, Language, TranslationCatalog};
