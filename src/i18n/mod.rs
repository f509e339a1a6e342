//! Internationalization (i18n) module for multi-language support.
//!
//! All language-related logic lives here: the registry of supported
//! languages, the dictionary type, key-path resolution, the per-language
//! catalog and the tooling around it.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported languages and their metadata
//! - `language`: Validated `Language` type
//! - `dictionary`: Recursive leaf/node translation tree
//! - `resolver`: Key-path lookup with fallback, plus `{placeholder}` interpolation
//! - `catalog`: One immutable dictionary per language
//! - `strings`: Dictionaries bundled with the crate
//! - `validator`: Structural comparison against the canonical dictionary
//! - `metrics`: Lookup and language-switch counters
//!
//! # Example
//!
//! ```
//! use site_i18n::i18n::{resolve, Language, TranslationCatalog};
//!
//! let catalog = TranslationCatalog::embedded().unwrap();
//! let spanish = Language::from_code("es").unwrap();
//! assert_eq!(resolve(&catalog.dictionary(spanish), "nav.home", None), "Inicio");
//! ```

mod catalog;
mod dictionary;
mod language;
mod metrics;
mod registry;
mod resolver;
mod strings;
mod validator;

pub use catalog::{CatalogError, TranslationCatalog};
pub use dictionary::{Dictionary, DictionaryError, TranslationValue};
pub use language::Language;
pub use metrics::{MetricsReport, TranslationMetrics};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use resolver::{interpolate, lookup, resolve, resolve_detailed, Resolution};
pub use strings::embedded_source;
pub use validator::{TranslationValidator, ValidationReport};
