use crate::i18n::Language;
use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    // Language used when neither a stored preference nor the locale decides
    pub default_language: Language,

    // Runtime locale override (otherwise the OS locale is used)
    pub locale_override: Option<String>,

    // Durable preference store
    pub preference_file: PathBuf,

    // Directory of <code>.json dictionaries (bundled ones when unset)
    pub translations_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let default_code =
            non_empty_var("SITE_DEFAULT_LANGUAGE").unwrap_or_else(|| "en".to_string());

        Ok(Self {
            default_language: Language::from_code(&default_code)
                .with_context(|| format!("SITE_DEFAULT_LANGUAGE '{}' is not supported", default_code))?,

            locale_override: non_empty_var("SITE_LOCALE"),

            preference_file: non_empty_var("LANGUAGE_PREFERENCE_FILE")
                .unwrap_or_else(|| "data/preferences.json".to_string())
                .into(),

            translations_dir: non_empty_var("TRANSLATIONS_DIR").map(PathBuf::from),
        })
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
