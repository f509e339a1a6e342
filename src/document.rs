//! Document-level language metadata.
//!
//! The rendering environment reads two attributes from the root document:
//! the active language code and the text direction. Both are rewritten on
//! every language change and never read back by this crate.

use crate::i18n::Language;
use serde::Serialize;
use std::fmt;

/// Writing direction of a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl TextDirection {
    /// Attribute value (`"ltr"` or `"rtl"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }
}

impl fmt::Display for TextDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `lang` and `dir` attributes of the root document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentMetadata {
    lang: &'static str,
    dir: TextDirection,
}

impl DocumentMetadata {
    /// Metadata describing `language`.
    pub fn for_language(language: Language) -> Self {
        Self {
            lang: language.code(),
            dir: language.direction(),
        }
    }

    /// Overwrite both attributes for `language`.
    pub fn apply(&mut self, language: Language) {
        self.lang = language.code();
        self.dir = language.direction();
    }

    pub fn lang(&self) -> &'static str {
        self.lang
    }

    pub fn dir(&self) -> TextDirection {
        self.dir
    }
}
