//! Runtime locale signal.
//!
//! The locale is read once at start-up, from the `SITE_LOCALE` override when
//! configured and from the operating system otherwise, and is only used to
//! pick an initial language when no preference has been stored.

use crate::i18n::Language;

/// Primary language subtag of a locale tag, lower-cased.
///
/// Accepts BCP 47 (`hi-IN`) as well as POSIX forms (`es_ES.UTF-8`,
/// `en_US@euro`). Returns `None` for an empty tag.
pub fn primary_subtag(tag: &str) -> Option<String> {
    let primary = tag
        .trim()
        .split(['-', '_', '.', '@'])
        .next()
        .unwrap_or_default();

    if primary.is_empty() {
        None
    } else {
        Some(primary.to_ascii_lowercase())
    }
}

/// Supported language whose code equals the tag's primary subtag.
pub fn match_supported(tag: &str) -> Option<Language> {
    primary_subtag(tag).and_then(|code| Language::from_code(&code).ok())
}

/// The locale string to use as the runtime signal.
///
/// A non-empty `override_tag` wins; otherwise the OS locale is queried.
pub fn runtime_locale(override_tag: Option<&str>) -> Option<String> {
    match override_tag.map(str::trim) {
        Some(tag) if !tag.is_empty() => Some(tag.to_string()),
        _ => sys_locale::get_locale(),
    }
}
