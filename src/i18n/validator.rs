//! Translation dictionary validation.
//!
//! Compares a translated dictionary against the canonical one and reports
//! keys that are missing or unexpected, keys whose shape differs (text in one
//! dictionary, a section in the other), and leaves whose `{placeholder}`
//! names do not match.

use crate::i18n::catalog::TranslationCatalog;
use crate::i18n::dictionary::{join_path, Dictionary, TranslationValue};
use crate::i18n::resolver::placeholders;
use crate::i18n::Language;
use serde::Serialize;
use std::collections::BTreeMap;

/// Validation report containing errors and warnings about a translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Structural problems that make keys unusable in one language
    pub errors: Vec<String>,

    /// Gaps and mismatches that degrade to fallbacks at runtime
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for translation dictionaries.
pub struct TranslationValidator;

impl TranslationValidator {
    /// Validate `candidate` against the `canonical` dictionary.
    pub fn validate(canonical: &Dictionary, candidate: &Dictionary) -> ValidationReport {
        let mut report = ValidationReport::new();
        Self::compare_nodes("", canonical.root(), candidate.root(), &mut report);
        report
    }

    /// Validate every non-canonical dictionary in `catalog`.
    ///
    /// Returns one report per language code.
    pub fn validate_catalog(catalog: &TranslationCatalog) -> BTreeMap<&'static str, ValidationReport> {
        let canonical = catalog.dictionary(Language::canonical());

        catalog
            .languages()
            .into_iter()
            .filter(|language| !language.is_canonical())
            .map(|language| {
                let report = Self::validate(&canonical, &catalog.dictionary(language));
                (language.code(), report)
            })
            .collect()
    }

    fn compare_nodes(
        prefix: &str,
        canonical: &BTreeMap<String, TranslationValue>,
        candidate: &BTreeMap<String, TranslationValue>,
        report: &mut ValidationReport,
    ) {
        for (segment, expected) in canonical {
            let path = join_path(prefix, segment);
            match candidate.get(segment) {
                None => {
                    for (leaf, _) in expected.leaves(&path) {
                        report.warnings.push(format!("Missing key: {}", leaf));
                    }
                }
                Some(actual) => Self::compare_values(&path, expected, actual, report),
            }
        }

        for (segment, actual) in candidate {
            if !canonical.contains_key(segment) {
                let path = join_path(prefix, segment);
                for (leaf, _) in actual.leaves(&path) {
                    report.warnings.push(format!("Unexpected key: {}", leaf));
                }
            }
        }
    }

    fn compare_values(
        path: &str,
        expected: &TranslationValue,
        actual: &TranslationValue,
        report: &mut ValidationReport,
    ) {
        match (expected, actual) {
            (TranslationValue::Node(expected), TranslationValue::Node(actual)) => {
                Self::compare_nodes(path, expected, actual, report);
            }
            (TranslationValue::Leaf(expected), TranslationValue::Leaf(actual)) => {
                if actual.trim().is_empty() {
                    report.warnings.push(format!("Empty translation: {}", path));
                }

                let expected_names = placeholders(expected);
                let actual_names = placeholders(actual);
                if expected_names != actual_names {
                    report.warnings.push(format!(
                        "Placeholder mismatch at '{}': canonical has {:?}, translation has {:?}",
                        path, expected_names, actual_names
                    ));
                }
            }
            (TranslationValue::Leaf(_), TranslationValue::Node(_)) => {
                report.errors.push(format!(
                    "Shape mismatch at '{}': canonical has text, translation has a section",
                    path
                ));
            }
            (TranslationValue::Node(_), TranslationValue::Leaf(_)) => {
                report.errors.push(format!(
                    "Shape mismatch at '{}': canonical has a section, translation has text",
                    path
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict(json: &str) -> Dictionary {
        Dictionary::from_json_str(json).expect("Test dictionary should parse")
    }

    // ==================== Validation Tests ====================

    #[test]
    fn test_validate_identical_shape_is_clean() {
        let canonical = dict(r#"{"nav": {"home": "Home", "blog": "Blog"}}"#);
        let candidate = dict(r#"{"nav": {"home": "Inicio", "blog": "Blog"}}"#);

        assert!(TranslationValidator::validate(&canonical, &candidate).is_clean());
    }

    #[test]
    fn test_validate_missing_leaf() {
        let canonical = dict(r#"{"nav": {"home": "Home", "blog": "Blog"}}"#);
        let candidate = dict(r#"{"nav": {"home": "Inicio"}}"#);

        let report = TranslationValidator::validate(&canonical, &candidate);
        assert_eq!(report.warnings, vec!["Missing key: nav.blog".to_string()]);
        assert!(!report.has_errors());
    }

    #[test]
    fn test_validate_missing_section_lists_every_leaf() {
        let canonical = dict(r#"{"footer": {"privacy": "Privacy", "terms": "Terms"}}"#);
        let candidate = dict("{}");

        let report = TranslationValidator::validate(&canonical, &candidate);
        assert_eq!(
            report.warnings,
            vec![
                "Missing key: footer.privacy".to_string(),
                "Missing key: footer.terms".to_string(),
            ]
        );
    }

    #[test]
    fn test_validate_unexpected_key() {
        let canonical = dict(r#"{"nav": {"home": "Home"}}"#);
        let candidate = dict(r#"{"nav": {"home": "Inicio", "extra": "Extra"}}"#);

        let report = TranslationValidator::validate(&canonical, &candidate);
        assert_eq!(report.warnings, vec!["Unexpected key: nav.extra".to_string()]);
    }

    #[test]
    fn test_validate_unexpected_section_lists_every_leaf() {
        let canonical = dict(r#"{"nav": {"home": "Home"}}"#);
        let candidate = dict(r#"{"nav": {"home": "Inicio"}, "promo": {"banner": {"title": "Oferta", "cta": "Ver"}}}"#);

        let report = TranslationValidator::validate(&canonical, &candidate);
        assert_eq!(
            report.warnings,
            vec![
                "Unexpected key: promo.banner.cta".to_string(),
                "Unexpected key: promo.banner.title".to_string(),
            ]
        );
    }

    #[test]
    fn test_validate_shape_mismatch_is_error() {
        let canonical = dict(r#"{"nav": {"home": "Home"}}"#);
        let candidate = dict(r#"{"nav": "Navegación"}"#);

        let report = TranslationValidator::validate(&canonical, &candidate);
        assert!(report.has_errors());
        assert!(report.errors[0].contains("Shape mismatch at 'nav'"));
    }

    #[test]
    fn test_validate_leaf_replaced_by_section_is_error() {
        let canonical = dict(r#"{"title": "Title"}"#);
        let candidate = dict(r#"{"title": {"main": "Título"}}"#);

        let report = TranslationValidator::validate(&canonical, &candidate);
        assert!(report.errors[0].contains("canonical has text"));
    }

    #[test]
    fn test_validate_placeholder_mismatch() {
        let canonical = dict(r#"{"footer": {"copyright": "© {year} {company}"}}"#);
        let candidate = dict(r#"{"footer": {"copyright": "© {año} {company}"}}"#);

        let report = TranslationValidator::validate(&canonical, &candidate);
        assert!(report.has_warnings());
        assert!(report.warnings[0].contains("Placeholder mismatch at 'footer.copyright'"));
    }

    #[test]
    fn test_validate_placeholder_order_does_not_matter() {
        let canonical = dict(r#"{"x": "{a} then {b}"}"#);
        let candidate = dict(r#"{"x": "{b} antes de {a}"}"#);

        assert!(TranslationValidator::validate(&canonical, &candidate).is_clean());
    }

    #[test]
    fn test_validate_empty_translation() {
        let canonical = dict(r#"{"nav": {"home": "Home"}}"#);
        let candidate = dict(r#"{"nav": {"home": "  "}}"#);

        let report = TranslationValidator::validate(&canonical, &candidate);
        assert_eq!(report.warnings, vec!["Empty translation: nav.home".to_string()]);
    }

    #[test]
    fn test_validate_bundled_catalog_is_clean() {
        let catalog = TranslationCatalog::embedded().unwrap();
        let reports = TranslationValidator::validate_catalog(&catalog);

        assert_eq!(reports.keys().copied().collect::<Vec<_>>(), vec!["es", "hi"]);
        for (code, report) in reports {
            assert!(report.is_clean(), "{} report: {:?}", code, report);
        }
    }

    // ==================== Report Tests ====================

    #[test]
    fn test_validation_report_new() {
        let report = ValidationReport::new();
        assert!(report.is_clean());
        assert!(!report.has_errors());
        assert!(!report.has_warnings());
    }

    #[test]
    fn test_validation_report_with_error() {
        let mut report = ValidationReport::new();
        report.errors.push("Test error".to_string());

        assert!(!report.is_clean());
        assert!(report.has_errors());
        assert!(!report.has_warnings());
    }

    #[test]
    fn test_validation_report_serializes() {
        let mut report = ValidationReport::new();
        report.warnings.push("Missing key: nav.home".to_string());

        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(json, r#"{"errors":[],"warnings":["Missing key: nav.home"]}"#);
    }
}
