//! Translation metrics and observability module.
//!
//! Counts how lookups made through the language context were answered, and
//! how often the active language changed.

use crate::i18n::resolver::Resolution;
use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Global translation metrics singleton.
pub struct TranslationMetrics {
    /// Lookups answered from the active dictionary
    resolved: AtomicUsize,

    /// Lookups answered with the caller's fallback text
    fallbacks: AtomicUsize,

    /// Lookups answered with the raw key path
    raw_keys: AtomicUsize,

    /// Transitions of the current language
    language_switches: AtomicUsize,
}

static METRICS: OnceLock<TranslationMetrics> = OnceLock::new();

impl TranslationMetrics {
    /// Get the global translation metrics instance.
    pub fn global() -> &'static TranslationMetrics {
        METRICS.get_or_init(|| TranslationMetrics {
            resolved: AtomicUsize::new(0),
            fallbacks: AtomicUsize::new(0),
            raw_keys: AtomicUsize::new(0),
            language_switches: AtomicUsize::new(0),
        })
    }

    /// Record the outcome of one lookup.
    pub fn record_resolution(&self, resolution: &Resolution<'_>) {
        let counter = match resolution {
            Resolution::Found(_) => &self.resolved,
            Resolution::Fallback(_) => &self.fallbacks,
            Resolution::RawKey(_) => &self.raw_keys,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_language_switch(&self) {
        self.language_switches.fetch_add(1, Ordering::Relaxed);
    }

    pub fn resolved(&self) -> usize {
        self.resolved.load(Ordering::Relaxed)
    }

    pub fn fallbacks(&self) -> usize {
        self.fallbacks.load(Ordering::Relaxed)
    }

    pub fn raw_keys(&self) -> usize {
        self.raw_keys.load(Ordering::Relaxed)
    }

    pub fn language_switches(&self) -> usize {
        self.language_switches.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let resolved = self.resolved();
        let fallbacks = self.fallbacks();
        let raw_keys = self.raw_keys();
        let lookups = resolved + fallbacks + raw_keys;
        let resolution_rate = if lookups > 0 {
            (resolved as f64 / lookups as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            lookups,
            resolved,
            fallbacks,
            raw_keys,
            resolution_rate,
            language_switches: self.language_switches(),
        }
    }

    /// Reset all metrics to zero (useful for testing).
    #[cfg(test)]
    pub fn reset(&self) {
        self.resolved.store(0, Ordering::Relaxed);
        self.fallbacks.store(0, Ordering::Relaxed);
        self.raw_keys.store(0, Ordering::Relaxed);
        self.language_switches.store(0, Ordering::Relaxed);
    }
}

/// Metrics report containing current translation statistics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    /// Total lookups recorded
    pub lookups: usize,

    pub resolved: usize,

    pub fallbacks: usize,

    pub raw_keys: usize,

    /// Share of lookups answered from a dictionary, as a percentage (0-100)
    pub resolution_rate: f64,

    pub language_switches: usize,
}
