//! Validate translation dictionaries against the canonical (English) one.
//!
//! Usage:
//!   cargo run --bin check-translations
//!
//! Checks the bundled dictionaries, or the ones in TRANSLATIONS_DIR when set.
//! Prints a JSON report per language and exits non-zero on structural errors.

use anyhow::{bail, Context, Result};
use site_i18n::config::Config;
use site_i18n::i18n::{TranslationCatalog, TranslationValidator};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("check_translations=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    let catalog = match &config.translations_dir {
        Some(dir) => {
            info!("Checking dictionaries in {}", dir.display());
            TranslationCatalog::from_dir(dir)?
        }
        None => {
            info!("Checking bundled dictionaries");
            TranslationCatalog::embedded()?
        }
    };

    let reports = TranslationValidator::validate_catalog(&catalog);
    println!(
        "{}",
        serde_json::to_string_pretty(&reports).context("Failed to serialize report")?
    );

    let mut failed = Vec::new();
    for (code, report) in &reports {
        if report.has_errors() {
            failed.push(*code);
        } else if report.has_warnings() {
            warn!("{}: {} warnings", code, report.warnings.len());
        } else {
            info!("✓ {} matches the canonical dictionary", code);
        }
    }

    if !failed.is_empty() {
        bail!("Structural errors in: {}", failed.join(", "));
    }

    Ok(())
}
