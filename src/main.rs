//! Command-line front end for the site's translations.
//!
//! Usage:
//!   site-i18n t <key> [fallback]   # Translate a key in the current language
//!   site-i18n set <code>           # Switch language (persisted)
//!   site-i18n current              # Show the current language and document metadata
//!   site-i18n languages            # List supported languages
//!
//! Optional environment variables:
//! - SITE_DEFAULT_LANGUAGE (defaults to en)
//! - SITE_LOCALE (defaults to the OS locale)
//! - LANGUAGE_PREFERENCE_FILE (defaults to data/preferences.json)
//! - TRANSLATIONS_DIR (defaults to the bundled dictionaries)

use anyhow::Result;
use site_i18n::cli::Command;
use site_i18n::config::Config;
use site_i18n::I18nContext;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so stdout carries only the result
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("site_i18n=info".parse()?),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = Command::parse(&args)?;

    let config = Config::from_env()?;
    let mut context = I18nContext::from_config(&config)?;

    match command {
        Command::Translate { key, fallback: None } => println!("{}", context.t(&key)),
        Command::Translate {
            key,
            fallback: Some(fallback),
        } => println!("{}", context.t_or(&key, &fallback)),
        Command::Set(language) => {
            context.set_language(language);
            println!(
                "{}",
                context.t_with("language.changed", &[("language", language.native_name())])
            );
        }
        Command::Current => {
            let language = context.language();
            let document = context.document();
            println!(
                "{} {} (lang={}, dir={})",
                language.flag(),
                language.native_name(),
                document.lang(),
                document.dir()
            );
        }
        Command::Languages => {
            for language in context.languages() {
                let marker = if language == context.language() { "*" } else { " " };
                println!(
                    "{} {} {} {} ({})",
                    marker,
                    language.flag(),
                    language.code().to_uppercase(),
                    language.native_name(),
                    language.name()
                );
            }
        }
    }

    Ok(())
}
