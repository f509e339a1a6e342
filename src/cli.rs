//! Command line of the `site-i18n` binary.
//!
//! Arguments are parsed fully before any configuration or preference file is
//! touched, so a usage error leaves durable state alone.

use crate::i18n::Language;
use anyhow::{bail, Context, Result};

pub const USAGE: &str = "Usage: site-i18n <t <key> [fallback] | set <code> | current | languages>";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Translate a key in the current language
    Translate { key: String, fallback: Option<String> },

    /// Switch language (persisted)
    Set(Language),

    /// Show the current language and document metadata
    Current,

    /// List supported languages
    Languages,
}

impl Command {
    /// Parse the arguments that follow the program name.
    pub fn parse(args: &[String]) -> Result<Self> {
        let args: Vec<&str> = args.iter().map(String::as_str).collect();

        let command = match args.as_slice() {
            ["t", key] => Command::Translate {
                key: key.to_string(),
                fallback: None,
            },
            ["t", key, fallback] => Command::Translate {
                key: key.to_string(),
                fallback: Some(fallback.to_string()),
            },
            ["set", code] => Command::Set(
                Language::from_code(code).with_context(|| format!("Cannot switch to '{}'", code))?,
            ),
            ["current"] => Command::Current,
            ["languages"] => Command::Languages,
            _ => bail!(USAGE),
        };

        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Command> {
        let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
        Command::parse(&args)
    }

    #[test]
    fn test_parse_translate() {
        assert_eq!(
            parse(&["t", "nav.home"]).unwrap(),
            Command::Translate {
                key: "nav.home".to_string(),
                fallback: None
            }
        );
        assert_eq!(
            parse(&["t", "nav.missing", "Default"]).unwrap(),
            Command::Translate {
                key: "nav.missing".to_string(),
                fallback: Some("Default".to_string())
            }
        );
    }

    #[test]
    fn test_parse_set_validates_code() {
        assert_eq!(parse(&["set", "hi"]).unwrap(), Command::Set(Language::HINDI));

        let err = parse(&["set", "fr"]).unwrap_err();
        assert!(format!("{:#}", err).contains("Cannot switch to 'fr'"));
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(parse(&["current"]).unwrap(), Command::Current);
        assert_eq!(parse(&["languages"]).unwrap(), Command::Languages);
    }

    #[test]
    fn test_parse_rejects_bad_command_lines() {
        let cases: [&[&str]; 5] = [&[], &["bogus"], &["t"], &["set"], &["current", "extra"]];
        for args in cases {
            let err = parse(args).unwrap_err();
            assert_eq!(err.to_string(), USAGE, "{:?}", args);
        }
    }
}
