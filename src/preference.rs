//! Durable preference storage.
//!
//! The site keeps a single preference, the active language code, under the
//! `language` key. `FilePreferenceStore` persists it as a small JSON document
//! so a later session picks it up; `MemoryPreferenceStore` keeps it for the
//! lifetime of the process only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

/// Key holding the active language code.
pub const LANGUAGE_KEY: &str = "language";

#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("failed to access preference file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("preference file {path} is not valid JSON")]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// String key-value store that outlives a session.
pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

/// In-process store, mostly for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    values: HashMap<String, String>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with one entry.
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_string(), value.to_string());
        store
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// On-disk layout of the preference file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct PreferenceFile {
    #[serde(default)]
    values: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    saved_at: Option<DateTime<Utc>>,
}

/// JSON file store.
///
/// Every `get` re-reads the file; every `set` rewrites it through a temporary
/// sibling file and a rename, so readers never see a half-written document.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Timestamp of the last successful `set`, if the file exists.
    pub fn saved_at(&self) -> Result<Option<DateTime<Utc>>, PreferenceError> {
        Ok(self.read()?.saved_at)
    }

    fn read(&self) -> Result<PreferenceFile, PreferenceError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(PreferenceFile::default())
            }
            Err(source) => {
                return Err(PreferenceError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        serde_json::from_str(&contents).map_err(|source| PreferenceError::Format {
            path: self.path.clone(),
            source,
        })
    }

    fn write(&self, file: &PreferenceFile) -> Result<(), PreferenceError> {
        let io_err = |source: std::io::Error| PreferenceError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }

        let json = serde_json::to_string_pretty(file).map_err(|source| PreferenceError::Format {
            path: self.path.clone(),
            source,
        })?;

        let tmp_path = self.path.with_extension("json.tmp");
        std::fs::write(&tmp_path, json).map_err(io_err)?;
        std::fs::rename(&tmp_path, &self.path).map_err(io_err)?;
        Ok(())
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.read()?.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        // Corrupt files are overwritten; unreadable ones are left alone
        let mut file = match self.read() {
            Ok(file) => file,
            Err(PreferenceError::Format { .. }) => PreferenceFile::default(),
            Err(e) => return Err(e),
        };
        file.values.insert(key.to_string(), value.to_string());
        file.saved_at = Some(Utc::now());
        self.write(&file)?;
        debug!("Saved preference {}={} to {}", key, value, self.path.display());
        Ok(())
    }
}
