//! Configuration file support
//!
//! Optional TOML at `<config_dir>/wordle_game/config.toml`:
//!
//! ```toml
//! offline = false
//! duplicate_aware = false
//! stats_file = "/home/me/.local/share/wordle_game/wordleScores.json"
//! dictionary_file = "/usr/share/dict/words"
//!
//! [remote]
//! random_word_url = "https://random-word-api.herokuapp.com/word?length=5"
//! dictionary_url = "https://api.dictionaryapi.dev/api/v2/entries/en"
//! timeout = 5
//! ```

use crate::core::EvaluationMode;
use crate::source::{LocalWords, RemoteConfig, RemoteWords, SourceError, SourceKind};
use crate::stats::JsonFileStore;
use crate::wordlists::loader::load_from_file;
use serde::Deserialize;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read dictionary {path}: {source}")]
    Dictionary { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Source(#[from] SourceError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Never contact the word services
    pub offline: bool,
    /// Score repeated letters with standard Wordle counting
    pub duplicate_aware: bool,
    pub stats_file: Option<PathBuf>,
    /// Newline-separated word list used to validate guesses offline
    pub dictionary_file: Option<PathBuf>,
    pub remote: RemoteConfig,
}

impl GameConfig {
    /// Load from `path`, or from the default location when `None`
    ///
    /// A missing file yields the defaults. An unreadable or invalid file is
    /// logged and also yields the defaults.
    #[must_use]
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path.map(Path::to_path_buf).or_else(config_path) else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Self::default();
            }
        };

        match Self::from_toml(&content) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Self::default()
            }
        }
    }

    /// Parse a TOML document
    ///
    /// # Errors
    /// Returns an error if the document is not valid TOML for this schema.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    #[must_use]
    pub const fn evaluation_mode(&self) -> EvaluationMode {
        if self.duplicate_aware {
            EvaluationMode::DuplicateAware
        } else {
            EvaluationMode::Membership
        }
    }

    #[must_use]
    pub fn stats_store(&self) -> JsonFileStore {
        self.stats_file
            .clone()
            .map_or_else(JsonFileStore::default_location, JsonFileStore::new)
    }

    /// Build the configured word source
    ///
    /// # Errors
    /// Returns an error if the dictionary file cannot be read or the HTTP
    /// client cannot be created.
    pub fn word_source(&self) -> Result<SourceKind, ConfigError> {
        let mut local = LocalWords::new();
        if let Some(path) = &self.dictionary_file {
            let words = load_from_file(path).map_err(|source| ConfigError::Dictionary {
                path: path.clone(),
                source,
            })?;
            tracing::debug!(count = words.len(), "Loaded dictionary from {:?}", path);
            local = local.with_dictionary(words);
        }

        if self.offline {
            Ok(SourceKind::Offline(local))
        } else {
            Ok(SourceKind::Online(RemoteWords::new(self.remote.clone(), local)?))
        }
    }
}

/// Default config file location
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("wordle_game").join("config.toml"))
}
