//! Online word source with unconditional local fallback
//!
//! Answers come from a random-word service and must be confirmed by a
//! dictionary service. Any failure along the way falls back to the local
//! list, so callers always receive a usable answer.

use super::WordSource;
use super::local::LocalWords;
use crate::core::{Word, WordError};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Default random-word endpoint, returns a JSON array like `["pride"]`
pub const DEFAULT_RANDOM_WORD_URL: &str = "https://random-word-api.herokuapp.com/word?length=5";

/// Default dictionary endpoint, the word is appended as a path segment
pub const DEFAULT_DICTIONARY_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

/// Endpoints and request timeout for [`RemoteWords`]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    pub random_word_url: String,
    pub dictionary_url: String,
    #[serde(with = "timeout_secs")]
    pub timeout: Duration,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            random_word_url: DEFAULT_RANDOM_WORD_URL.to_string(),
            dictionary_url: DEFAULT_DICTIONARY_URL.to_string(),
            timeout: Duration::from_secs(5),
        }
    }
}

mod timeout_secs {
    use serde::{Deserialize, Deserializer};
    use std::time::Duration;

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_secs)
    }
}

/// Why the primary answer pipeline gave up
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("word service request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("word service returned no words")]
    EmptyResponse,

    #[error("word service returned '{word}': {source}")]
    Malformed { word: String, source: WordError },

    #[error("'{0}' is not in the dictionary")]
    NotInDictionary(String),
}

/// Word source backed by the random-word and dictionary services
#[derive(Debug, Clone)]
pub struct RemoteWords {
    client: reqwest::Client,
    config: RemoteConfig,
    fallback: LocalWords,
}

impl RemoteWords {
    /// Build a source with its own HTTP client
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: RemoteConfig, fallback: LocalWords) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            client,
            config,
            fallback,
        })
    }

    /// Fetch a candidate answer and confirm it with the dictionary
    ///
    /// # Errors
    /// Returns the first failure of the pipeline.
    pub async fn fetch_answer(&self) -> Result<Word, SourceError> {
        let words: Vec<String> = self
            .client
            .get(&self.config.random_word_url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let candidate = words
            .into_iter()
            .next()
            .ok_or(SourceError::EmptyResponse)?
            .to_lowercase();
        tracing::debug!(%candidate, "Random word service returned candidate");

        let word = Word::new(candidate.as_str()).map_err(|source| SourceError::Malformed {
            word: candidate.clone(),
            source,
        })?;

        if self.lookup(&word).await? {
            Ok(word)
        } else {
            Err(SourceError::NotInDictionary(candidate))
        }
    }

    /// Ask the dictionary service whether `word` exists
    ///
    /// A success status means the word is known, any other status means it
    /// is not.
    ///
    /// # Errors
    /// Returns an error only when the request itself fails.
    pub async fn lookup(&self, word: &Word) -> Result<bool, SourceError> {
        let url = format!(
            "{}/{}",
            self.config.dictionary_url.trim_end_matches('/'),
            word.text()
        );
        let response = self.client.get(url).send().await?;
        tracing::debug!(word = %word, status = %response.status(), "Dictionary lookup");
        Ok(response.status().is_success())
    }
}

impl WordSource for RemoteWords {
    async fn choose_answer(&self) -> Word {
        match self.fetch_answer().await {
            Ok(word) => {
                tracing::info!("Answer chosen from word service");
                word
            }
            Err(err) => {
                tracing::warn!("Word service unavailable, using local fallback: {err}");
                self.fallback.choose()
            }
        }
    }

    async fn is_valid_word(&self, word: &Word) -> bool {
        match self.lookup(word).await {
            Ok(known) => known,
            Err(err) => {
                tracing::warn!("Dictionary unavailable, checking '{word}' locally: {err}");
                self.fallback.contains(word)
            }
        }
    }
}
