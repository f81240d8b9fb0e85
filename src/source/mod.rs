//! Word sources
//!
//! A word source picks each session's answer and decides whether a guess is
//! a recognized word. Both calls may suspend on network I/O but never fail:
//! implementations recover internally.

mod local;
mod remote;

pub use local::LocalWords;
pub use remote::{
    DEFAULT_DICTIONARY_URL, DEFAULT_RANDOM_WORD_URL, RemoteConfig, RemoteWords, SourceError,
};

use crate::core::Word;

/// Supplier of answers and guess validation
pub trait WordSource {
    /// Pick the answer for a new session
    fn choose_answer(&self) -> impl Future<Output = Word>;

    /// Check whether a well-formed guess is a recognized word
    fn is_valid_word(&self, word: &Word) -> impl Future<Output = bool>;
}

/// Enum wrapper for the available sources
///
/// Allows runtime selection of source while maintaining static dispatch.
#[derive(Debug, Clone)]
pub enum SourceKind {
    /// Embedded list only, no network access
    Offline(LocalWords),
    /// Word services with local fallback
    Online(RemoteWords),
}

impl SourceKind {
    #[must_use]
    pub const fn is_online(&self) -> bool {
        matches!(self, Self::Online(_))
    }
}

impl WordSource for SourceKind {
    async fn choose_answer(&self) -> Word {
        match self {
            Self::Offline(s) => s.choose_answer().await,
            Self::Online(s) => s.choose_answer().await,
        }
    }

    async fn is_valid_word(&self, word: &Word) -> bool {
        match self {
            Self::Offline(s) => s.is_valid_word(word).await,
            Self::Online(s) => s.is_valid_word(word).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::FALLBACK;

    #[tokio::test]
    async fn offline_kind_delegates_to_local_words() {
        let source = SourceKind::Offline(LocalWords::new());
        assert!(!source.is_online());

        let answer = source.choose_answer().await;
        assert!(FALLBACK.contains(&answer.text()));
        assert!(source.is_valid_word(&answer).await);
    }
}
