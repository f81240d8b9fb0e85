//! Offline word source backed by the embedded fallback list

use super::WordSource;
use crate::core::Word;
use crate::wordlists::FALLBACK;
use crate::wordlists::loader::words_from_slice;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;

const _: () = assert!(!FALLBACK.is_empty(), "fallback word list must not be empty");

/// Answers drawn uniformly from the fallback list
///
/// Guesses are checked against an optional dictionary. Without one, any
/// well-formed word is accepted.
#[derive(Debug, Clone)]
pub struct LocalWords {
    answers: Vec<Word>,
    dictionary: Option<FxHashSet<String>>,
}

impl Default for LocalWords {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalWords {
    #[must_use]
    pub fn new() -> Self {
        Self {
            answers: words_from_slice(FALLBACK),
            dictionary: None,
        }
    }

    /// Restrict valid guesses to `words` plus the fallback answers
    #[must_use]
    pub fn with_dictionary(mut self, words: impl IntoIterator<Item = Word>) -> Self {
        let mut dictionary: FxHashSet<String> =
            words.into_iter().map(|w| w.text().to_string()).collect();
        dictionary.extend(self.answers.iter().map(|w| w.text().to_string()));
        self.dictionary = Some(dictionary);
        self
    }

    /// Draw one answer uniformly at random
    ///
    /// # Panics
    /// Never in practice: the fallback list is checked non-empty at compile time.
    #[must_use]
    pub fn choose(&self) -> Word {
        self.answers
            .choose(&mut rand::rng())
            .cloned()
            .expect("fallback list is non-empty")
    }

    /// Check a guess against the dictionary, if one is loaded
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.dictionary
            .as_ref()
            .is_none_or(|dictionary| dictionary.contains(word.text()))
    }

    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }
}

impl WordSource for LocalWords {
    async fn choose_answer(&self) -> Word {
        let answer = self.choose();
        tracing::info!("Answer chosen from local word list");
        answer
    }

    async fn is_valid_word(&self, word: &Word) -> bool {
        self.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn choose_draws_from_fallback() {
        let source = LocalWords::new();
        for _ in 0..50 {
            let answer = source.choose();
            assert!(FALLBACK.contains(&answer.text()));
        }
    }

    #[test]
    fn choose_eventually_varies() {
        let source = LocalWords::new();
        let first = source.choose();
        assert!((0..200).any(|_| source.choose() != first));
    }

    #[test]
    fn without_dictionary_any_word_is_valid() {
        let source = LocalWords::new();
        assert!(source.contains(&word("zzzzz")));
    }

    #[test]
    fn dictionary_restricts_guesses() {
        let source = LocalWords::new().with_dictionary([word("crane"), word("slate")]);
        assert!(source.contains(&word("crane")));
        assert!(source.contains(&word("pride")));
        assert!(!source.contains(&word("zzzzz")));
    }

    #[tokio::test]
    async fn word_source_impl_uses_local_list() {
        let source = LocalWords::new().with_dictionary([word("crane")]);
        let answer = source.choose_answer().await;

        assert!(source.answers().contains(&answer));
        assert!(source.is_valid_word(&answer).await);
        assert!(!source.is_valid_word(&word("qqqqq")).await);
    }
}
