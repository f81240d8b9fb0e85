//! Word lists for the game
//!
//! The fallback answer list is compiled into the binary; dictionaries for
//! offline validation can be loaded from disk.

mod embedded;
pub mod loader;

pub use embedded::{FALLBACK, FALLBACK_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_count_matches_const() {
        assert_eq!(FALLBACK.len(), FALLBACK_COUNT);
    }

    #[test]
    fn fallback_words_are_valid() {
        for &word in FALLBACK {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn fallback_has_no_duplicates() {
        let unique: std::collections::HashSet<_> = FALLBACK.iter().collect();
        assert_eq!(unique.len(), FALLBACK.len());
    }

    #[test]
    fn expected_count() {
        assert_eq!(FALLBACK_COUNT, 30, "Expected 30 fallback words");
        assert!(FALLBACK.contains(&"pride"));
        assert!(FALLBACK.contains(&"smile"));
    }
}
