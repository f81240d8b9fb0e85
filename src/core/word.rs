//! Word representation
//!
//! A Word stores a validated 5-letter word along with its letter counts for
//! membership tests and duplicate-aware scoring.

use rustc_hash::FxHashMap;
use std::fmt;

/// Number of letters in every answer and guess
pub const WORD_LENGTH: usize = 5;

/// A 5-letter lowercase word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LENGTH],
    letter_counts: FxHashMap<u8, u8>,
}

/// Error type for malformed words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Please enter a 5-letter word (got {len} characters)")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word must contain only letters a-z"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// The input is lowercased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    ///
    /// let word = Word::new("Pride").unwrap();
    /// assert_eq!(word.text(), "pride");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        let len = text.chars().count();
        if len != WORD_LENGTH {
            return Err(WordError::InvalidLength(len));
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let chars: [u8; WORD_LENGTH] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength(text.len()))?;

        let mut letter_counts: FxHashMap<u8, u8> = FxHashMap::default();
        for &ch in &chars {
            *letter_counts.entry(ch).or_insert(0) += 1;
        }

        Ok(Self {
            text,
            chars,
            letter_counts,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Get the character at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Check if the word contains a specific letter anywhere
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.letter_counts.contains_key(&letter)
    }

    /// Get the count of each letter in the word
    ///
    /// Used for scoring with duplicate letters.
    #[inline]
    pub(crate) fn char_counts(&self) -> FxHashMap<u8, u8> {
        self.letter_counts.clone()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("pride").unwrap();
        assert_eq!(word.text(), "pride");
        assert_eq!(word.chars(), b"pride");
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("PRIDE").unwrap();
        assert_eq!(word.text(), "pride");

        let word2 = Word::new("PrIdE").unwrap();
        assert_eq!(word2.text(), "pride");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(
            Word::new("too long"),
            Err(WordError::InvalidLength(8))
        ));
        assert!(matches!(
            Word::new("shrt"),
            Err(WordError::InvalidLength(4))
        ));
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
    }

    #[test]
    fn word_length_counts_characters_not_bytes() {
        assert_eq!(Word::new("crème"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(Word::new("pri3e").is_err());
        assert!(Word::new("prid ").is_err());
        assert!(Word::new("prid!").is_err());
    }

    #[test]
    fn word_char_at() {
        let word = Word::new("grace").unwrap();
        assert_eq!(word.char_at(0), b'g');
        assert_eq!(word.char_at(2), b'a');
        assert_eq!(word.char_at(4), b'e');
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("pride").unwrap();
        assert!(word.has_letter(b'p'));
        assert!(word.has_letter(b'e'));
        assert!(!word.has_letter(b'z'));
        assert!(!word.has_letter(b'g'));
    }

    #[test]
    fn word_char_counts() {
        let word = Word::new("jelly").unwrap();
        let counts = word.char_counts();
        assert_eq!(counts.get(&b'j'), Some(&1));
        assert_eq!(counts.get(&b'l'), Some(&2));
        assert_eq!(counts.len(), 4);
    }

    #[test]
    fn word_display() {
        let word = Word::new("grace").unwrap();
        assert_eq!(format!("{word}"), "grace");
    }

    #[test]
    fn word_equality() {
        let word1 = Word::new("pride").unwrap();
        let word2 = Word::new("PRIDE").unwrap();
        let word3 = Word::new("grace").unwrap();

        assert_eq!(word1, word2);
        assert_ne!(word1, word3);
    }
}
