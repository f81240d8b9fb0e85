//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one per line
///
/// Returns a vector of valid Word instances, skipping blank lines and any
/// entry that is not a 5-letter word.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let words = load_from_file("/usr/share/dict/words").unwrap();
/// println!("Loaded {} five-letter words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(&content))
}

/// Parse newline-separated text into words
#[must_use]
pub fn words_from_lines(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::words_from_slice;
/// use wordle_game::wordlists::FALLBACK;
///
/// let words = words_from_slice(FALLBACK);
/// assert_eq!(words.len(), FALLBACK.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["pride", "grace", "smile"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "pride");
        assert_eq!(words[1].text(), "grace");
        assert_eq!(words[2].text(), "smile");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["pride", "toolong", "abc", "grace"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "pride");
        assert_eq!(words[1].text(), "grace");
    }

    #[test]
    fn words_from_lines_trims_and_normalizes() {
        let words = words_from_lines("  Pride \n\n GRACE\nit's\napple\n");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["pride", "grace", "apple"]);
    }

    #[test]
    fn load_from_file_reads_dictionary() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "crane\nslate\nzebras").unwrap();

        let words = load_from_file(file.path()).unwrap();
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn load_from_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_from_file(dir.path().join("missing.txt")).is_err());
    }

    #[test]
    fn load_from_embedded_fallback() {
        use crate::wordlists::FALLBACK;

        let words = words_from_slice(FALLBACK);
        assert_eq!(words.len(), FALLBACK.len());
    }
}
