//! Used-letter tracking across a session

use super::feedback::{GuessRow, LetterResult};

/// Best-known classification of each letter a-z
///
/// A letter only ever moves up: once seen Correct it stays Correct even if a
/// later guess places it elsewhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterBoard {
    letters: [Option<LetterResult>; 26],
}

impl LetterBoard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold an evaluated row into the board
    pub fn record(&mut self, row: &GuessRow) {
        for (letter, result) in row.letters() {
            if let Some(slot) = Self::index(letter).and_then(|i| self.letters.get_mut(i)) {
                *slot = (*slot).max(Some(result));
            }
        }
    }

    /// Status of a letter, or `None` if it has not been guessed yet
    #[must_use]
    pub fn status(&self, letter: char) -> Option<LetterResult> {
        Self::index(letter).and_then(|i| self.letters[i])
    }

    /// Guessed letters in alphabetical order with their status
    pub fn used(&self) -> impl Iterator<Item = (char, LetterResult)> + '_ {
        ('a'..='z')
            .zip(self.letters.iter())
            .filter_map(|(letter, status)| status.map(|s| (letter, s)))
    }

    fn index(letter: char) -> Option<usize> {
        letter
            .is_ascii_lowercase()
            .then(|| (letter as u8 - b'a') as usize)
    }
}
