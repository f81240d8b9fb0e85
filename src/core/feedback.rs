//! Guess evaluation and per-letter feedback
//!
//! Each guessed letter is classified as:
//! - Absent (letter not in the answer)
//! - Present (letter in the answer, wrong position)
//! - Correct (letter in the correct position)
//!
//! The default [`EvaluationMode::Membership`] marks a letter Present whenever it
//! occurs anywhere in the answer, without counting occurrences. A guess that
//! repeats a letter the answer contains once can therefore show it more than
//! once. [`EvaluationMode::DuplicateAware`] applies the standard Wordle
//! counting rules instead.

use super::word::{WORD_LENGTH, Word};
use std::fmt;

/// Classification of one guessed letter
///
/// Ordered by how much it reveals: `Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterResult {
    Absent,
    Present,
    Correct,
}

impl LetterResult {
    /// Emoji square for this result
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Which scoring rules to apply to a guess
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EvaluationMode {
    /// Position match, then plain membership test against the answer
    #[default]
    Membership,
    /// Standard Wordle rules: each answer letter accounts for at most one mark
    DuplicateAware,
}

impl EvaluationMode {
    /// Score `guess` against `answer` using this mode
    #[must_use]
    pub fn evaluate(self, answer: &Word, guess: &Word) -> GuessRow {
        match self {
            Self::Membership => evaluate(answer, guess),
            Self::DuplicateAware => evaluate_duplicate_aware(answer, guess),
        }
    }
}

/// One evaluated guess: the word and its 5 letter classifications
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRow {
    word: Word,
    results: [LetterResult; WORD_LENGTH],
}

impl GuessRow {
    /// The guessed word
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    /// Per-position classifications
    #[must_use]
    pub const fn results(&self) -> &[LetterResult; WORD_LENGTH] {
        &self.results
    }

    /// Iterate over `(letter, result)` pairs in position order
    pub fn letters(&self) -> impl Iterator<Item = (char, LetterResult)> + '_ {
        self.word
            .chars()
            .iter()
            .zip(self.results)
            .map(|(&b, result)| (char::from(b), result))
    }

    /// Check if every position is Correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.results.iter().all(|&r| r == LetterResult::Correct)
    }

    /// Convert the row to an emoji string like "⬜🟩⬜⬜🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.results.iter().map(|r| r.emoji()).collect()
    }
}

impl fmt::Display for GuessRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.word.text().to_uppercase(), self.to_emoji())
    }
}

/// Score `guess` against `answer` with the membership rule
///
/// Position `i` is Correct if `guess[i] == answer[i]`, otherwise Present if
/// the answer contains `guess[i]` anywhere, otherwise Absent.
///
/// # Examples
/// ```
/// use wordle_game::core::{LetterResult::*, Word, evaluate};
///
/// let answer = Word::new("pride").unwrap();
/// let guess = Word::new("grace").unwrap();
///
/// let row = evaluate(&answer, &guess);
/// assert_eq!(row.results(), &[Absent, Correct, Absent, Absent, Correct]);
/// ```
#[must_use]
pub fn evaluate(answer: &Word, guess: &Word) -> GuessRow {
    let mut results = [LetterResult::Absent; WORD_LENGTH];

    for (i, result) in results.iter_mut().enumerate() {
        let letter = guess.char_at(i);
        *result = if letter == answer.char_at(i) {
            LetterResult::Correct
        } else if answer.has_letter(letter) {
            LetterResult::Present
        } else {
            LetterResult::Absent
        };
    }

    GuessRow {
        word: guess.clone(),
        results,
    }
}

/// Score `guess` against `answer` with duplicate-aware rules
///
/// # Algorithm
/// 1. First pass: Mark all exact matches and remove them from the available pool
/// 2. Second pass: Mark present-but-wrong-position letters from the remaining pool
#[must_use]
pub fn evaluate_duplicate_aware(answer: &Word, guess: &Word) -> GuessRow {
    let mut results = [LetterResult::Absent; WORD_LENGTH];
    let mut answer_available = answer.char_counts();

    for (i, result) in results.iter_mut().enumerate() {
        let letter = guess.char_at(i);
        if letter == answer.char_at(i) {
            *result = LetterResult::Correct;
            if let Some(count) = answer_available.get_mut(&letter) {
                *count = count.saturating_sub(1);
            }
        }
    }

    for (i, result) in results.iter_mut().enumerate() {
        if *result == LetterResult::Correct {
            continue;
        }
        let letter = guess.char_at(i);
        if let Some(count) = answer_available.get_mut(&letter)
            && *count > 0
        {
            *result = LetterResult::Present;
            *count -= 1;
        }
    }

    GuessRow {
        word: guess.clone(),
        results,
    }
}

#[cfg(test)]
mod tests {
    use super::LetterResult::{Absent, Correct, Present};
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn exact_match_is_all_correct() {
        let row = evaluate(&word("pride"), &word("pride"));
        assert_eq!(row.results(), &[Correct; 5]);
        assert!(row.is_solved());
    }

    #[test]
    fn grace_against_pride() {
        let row = evaluate(&word("pride"), &word("grace"));
        assert_eq!(row.results(), &[Absent, Correct, Absent, Absent, Correct]);
        assert!(!row.is_solved());
    }

    #[test]
    fn spice_against_pride_mixes_all_three() {
        let row = evaluate(&word("pride"), &word("spice"));
        assert_eq!(row.results(), &[Absent, Present, Correct, Absent, Correct]);
    }

    #[test]
    fn no_shared_letters_is_all_absent() {
        let row = evaluate(&word("pride"), &word("bulky"));
        assert_eq!(row.results(), &[Absent; 5]);
    }

    #[test]
    fn membership_does_not_count_occurrences() {
        // "apple" has a single 'e'; both guessed e's are marked
        let row = evaluate(&word("apple"), &word("eerie"));
        assert_eq!(row.results(), &[Present, Present, Absent, Absent, Correct]);

        // "light" has one 'l'; every extra 'l' still shows Present
        let row = evaluate(&word("light"), &word("lolly"));
        assert_eq!(row.results(), &[Correct, Absent, Present, Present, Absent]);
    }

    #[test]
    fn membership_property_holds_for_fallback_pairs() {
        let words = crate::wordlists::loader::words_from_slice(crate::wordlists::FALLBACK);
        for answer in &words {
            for guess in &words {
                let row = evaluate(answer, guess);
                for (i, &result) in row.results().iter().enumerate() {
                    let g = guess.char_at(i);
                    let expected = if g == answer.char_at(i) {
                        Correct
                    } else if answer.chars().contains(&g) {
                        Present
                    } else {
                        Absent
                    };
                    assert_eq!(result, expected, "{guess} vs {answer} at {i}");
                }
            }
        }
    }

    #[test]
    fn duplicate_aware_speed_vs_erase() {
        let row = evaluate_duplicate_aware(&word("erase"), &word("speed"));
        assert_eq!(row.results(), &[Present, Absent, Present, Present, Absent]);
    }

    #[test]
    fn duplicate_aware_robot_vs_floor() {
        let row = evaluate_duplicate_aware(&word("floor"), &word("robot"));
        assert_eq!(row.results(), &[Present, Present, Absent, Correct, Absent]);
    }

    #[test]
    fn duplicate_aware_suppresses_extra_marks() {
        let row = evaluate_duplicate_aware(&word("apple"), &word("eerie"));
        assert_eq!(row.results(), &[Absent, Absent, Absent, Absent, Correct]);

        let row = evaluate_duplicate_aware(&word("light"), &word("lolly"));
        assert_eq!(row.results(), &[Correct, Absent, Absent, Absent, Absent]);
    }

    #[test]
    fn modes_agree_without_repeated_letters() {
        let answer = word("pride");
        let guess = word("grace");
        assert_eq!(
            EvaluationMode::Membership.evaluate(&answer, &guess),
            EvaluationMode::DuplicateAware.evaluate(&answer, &guess)
        );
    }

    #[test]
    fn default_mode_is_membership() {
        assert_eq!(EvaluationMode::default(), EvaluationMode::Membership);
    }

    #[test]
    fn row_display_and_emoji() {
        let row = evaluate(&word("pride"), &word("grace"));
        assert_eq!(row.to_emoji(), "⬜🟩⬜⬜🟩");
        assert_eq!(row.to_string(), "GRACE ⬜🟩⬜⬜🟩");
    }

    #[test]
    fn row_letters_pairs_positions() {
        let row = evaluate(&word("pride"), &word("grace"));
        let letters: Vec<(char, LetterResult)> = row.letters().collect();
        assert_eq!(letters[0], ('g', Absent));
        assert_eq!(letters[1], ('r', Correct));
        assert_eq!(letters[2], ('a', Absent));
    }

    #[test]
    fn letter_result_ordering() {
        assert!(Absent < Present);
        assert!(Present < Correct);
    }
}
