//! Core domain types for the game
//!
//! Words, guess evaluation and used-letter tracking. Everything here is pure
//! and synchronous.

mod feedback;
mod letters;
mod word;

pub use feedback::{EvaluationMode, GuessRow, LetterResult, evaluate, evaluate_duplicate_aware};
pub use letters::LetterBoard;
pub use word::{WORD_LENGTH, Word, WordError};
