//! Score a single guess against a known answer

use crate::core::{EvaluationMode, GuessRow, Word};

/// Evaluate `guess` against `answer` without starting a session
///
/// # Errors
///
/// Returns an error if either word is not a valid 5-letter word.
pub fn check_guess(answer: &str, guess: &str, mode: EvaluationMode) -> Result<GuessRow, String> {
    let answer = Word::new(answer).map_err(|e| format!("Invalid answer: {e}"))?;
    let guess = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;
    Ok(mode.evaluate(&answer, &guess))
}
