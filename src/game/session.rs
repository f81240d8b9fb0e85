//! Single-session game state machine
//!
//! `InProgress` moves to `Won` on an exact match or to `Lost` once every try
//! is used. Neither terminal state can be left.

use super::error::GameError;
use crate::core::{EvaluationMode, GuessRow, LetterBoard, Word};
use std::fmt;

/// Number of guesses allowed per session
pub const MAX_TRIES: usize = 6;

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    InProgress,
    Won { guesses_used: usize },
    Lost,
}

impl SessionStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress => write!(f, "in progress"),
            Self::Won { guesses_used: 1 } => write!(f, "won in 1 guess"),
            Self::Won { guesses_used } => write!(f, "won in {guesses_used} guesses"),
            Self::Lost => write!(f, "lost"),
        }
    }
}

/// Result of one accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub row: GuessRow,
    pub status: SessionStatus,
}

/// One play-through from answer selection to Won/Lost
#[derive(Debug, Clone)]
pub struct GameSession {
    answer: Word,
    mode: EvaluationMode,
    rows: Vec<GuessRow>,
    letters: LetterBoard,
    current_row: usize,
    max_tries: usize,
    status: SessionStatus,
}

impl GameSession {
    /// Start a session for `answer` with the default scoring rules
    #[must_use]
    pub fn new(answer: Word) -> Self {
        Self::with_mode(answer, EvaluationMode::default())
    }

    #[must_use]
    pub fn with_mode(answer: Word, mode: EvaluationMode) -> Self {
        Self {
            answer,
            mode,
            rows: Vec::with_capacity(MAX_TRIES),
            letters: LetterBoard::new(),
            current_row: 0,
            max_tries: MAX_TRIES,
            status: SessionStatus::InProgress,
        }
    }

    /// Evaluate a well-formed guess and advance the session
    ///
    /// # Errors
    /// Returns `GameError::SessionTerminated` if the session is already won or
    /// lost. Nothing is evaluated in that case.
    pub fn submit(&mut self, guess: Word) -> Result<Turn, GameError> {
        if self.status.is_terminal() {
            return Err(GameError::SessionTerminated);
        }

        let row = self.mode.evaluate(&self.answer, &guess);
        self.letters.record(&row);
        self.rows.push(row.clone());

        if guess == self.answer {
            self.status = SessionStatus::Won {
                guesses_used: self.current_row + 1,
            };
        } else {
            self.current_row += 1;
            if self.current_row == self.max_tries {
                self.status = SessionStatus::Lost;
            }
        }

        Ok(Turn {
            row,
            status: self.status,
        })
    }

    /// The answer, disclosed only once the session is over
    #[must_use]
    pub fn revealed_answer(&self) -> Option<&Word> {
        self.status.is_terminal().then_some(&self.answer)
    }

    #[must_use]
    pub const fn status(&self) -> SessionStatus {
        self.status
    }

    /// 0-based index of the row the next guess will fill
    #[must_use]
    pub const fn current_row(&self) -> usize {
        self.current_row
    }

    #[must_use]
    pub const fn max_tries(&self) -> usize {
        self.max_tries
    }

    #[must_use]
    pub const fn remaining_tries(&self) -> usize {
        self.max_tries - self.current_row
    }

    #[must_use]
    pub fn rows(&self) -> &[GuessRow] {
        &self.rows
    }

    #[must_use]
    pub const fn letters(&self) -> &LetterBoard {
        &self.letters
    }

    #[must_use]
    pub const fn mode(&self) -> EvaluationMode {
        self.mode
    }
}
