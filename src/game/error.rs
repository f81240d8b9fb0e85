//! Errors returned when submitting a guess

use crate::core::WordError;
use thiserror::Error;

/// A guess was rejected before it reached the board
///
/// The turn is not consumed and the session is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error(transparent)]
    Malformed(#[from] WordError),

    #[error("'{0}' is not a valid word, try again")]
    UnknownWord(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A guess was submitted after the session was won or lost
    #[error("the game is over, start a new session to keep playing")]
    SessionTerminated,
}

impl From<WordError> for GameError {
    fn from(err: WordError) -> Self {
        Self::Validation(ValidationError::Malformed(err))
    }
}
