//! Game wiring
//!
//! [`Game`] owns the word source, the score history and the one live
//! session. Presentation layers drive it with two actions: submit a guess and
//! start a new session.

mod error;
mod session;

pub use error::{GameError, ValidationError};
pub use session::{GameSession, MAX_TRIES, SessionStatus, Turn};

use crate::core::{EvaluationMode, GuessRow, Word};
use crate::source::WordSource;
use crate::stats::{ScoreStore, StatsStore, StatsSummary, StoreError};

/// Outcome of an accepted guess
#[derive(Debug)]
pub struct GuessReport {
    pub row: GuessRow,
    pub status: SessionStatus,
    /// Updated stats, present when this guess won the game
    pub summary: Option<StatsSummary>,
    /// Set when the win could not be saved; play continues regardless
    pub stats_warning: Option<StoreError>,
}

pub struct Game<W, S> {
    source: W,
    stats: StatsStore<S>,
    session: GameSession,
    mode: EvaluationMode,
}

impl<W: WordSource, S: ScoreStore> Game<W, S> {
    /// Choose an answer and open the first session
    pub async fn start(source: W, stats: StatsStore<S>, mode: EvaluationMode) -> Self {
        let answer = source.choose_answer().await;
        Self {
            source,
            stats,
            session: GameSession::with_mode(answer, mode),
            mode,
        }
    }

    /// Replace the live session with a fresh one
    pub async fn new_session(&mut self) {
        let answer = self.source.choose_answer().await;
        self.session = GameSession::with_mode(answer, self.mode);
        tracing::info!("New session started");
    }

    /// Validate and evaluate one guess
    ///
    /// Input is trimmed and lowercased. Rejected input leaves the session
    /// untouched and does not consume a turn.
    ///
    /// # Errors
    /// - `GameError::SessionTerminated` if the session is already over
    /// - `GameError::Validation` if the input is not a 5-letter word or the
    ///   word source does not recognize it
    pub async fn submit_guess(&mut self, input: &str) -> Result<GuessReport, GameError> {
        if self.session.status().is_terminal() {
            return Err(GameError::SessionTerminated);
        }

        let guess = Word::new(input.trim())?;
        if !self.source.is_valid_word(&guess).await {
            return Err(ValidationError::UnknownWord(guess.text().to_string()).into());
        }

        let Turn { row, status } = self.session.submit(guess)?;

        let (summary, stats_warning) = match status {
            SessionStatus::Won { guesses_used } => {
                tracing::info!(guesses_used, "Session won");
                match self.stats.record_win(guesses_used as u32) {
                    Ok(summary) => (Some(summary), None),
                    Err(err) => {
                        tracing::warn!("Could not save score history: {err}");
                        (Some(self.stats.summary()), Some(err))
                    }
                }
            }
            SessionStatus::Lost => {
                tracing::info!("Session lost");
                (None, None)
            }
            SessionStatus::InProgress => (None, None),
        };

        Ok(GuessReport {
            row,
            status,
            summary,
            stats_warning,
        })
    }
}

impl<W, S> Game<W, S> {
    #[must_use]
    pub const fn session(&self) -> &GameSession {
        &self.session
    }

    #[must_use]
    pub const fn stats(&self) -> &StatsStore<S> {
        &self.stats
    }

    #[must_use]
    pub const fn source(&self) -> &W {
        &self.source
    }

    #[must_use]
    pub const fn mode(&self) -> EvaluationMode {
        self.mode
    }
}
