//! Score history and its summary

use serde::{Deserialize, Serialize};
use std::fmt;

/// Guesses used in each won game, oldest first
///
/// Serialized as a bare JSON array, e.g. `[3,5,4]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreHistory(Vec<u32>);

impl ScoreHistory {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, guesses_used: u32) {
        self.0.push(guesses_used);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn scores(&self) -> &[u32] {
        &self.0
    }

    /// Arithmetic mean of all recorded scores, `None` when nothing is recorded
    #[must_use]
    pub fn average(&self) -> Option<f64> {
        if self.0.is_empty() {
            return None;
        }
        let total: u64 = self.0.iter().map(|&s| u64::from(s)).sum();
        Some(total as f64 / self.0.len() as f64)
    }

    #[must_use]
    pub fn summary(&self) -> StatsSummary {
        StatsSummary {
            average: self.average(),
            games: self.len(),
        }
    }
}

impl From<Vec<u32>> for ScoreHistory {
    fn from(scores: Vec<u32>) -> Self {
        Self(scores)
    }
}

/// Average guesses per win and how many wins it covers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatsSummary {
    pub average: Option<f64>,
    pub games: usize,
}

impl fmt::Display for StatsSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.average {
            Some(avg) => write!(
                f,
                "Average guesses: {avg:.2} (across {} {})",
                self.games,
                if self.games == 1 { "game" } else { "games" }
            ),
            None => write!(f, "No games played yet."),
        }
    }
}
