//! Score history report

use crate::game::MAX_TRIES;
use crate::stats::{ScoreStore, StatsStore, StatsSummary};
use std::collections::BTreeMap;

/// Summary plus how many wins took each number of guesses
pub struct StatsReport {
    pub summary: StatsSummary,
    pub distribution: BTreeMap<u32, usize>,
}

/// Build a report from the stored history
#[must_use]
pub fn stats_report<S: ScoreStore>(stats: &StatsStore<S>) -> StatsReport {
    let mut distribution: BTreeMap<u32, usize> =
        (1..=MAX_TRIES as u32).map(|guesses| (guesses, 0)).collect();
    for &score in stats.history().scores() {
        *distribution.entry(score).or_insert(0) += 1;
    }

    StatsReport {
        summary: stats.summary(),
        distribution,
    }
}
