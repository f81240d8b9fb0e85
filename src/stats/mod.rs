//! Score history across sessions
//!
//! Every win is appended and persisted before the running average is
//! computed, so a displayed average always covers a saved value.

mod history;
mod store;

pub use history::{ScoreHistory, StatsSummary};
pub use store::{JsonFileStore, SCORES_FILE_NAME, ScoreStore, StoreError, default_path};

/// In-memory score history backed by a [`ScoreStore`]
#[derive(Debug)]
pub struct StatsStore<S> {
    store: S,
    history: ScoreHistory,
    load_warning: Option<StoreError>,
}

impl<S: ScoreStore> StatsStore<S> {
    /// Load the stored history
    ///
    /// An unreadable or corrupt record starts an empty history; the next win
    /// overwrites it. The load error is kept in
    /// [`load_warning`](Self::load_warning) for the player to see.
    pub fn open(store: S) -> Self {
        let (history, load_warning) = match store.load() {
            Ok(history) => (history, None),
            Err(err) => {
                tracing::warn!("Starting with empty score history: {err}");
                (ScoreHistory::new(), Some(err))
            }
        };
        Self {
            store,
            history,
            load_warning,
        }
    }

    /// Append a win and persist the whole history immediately
    ///
    /// # Errors
    /// Returns the persistence error if saving fails. The score is still kept
    /// in memory and included in [`summary`](Self::summary).
    pub fn record_win(&mut self, guesses_used: u32) -> Result<StatsSummary, StoreError> {
        self.history.push(guesses_used);
        self.store.save(&self.history)?;
        Ok(self.history.summary())
    }

    /// Re-read the persisted history, replacing what is held in memory
    ///
    /// # Errors
    /// Returns an error if the record cannot be read or parsed.
    pub fn reload(&mut self) -> Result<(), StoreError> {
        self.history = self.store.load()?;
        self.load_warning = None;
        Ok(())
    }
}

impl<S> StatsStore<S> {
    #[must_use]
    pub fn average(&self) -> Option<f64> {
        self.history.average()
    }

    #[must_use]
    pub fn summary(&self) -> StatsSummary {
        self.history.summary()
    }

    #[must_use]
    pub const fn history(&self) -> &ScoreHistory {
        &self.history
    }

    /// Why the stored history could not be read at open, if it couldn't
    #[must_use]
    pub const fn load_warning(&self) -> Option<&StoreError> {
        self.load_warning.as_ref()
    }
}


#[cfg(test)]
mod tests {
    use super::testing::MemoryStore;
    use super::*;

    #[test]
    fn record_win_persists_before_summary() {
        let mut stats = StatsStore::open(MemoryStore::default());
        let summary = stats.record_win(3).unwrap();

        assert_eq!(summary.games, 1);
        assert_eq!(summary.average, Some(3.0));
        assert_eq!(
            stats.store.saved.borrow().as_ref().map(ScoreHistory::scores),
            Some(&[3][..])
        );
    }

    #[test]
    fn average_reflects_all_wins() {
        let mut stats = StatsStore::open(MemoryStore::default());
        assert_eq!(stats.average(), None);

        stats.record_win(3).unwrap();
        stats.record_win(5).unwrap();

        assert_eq!(stats.average(), Some(4.0));
        assert_eq!(stats.summary().to_string(), "Average guesses: 4.00 (across 2 games)");
    }

    #[test]
    fn open_starts_from_stored_history() {
        let store = MemoryStore {
            initial: ScoreHistory::from(vec![2, 4]),
            ..MemoryStore::default()
        };
        let mut stats = StatsStore::open(store);
        stats.record_win(6).unwrap();

        assert_eq!(stats.history().scores(), &[2, 4, 6]);
    }

    #[test]
    fn failed_save_keeps_score_in_memory() {
        let mut stats = StatsStore::open(MemoryStore::failing());

        let err = stats.record_win(4).unwrap_err();
        assert!(matches!(err, StoreError::Io(_)));
        assert_eq!(stats.history().scores(), &[4]);
        assert_eq!(stats.average(), Some(4.0));
    }

    #[test]
    fn corrupt_file_opens_empty_and_is_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SCORES_FILE_NAME);
        std::fs::write(&path, "oops").unwrap();

        let mut stats = StatsStore::open(JsonFileStore::new(&path));
        assert!(stats.history().is_empty());
        assert!(matches!(stats.load_warning(), Some(StoreError::Json(_))));

        stats.record_win(5).unwrap();
        assert_eq!(JsonFileStore::new(&path).load().unwrap().scores(), &[5]);
    }

    #[test]
    fn reload_picks_up_external_writes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SCORES_FILE_NAME);
        let mut stats = StatsStore::open(JsonFileStore::new(&path));

        JsonFileStore::new(&path)
            .save(&ScoreHistory::from(vec![1, 1]))
            .unwrap();
        stats.reload().unwrap();

        assert_eq!(stats.average(), Some(1.0));
        assert!(stats.load_warning().is_none());
    }

    #[test]
    fn clean_open_has_no_warning() {
        let stats = StatsStore::open(MemoryStore::default());
        assert!(stats.load_warning().is_none());
    }
}
