//! Persistence for score history

use super::history::ScoreHistory;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

/// Name of the persisted score record
pub const SCORES_FILE_NAME: &str = "wordleScores.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("score history I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("score history is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Durable storage for the whole score history
pub trait ScoreStore {
    /// Read the stored history; an absent record is an empty history
    ///
    /// # Errors
    /// Returns an error if the record exists but cannot be read or parsed.
    fn load(&self) -> Result<ScoreHistory, StoreError>;

    /// Replace the stored history wholesale
    ///
    /// # Errors
    /// Returns an error if the record cannot be written.
    fn save(&self, history: &ScoreHistory) -> Result<(), StoreError>;
}

/// Score history kept in a single JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `<data_dir>/wordle_game/wordleScores.json`
    #[must_use]
    pub fn default_location() -> Self {
        Self::new(default_path())
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for JsonFileStore {
    fn load(&self) -> Result<ScoreHistory, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Ok(ScoreHistory::new());
            }
            Err(err) => return Err(err.into()),
        };

        if content.trim().is_empty() {
            return Ok(ScoreHistory::new());
        }

        Ok(serde_json::from_str(&content)?)
    }

    fn save(&self, history: &ScoreHistory) -> Result<(), StoreError> {
        let parent_dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent_dir)?;

        // Write next to the target and rename so readers never see a partial file
        let temp_file = NamedTempFile::new_in(parent_dir)?;
        {
            let mut writer = BufWriter::new(temp_file.as_file());
            serde_json::to_writer(&mut writer, history)?;
            writer.flush()?;
        }
        temp_file.as_file().sync_all()?;
        temp_file.persist(&self.path).map_err(|e| e.error)?;

        tracing::debug!(path = %self.path.display(), games = history.len(), "Saved score history");
        Ok(())
    }
}

/// Default score file location
#[must_use]
pub fn default_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("wordle_game")
        .join(SCORES_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join(SCORES_FILE_NAME));

        let history = ScoreHistory::from(vec![3, 5, 1, 6]);
        store.save(&history).unwrap();

        assert_eq!(store.load().unwrap(), history);
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nope.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn empty_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SCORES_FILE_NAME);
        fs::write(&path, "  \n").unwrap();

        assert!(JsonFileStore::new(path).load().unwrap().is_empty());
    }

    #[test]
    fn garbage_file_is_a_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SCORES_FILE_NAME);
        fs::write(&path, "{not json").unwrap();

        let err = JsonFileStore::new(path).load().unwrap_err();
        assert!(matches!(err, StoreError::Json(_)));
    }

    #[test]
    fn save_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join(SCORES_FILE_NAME);
        let store = JsonFileStore::new(&path);

        store.save(&ScoreHistory::from(vec![2])).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "[2]");
    }

    #[test]
    fn save_overwrites_wholesale() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join(SCORES_FILE_NAME));

        store.save(&ScoreHistory::from(vec![1, 2, 3])).unwrap();
        store.save(&ScoreHistory::from(vec![4])).unwrap();

        assert_eq!(store.load().unwrap().scores(), &[4]);
    }

    #[test]
    fn default_path_uses_scores_file_name() {
        assert!(default_path().ends_with(Path::new("wordle_game").join(SCORES_FILE_NAME)));
    }
}
