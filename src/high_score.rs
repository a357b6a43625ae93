//! High score persistence.
//!
//! The engine only tracks the number; stores here load it once at startup and
//! save it whenever the engine reports a new best. Storage problems never
//! interrupt play: unreadable data counts as 0 and failed writes are logged.

use crate::constants::HIGH_SCORE_FILE;
use crate::utils::persistence::{load_json, save_json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};

pub trait HighScoreStore {
    /// Stored best score, 0 if there is none.
    fn load(&self) -> u32;
    fn save(&mut self, score: u32) -> io::Result<()>;
}

/// On-disk record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreRecord {
    pub best: u32,
    /// Unix timestamp of when `best` was set.
    #[serde(default)]
    pub achieved_at: i64,
}

/// `high_score.json` in a data directory.
#[derive(Debug, Clone)]
pub struct FileHighScoreStore {
    path: PathBuf,
}

impl FileHighScoreStore {
    pub fn new(dir: &Path) -> Self {
        Self {
            path: dir.join(HIGH_SCORE_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load_record(&self) -> io::Result<HighScoreRecord> {
        load_json(&self.path)
    }
}

impl HighScoreStore for FileHighScoreStore {
    fn load(&self) -> u32 {
        match self.load_record() {
            Ok(record) => record.best,
            Err(e) if e.kind() == io::ErrorKind::NotFound => 0,
            Err(e) => {
                tracing::warn!(error = %e, path = %self.path.display(), "Unreadable high score, starting from 0");
                0
            }
        }
    }

    fn save(&mut self, score: u32) -> io::Result<()> {
        let record = HighScoreRecord {
            best: score,
            achieved_at: Utc::now().timestamp(),
        };
        save_json(&self.path, &record)
    }
}

/// Keeps the score in memory only. Used when no data directory is available.
#[derive(Debug, Clone, Default)]
pub struct MemoryHighScoreStore {
    pub best: u32,
    pub saves: u32,
}

impl HighScoreStore for MemoryHighScoreStore {
    fn load(&self) -> u32 {
        self.best
    }

    fn save(&mut self, score: u32) -> io::Result<()> {
        self.best = score;
        self.saves += 1;
        Ok(())
    }
}

/// Save a new best, logging instead of failing.
pub fn persist_high_score(store: &mut dyn HighScoreStore, score: u32) {
    match store.save(score) {
        Ok(()) => tracing::info!(score, "New high score saved"),
        Err(e) => tracing::warn!(error = %e, score, "Could not save high score"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::persistence::test_dir;
    use std::fs;

    #[test]
    fn test_missing_file_loads_zero() {
        let dir = test_dir("high_score_missing");
        let store = FileHighScoreStore::new(&dir);
        assert_eq!(store.load(), 0);
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_corrupt_file_loads_zero() {
        let dir = test_dir("high_score_corrupt");
        let store = FileHighScoreStore::new(&dir);
        fs::write(store.path(), "garbage").unwrap();
        assert_eq!(store.load(), 0);
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_save_then_load() {
        let dir = test_dir("high_score_roundtrip");
        let mut store = FileHighScoreStore::new(&dir);
        store.save(42).expect("save should succeed");

        assert_eq!(store.load(), 42);
        let record = store.load_record().unwrap();
        assert_eq!(record.best, 42);
        assert!(record.achieved_at > 0);
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_record_without_timestamp() {
        let record: HighScoreRecord = serde_json::from_str(r#"{"best":17}"#).unwrap();
        assert_eq!(record.best, 17);
        assert_eq!(record.achieved_at, 0);
    }

    #[test]
    fn test_failed_write_is_not_fatal() {
        let dir = test_dir("high_score_unwritable");
        // A directory where the file should be makes the write fail
        let mut store = FileHighScoreStore::new(&dir);
        fs::create_dir_all(store.path()).unwrap();

        persist_high_score(&mut store, 5);

        assert_eq!(store.load(), 0);
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_memory_store_counts_saves() {
        let mut store = MemoryHighScoreStore::default();
        persist_high_score(&mut store, 3);
        persist_high_score(&mut store, 4);
        assert_eq!(store.load(), 4);
        assert_eq!(store.saves, 2);
    }
}
