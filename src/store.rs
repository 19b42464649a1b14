//! Score persistence
//!
//! The session talks to a `ScoreStore`; the round-over transition must
//! complete whether or not the write succeeds, so store failures surface as
//! errors for the caller to log rather than panics.

use std::fs;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::scores::{HighScoreEntry, HighScores};

#[derive(Debug, Error)]
pub enum ScoreStoreError {
    #[error("score file I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("score file encoding failed: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("score store unavailable")]
    Unavailable,
}

/// Durable round-score storage
pub trait ScoreStore {
    /// Append one round score. The entry is durable once this returns Ok.
    fn save(&mut self, score: u32) -> Result<(), ScoreStoreError>;

    /// Up to `n` entries, best first
    fn top_n(&self, n: usize) -> Vec<HighScoreEntry>;
}

/// Score store backed by a JSON file
#[derive(Debug)]
pub struct JsonScoreStore {
    path: PathBuf,
    board: HighScores,
}

impl JsonScoreStore {
    /// Open the store at `path`, loading any existing board. A missing file
    /// starts a fresh board; an unreadable one is logged and replaced on the
    /// next save.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let board = match fs::read_to_string(&path) {
            Ok(json) => match serde_json::from_str::<HighScores>(&json) {
                Ok(board) => {
                    log::info!("Loaded {} high scores from {}", board.len(), path.display());
                    board
                }
                Err(err) => {
                    log::warn!("Corrupt score file {}: {err}", path.display());
                    HighScores::new()
                }
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::info!("No score file at {}, starting fresh", path.display());
                HighScores::new()
            }
            Err(err) => {
                log::warn!("Could not read score file {}: {err}", path.display());
                HighScores::new()
            }
        };
        Self { path, board }
    }
}

impl ScoreStore for JsonScoreStore {
    fn save(&mut self, score: u32) -> Result<(), ScoreStoreError> {
        self.board.push(score);
        let json = serde_json::to_string(&self.board)?;
        fs::write(&self.path, json)?;
        log::info!("High scores saved ({} entries)", self.board.len());
        Ok(())
    }

    fn top_n(&self, n: usize) -> Vec<HighScoreEntry> {
        self.board.top_n(n)
    }
}

/// In-memory score store for tests and headless runs
#[derive(Debug, Default)]
pub struct MemoryScoreStore {
    pub board: HighScores,
    /// When set, `save` reports the store as unavailable
    pub fail_saves: bool,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryScoreStore {
    fn save(&mut self, score: u32) -> Result<(), ScoreStoreError> {
        if self.fail_saves {
            return Err(ScoreStoreError::Unavailable);
        }
        self.board.push(score);
        Ok(())
    }

    fn top_n(&self, n: usize) -> Vec<HighScoreEntry> {
        self.board.top_n(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trip() {
        let mut store = MemoryScoreStore::new();
        store.save(3).unwrap();
        store.save(9).unwrap();
        store.save(3).unwrap();

        let top: Vec<u32> = store.top_n(5).iter().map(|e| e.score).collect();
        assert_eq!(top, vec![9, 3, 3]);
    }

    #[test]
    fn failing_store_reports_error_without_recording() {
        let mut store = MemoryScoreStore {
            fail_saves: true,
            ..Default::default()
        };
        assert!(store.save(5).is_err());
        assert!(store.top_n(5).is_empty());
    }

    #[test]
    fn json_store_persists_across_opens() {
        let path = std::env::temp_dir().join(format!(
            "astro_dodge_store_test_{}.json",
            std::process::id()
        ));
        let _ = fs::remove_file(&path);

        {
            let mut store = JsonScoreStore::open(&path);
            store.save(7).unwrap();
            store.save(2).unwrap();
        }

        let reopened = JsonScoreStore::open(&path);
        let top: Vec<u32> = reopened.top_n(5).iter().map(|e| e.score).collect();
        assert_eq!(top, vec![7, 2]);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn corrupt_json_starts_fresh() {
        let path = std::env::temp_dir().join(format!(
            "astro_dodge_store_corrupt_{}.json",
            std::process::id()
        ));
        fs::write(&path, "not json").unwrap();

        let store = JsonScoreStore::open(&path);
        assert!(store.top_n(5).is_empty());

        let _ = fs::remove_file(&path);
    }
}
