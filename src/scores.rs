//! High score board
//!
//! Every finished round appends one entry; duplicates are all retained and
//! there is no size cap. Ranking is computed on read: descending by score,
//! ties kept in insertion order.

use serde::{Deserialize, Serialize};

/// A single recorded round score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub score: u32,
}

/// The full score history
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// Create an empty board
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a score. Every round is recorded, zeroes and repeats included.
    pub fn push(&mut self, score: u32) {
        self.entries.push(HighScoreEntry { score });
    }

    /// Up to `n` entries, best first. Ties keep insertion order.
    pub fn top_n(&self, n: usize) -> Vec<HighScoreEntry> {
        let mut ranked = self.entries.clone();
        // sort_by is stable, so equal scores stay in insertion order
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked.truncate(n);
        ranked
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Best score so far, if any round has finished
    pub fn top_score(&self) -> Option<u32> {
        self.entries.iter().map(|e| e.score).max()
    }
}
