//! Presentation boundary
//!
//! The session calls out through this trait to draw entities, keep the
//! score readout current, and switch screens. Input travels the other way
//! as plain method calls on the session, so nothing here blocks the tick.

use crate::scores::HighScoreEntry;
use crate::sim::{Asteroid, Ship};

/// Rendering/screen collaborator driven by the session
pub trait Presentation {
    /// Draw the ship and the live asteroids at their current positions
    fn render(&mut self, ship: &Ship, asteroids: &[Asteroid]);

    /// Update the visible score readout
    fn score_changed(&mut self, score: u32);

    /// Show the game-over screen with the final score
    fn round_over(&mut self, final_score: u32);

    /// Show the high-scores screen
    fn show_high_scores(&mut self, entries: &[HighScoreEntry]);
}

/// Presentation that just logs, for headless runs and the demo binary
#[derive(Debug, Default)]
pub struct LogPresentation;

impl Presentation for LogPresentation {
    fn render(&mut self, ship: &Ship, asteroids: &[Asteroid]) {
        log::trace!(
            "frame: ship at ({:.0},{:.0}), {} asteroids live",
            ship.pos.x,
            ship.pos.y,
            asteroids.len()
        );
    }

    fn score_changed(&mut self, score: u32) {
        log::debug!("score: {score}");
    }

    fn round_over(&mut self, final_score: u32) {
        log::info!("game over, final score {final_score}");
    }

    fn show_high_scores(&mut self, entries: &[HighScoreEntry]) {
        if entries.is_empty() {
            log::info!("high scores: none yet");
            return;
        }
        for (idx, entry) in entries.iter().enumerate() {
            log::info!("high scores: {}. {}", idx + 1, entry.score);
        }
    }
}
