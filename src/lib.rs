//! Astro Dodge - dodge the falling asteroids, rack up a score
//!
//! Core modules:
//! - `sim`: Deterministic simulation (shapes, collision, round state, tick)
//! - `scores`: High score board (append-only, descending top-N)
//! - `store`: Score persistence (JSON file or in-memory)
//! - `presentation`: Render/input boundary consumed by the session
//! - `session`: Session orchestration (timers, dispatch, cancellation)

pub mod presentation;
pub mod scores;
pub mod session;
pub mod sim;
pub mod store;

pub use scores::{HighScoreEntry, HighScores};
pub use session::GameSession;

/// Game configuration constants
pub mod consts {
    /// Play field dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Asteroid nominal size range (generation radius)
    pub const ASTEROID_MIN_SIZE: f32 = 20.0;
    pub const ASTEROID_MAX_SIZE: f32 = 50.0;
    /// Base fall speed, units per tick
    pub const ASTEROID_FALL_SPEED: f32 = 5.0;
    /// Per-axis drift/jitter magnitude drawn at spawn, units per tick
    pub const DRIFT_MAX: i32 = 2;

    /// Ship bounding box
    pub const SHIP_WIDTH: f32 = 50.0;
    pub const SHIP_HEIGHT: f32 = 30.0;
    /// Ship movement step per command, units
    pub const SHIP_STEP: f32 = 20.0;

    /// Main simulation tick period
    pub const TICK_PERIOD_MS: u64 = 50;
    /// Asteroid spawn period, independent of the tick period
    pub const SPAWN_PERIOD_MS: u64 = 1000;

    /// Number of entries shown on the high-scores screen
    pub const TOP_SCORES: usize = 5;
}
