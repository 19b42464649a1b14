//! Asteroid spawning
//!
//! One asteroid per spawn-timer firing, inserted at the top edge. All
//! generation parameters are drawn from the round's seeded RNG at spawn
//! time and never redrawn. There is deliberately no cap on the live set:
//! rising density over time is the difficulty curve.

use glam::Vec2;
use rand::Rng;

use super::shape::generate_outline;
use super::state::{Asteroid, RoundState};
use crate::consts::*;

/// Create one asteroid and insert it into the round's live set.
///
/// Returns the new entity's ID.
pub fn spawn_asteroid(state: &mut RoundState) -> u32 {
    let size = state
        .rng
        .random_range(ASTEROID_MIN_SIZE..=ASTEROID_MAX_SIZE);
    let x = state.rng.random_range(0.0..=state.field.width - size);
    let outline = generate_outline(&mut state.rng, size);
    let drift = state.rng.random_range(-DRIFT_MAX..=DRIFT_MAX);
    let jitter = state.rng.random_range(-DRIFT_MAX..=DRIFT_MAX);

    let id = state.next_entity_id();
    state.asteroids.push(Asteroid {
        id,
        pos: Vec2::new(x, 0.0),
        outline,
        size,
        drift,
        jitter,
    });
    id
}
