//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering, persistence, or platform dependencies

pub mod collision;
pub mod shape;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Aabb, first_hit};
pub use shape::generate_outline;
pub use spawn::spawn_asteroid;
pub use state::{Asteroid, Field, MoveCommand, RoundPhase, RoundState, Ship};
pub use tick::{RoundEvent, tick};
