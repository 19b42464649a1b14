//! Round state and core simulation types

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::*;

/// The fixed play area, immutable for the session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Field {
    /// Panics on non-positive dimensions: a degenerate field is a
    /// programming error, not a recoverable condition.
    pub fn new(width: f32, height: f32) -> Self {
        assert!(
            width > 0.0 && height > 0.0,
            "field dimensions must be positive, got {width}x{height}"
        );
        Self { width, height }
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new(FIELD_WIDTH, FIELD_HEIGHT)
    }
}

/// Discrete movement commands from the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveCommand {
    Left,
    Right,
    Up,
    Down,
}

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// Simulation running
    Active,
    /// Collision happened; terminal for this round instance
    Over,
}

/// The player's ship: a fixed-size box anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ship {
    pub pos: Vec2,
}

impl Ship {
    /// Starting position: horizontally centered, two box heights above the
    /// bottom edge.
    pub fn spawn(field: &Field) -> Self {
        Self {
            pos: Vec2::new(
                field.width / 2.0 - SHIP_WIDTH / 2.0,
                field.height - SHIP_HEIGHT * 2.0,
            ),
        }
    }

    /// Corners of the ship's bounding box as (min, max)
    #[inline]
    pub fn bounds(&self) -> (Vec2, Vec2) {
        (self.pos, self.pos + Vec2::new(SHIP_WIDTH, SHIP_HEIGHT))
    }

    /// Apply one movement command, one step along one axis.
    ///
    /// A move that would fail the boundary check is silently ignored; the
    /// ship is never clamped to the edge. The edge checks compare the box
    /// origin against the step size, not the far edge of the box.
    pub fn apply_move(&mut self, cmd: MoveCommand, field: &Field) {
        match cmd {
            MoveCommand::Left => {
                if self.pos.x > SHIP_STEP {
                    self.pos.x -= SHIP_STEP;
                }
            }
            MoveCommand::Right => {
                if self.pos.x < field.width - SHIP_STEP {
                    self.pos.x += SHIP_STEP;
                }
            }
            MoveCommand::Up => {
                if self.pos.y > SHIP_STEP {
                    self.pos.y -= SHIP_STEP;
                }
            }
            MoveCommand::Down => {
                if self.pos.y < field.height - SHIP_STEP {
                    self.pos.y += SHIP_STEP;
                }
            }
        }
    }
}

/// A falling asteroid entity
///
/// The outline is drawn once at spawn and never recomputed; only `pos`
/// changes after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Asteroid {
    pub id: u32,
    /// Generation origin; the outline points are offsets from here
    pub pos: Vec2,
    /// Polygon outline relative to `pos` (5 to 9 vertices)
    pub outline: Vec<Vec2>,
    /// Nominal size (generation radius)
    pub size: f32,
    /// Horizontal drift, units per tick, fixed at spawn
    pub drift: i32,
    /// Vertical jitter added to the base fall speed, fixed at spawn
    pub jitter: i32,
}

impl Asteroid {
    /// Per-tick translation for this asteroid
    #[inline]
    pub fn velocity(&self) -> Vec2 {
        Vec2::new(self.drift as f32, ASTEROID_FALL_SPEED + self.jitter as f32)
    }

    /// Absolute polygon vertices at the current position
    pub fn vertices(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.outline.iter().map(move |&p| self.pos + p)
    }

    /// True once the asteroid's origin has crossed the bottom edge
    #[inline]
    pub fn past_bottom(&self, field: &Field) -> bool {
        self.pos.y > field.height
    }
}

/// Complete state of one round
///
/// Created fresh at round start and again on every restart; `Over` is
/// terminal for a given instance.
#[derive(Debug, Clone)]
pub struct RoundState {
    /// Round seed for reproducibility
    pub seed: u64,
    /// Seeded RNG; the only randomness source inside the simulation
    pub rng: Pcg32,
    pub field: Field,
    pub ship: Ship,
    /// Live asteroids, id-ordered by construction
    pub asteroids: Vec<Asteroid>,
    /// One point per asteroid that made it past the bottom edge
    pub score: u32,
    pub phase: RoundPhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Next entity ID
    next_id: u32,
}

impl RoundState {
    pub fn new(field: Field, seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            field,
            ship: Ship::spawn(&field),
            asteroids: Vec::new(),
            score: 0,
            phase: RoundPhase::Active,
            time_ticks: 0,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.phase == RoundPhase::Active
    }

    /// Forward a movement command to the ship; ignored once the round is over
    pub fn apply_move(&mut self, cmd: MoveCommand) {
        if self.is_active() {
            let field = self.field;
            self.ship.apply_move(cmd, &field);
        }
    }
}
