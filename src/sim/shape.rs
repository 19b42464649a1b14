//! Randomized asteroid outline generation
//!
//! Every asteroid gets its own lumpy polygon: evenly spaced angles, a
//! random radius per vertex. The outline is drawn once at spawn and stays
//! fixed for the asteroid's lifetime.

use glam::Vec2;
use rand::Rng;

/// Vertex count range for a generated outline
pub const MIN_VERTICES: u32 = 5;
pub const MAX_VERTICES: u32 = 9;

/// Generate a polygon outline for an asteroid of nominal `size`.
///
/// Vertices are offsets from the asteroid's origin. Vertex `i` of `n` sits
/// at angle `i * 360/n` degrees at a radius drawn uniformly from
/// `[size/2, size]`.
///
/// Panics if `size` is not positive; the caller draws it from fixed
/// constants, so a bad value is a programming error.
pub fn generate_outline(rng: &mut impl Rng, size: f32) -> Vec<Vec2> {
    assert!(size > 0.0, "asteroid size must be positive, got {size}");

    let num_points = rng.random_range(MIN_VERTICES..=MAX_VERTICES);
    let mut points = Vec::with_capacity(num_points as usize);
    for i in 0..num_points {
        let angle = (i as f32 * 360.0 / num_points as f32).to_radians();
        let length = rng.random_range(size * 0.5..=size);
        points.push(Vec2::new(length * angle.cos(), length * angle.sin()));
    }
    points
}
