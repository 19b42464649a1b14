//! Axis-aligned bounding-box collision detection
//!
//! Collisions are approximated with AABBs around the ship box and each
//! asteroid's translated polygon. Overlap uses strict inequality on both
//! axes, so boxes that merely touch edges do not collide.

use glam::Vec2;

use super::state::{Asteroid, Ship};

/// The smallest axis-aligned rectangle enclosing an entity's geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Bounding box of a point set. Returns a degenerate box at the origin
    /// for an empty set; asteroid outlines are never empty.
    pub fn from_points(points: impl IntoIterator<Item = Vec2>) -> Self {
        let mut min = Vec2::splat(f32::INFINITY);
        let mut max = Vec2::splat(f32::NEG_INFINITY);
        for p in points {
            min = min.min(p);
            max = max.max(p);
        }
        if min.x > max.x {
            return Self::new(Vec2::ZERO, Vec2::ZERO);
        }
        Self { min, max }
    }

    /// Strict overlap on both axes; touching edges do not count
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

impl Ship {
    /// The ship's fixed-size bounding box at its current position
    pub fn aabb(&self) -> Aabb {
        let (min, max) = self.bounds();
        Aabb::new(min, max)
    }
}

impl Asteroid {
    /// Bounding box of the translated polygon
    pub fn aabb(&self) -> Aabb {
        Aabb::from_points(self.vertices())
    }
}

/// Test the ship against every live asteroid, returning on the first hit
pub fn first_hit(ship: &Ship, asteroids: &[Asteroid]) -> bool {
    let ship_box = ship.aabb();
    asteroids.iter().any(|a| a.aabb().overlaps(&ship_box))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asteroid_with_box(min: Vec2, max: Vec2) -> Asteroid {
        // Rectangle outline anchored at min, so the AABB is exactly min..max
        let extent = max - min;
        Asteroid {
            id: 1,
            pos: min,
            outline: vec![
                Vec2::ZERO,
                Vec2::new(extent.x, 0.0),
                extent,
                Vec2::new(0.0, extent.y),
            ],
            size: extent.x.max(extent.y),
            drift: 0,
            jitter: 0,
        }
    }

    #[test]
    fn overlapping_boxes_collide() {
        // Ship (375,540)-(425,570) vs asteroid (370,530)-(410,560)
        let ship = Ship {
            pos: Vec2::new(375.0, 540.0),
        };
        let rock = asteroid_with_box(Vec2::new(370.0, 530.0), Vec2::new(410.0, 560.0));
        assert!(first_hit(&ship, &[rock]));
    }

    #[test]
    fn touching_edges_do_not_collide() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Aabb::new(Vec2::new(10.0, 0.0), Vec2::new(20.0, 10.0));
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));

        let c = Aabb::new(Vec2::new(0.0, 10.0), Vec2::new(10.0, 20.0));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn overlap_on_one_axis_only_is_a_miss() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Aabb::new(Vec2::new(5.0, 30.0), Vec2::new(15.0, 40.0));
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn first_hit_scans_whole_live_set() {
        let ship = Ship {
            pos: Vec2::new(100.0, 100.0),
        };
        let far = asteroid_with_box(Vec2::new(500.0, 500.0), Vec2::new(520.0, 520.0));
        let near = asteroid_with_box(Vec2::new(90.0, 90.0), Vec2::new(110.0, 110.0));
        assert!(first_hit(&ship, &[far.clone(), near]));
        assert!(!first_hit(&ship, &[far]));
    }

    #[test]
    fn aabb_from_polygon_points() {
        let points = [
            Vec2::new(3.0, -1.0),
            Vec2::new(-2.0, 4.0),
            Vec2::new(0.5, 0.5),
        ];
        let aabb = Aabb::from_points(points);
        assert_eq!(aabb.min, Vec2::new(-2.0, -1.0));
        assert_eq!(aabb.max, Vec2::new(3.0, 4.0));
    }
}
