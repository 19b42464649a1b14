//! Fixed timestep simulation tick
//!
//! One tick: collision check, asteroid movement, bottom-edge scoring. The
//! collision check runs against the positions left by the previous tick,
//! before this tick's movement is applied; an asteroid that moves onto the
//! ship on tick N is detected at the start of tick N+1. Keep that order.

use super::collision::first_hit;
use super::state::{RoundPhase, RoundState};

/// What happened during one tick, for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEvent {
    /// An asteroid crossed the bottom edge and scored one point
    Evaded { id: u32 },
    /// The ship was hit; the round is over
    Collision { final_score: u32 },
}

/// Advance the round by one tick.
///
/// No-op once the round is over. Returns the events of this tick in the
/// order they occurred.
pub fn tick(state: &mut RoundState) -> Vec<RoundEvent> {
    let mut events = Vec::new();
    if !state.is_active() {
        return events;
    }
    state.time_ticks += 1;

    // Collision first, on current positions. On a hit nothing moves and
    // nothing scores; Over is terminal.
    if first_hit(&state.ship, &state.asteroids) {
        state.phase = RoundPhase::Over;
        events.push(RoundEvent::Collision {
            final_score: state.score,
        });
        return events;
    }

    for asteroid in &mut state.asteroids {
        let v = asteroid.velocity();
        asteroid.pos += v;
    }

    // Mark evaded asteroids in one pass, remove in a second. One point per
    // asteroid, never per tick.
    let field = state.field;
    let evaded: Vec<u32> = state
        .asteroids
        .iter()
        .filter(|a| a.past_bottom(&field))
        .map(|a| a.id)
        .collect();
    if !evaded.is_empty() {
        state.asteroids.retain(|a| !a.past_bottom(&field));
        state.score += evaded.len() as u32;
        events.extend(evaded.into_iter().map(|id| RoundEvent::Evaded { id }));
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Asteroid, Field};
    use glam::Vec2;

    /// Asteroid with a square outline of the given half-extent around `pos`
    fn square(id: u32, pos: Vec2, half: f32, drift: i32, jitter: i32) -> Asteroid {
        Asteroid {
            id,
            pos,
            outline: vec![
                Vec2::new(-half, -half),
                Vec2::new(half, -half),
                Vec2::new(half, half),
                Vec2::new(-half, half),
            ],
            size: half * 2.0,
            drift,
            jitter,
        }
    }

    fn round_with(asteroids: Vec<Asteroid>) -> RoundState {
        let mut round = RoundState::new(Field::default(), 1);
        round.asteroids = asteroids;
        round
    }

    #[test]
    fn asteroid_falls_out_after_121_ticks() {
        // y = 0, fall speed 5, no jitter: tick 120 puts it at exactly 600
        // (still in), tick 121 at 605 (out).
        let mut round = round_with(vec![square(1, Vec2::new(100.0, 0.0), 10.0, 0, 0)]);

        for _ in 0..120 {
            let events = tick(&mut round);
            assert!(events.is_empty());
        }
        assert_eq!(round.asteroids[0].pos.y, 600.0);
        assert_eq!(round.score, 0);

        let events = tick(&mut round);
        assert_eq!(events, vec![RoundEvent::Evaded { id: 1 }]);
        assert!(round.asteroids.is_empty());
        assert_eq!(round.score, 1);
    }

    #[test]
    fn drift_and_jitter_apply_every_tick() {
        let mut round = round_with(vec![square(1, Vec2::new(100.0, 0.0), 10.0, -2, 1)]);
        let outline_before = round.asteroids[0].outline.clone();

        tick(&mut round);
        assert_eq!(round.asteroids[0].pos, Vec2::new(98.0, 6.0));
        tick(&mut round);
        assert_eq!(round.asteroids[0].pos, Vec2::new(96.0, 12.0));

        // Geometry is position-only mutation; the outline never changes
        assert_eq!(round.asteroids[0].outline, outline_before);
    }

    #[test]
    fn two_asteroids_can_score_in_the_same_tick() {
        let mut round = round_with(vec![
            square(1, Vec2::new(100.0, 598.0), 5.0, 0, 0),
            square(2, Vec2::new(300.0, 597.0), 5.0, 0, 0),
            square(3, Vec2::new(500.0, 100.0), 5.0, 0, 0),
        ]);

        let events = tick(&mut round);
        assert_eq!(
            events,
            vec![RoundEvent::Evaded { id: 1 }, RoundEvent::Evaded { id: 2 }]
        );
        assert_eq!(round.score, 2);
        assert_eq!(round.asteroids.len(), 1);
        assert_eq!(round.asteroids[0].id, 3);
    }

    #[test]
    fn collision_ends_round_before_any_movement() {
        // Overlapping the ship box (375,540)-(425,570) from the start
        let rock = square(1, Vec2::new(390.0, 545.0), 10.0, 2, 2);
        let mut round = round_with(vec![rock.clone()]);
        round.score = 7;

        let events = tick(&mut round);
        assert_eq!(events, vec![RoundEvent::Collision { final_score: 7 }]);
        assert_eq!(round.phase, RoundPhase::Over);
        // The hit tick moves nothing
        assert_eq!(round.asteroids[0].pos, rock.pos);
    }

    #[test]
    fn detection_lags_movement_by_one_tick() {
        // Box (390,515)-(410,535): clear of the ship. Fall speed 6 moves it
        // to (390,521)-(410,541), overlapping the ship's top edge at 540.
        let mut round = round_with(vec![square(1, Vec2::new(400.0, 525.0), 10.0, 0, 1)]);

        let events = tick(&mut round);
        assert!(events.is_empty(), "hit not visible until the next check");
        assert_eq!(round.asteroids[0].pos.y, 531.0);

        let events = tick(&mut round);
        assert_eq!(events, vec![RoundEvent::Collision { final_score: 0 }]);
        // Detected on old position; still no movement this tick
        assert_eq!(round.asteroids[0].pos.y, 531.0);
    }

    #[test]
    fn over_round_is_frozen() {
        let mut round = round_with(vec![square(1, Vec2::new(390.0, 545.0), 10.0, 0, 0)]);
        tick(&mut round);
        assert_eq!(round.phase, RoundPhase::Over);

        let ticks_before = round.time_ticks;
        let snapshot = round.asteroids.clone();
        for _ in 0..10 {
            assert!(tick(&mut round).is_empty());
        }
        assert_eq!(round.time_ticks, ticks_before);
        assert_eq!(round.asteroids, snapshot);
        assert_eq!(round.score, 0);
    }

    #[test]
    fn score_increments_are_single_steps() {
        // Staggered so no two asteroids cross the bottom on the same tick
        let mut round = round_with(
            (0..5u32)
                .map(|i| {
                    square(
                        i + 1,
                        Vec2::new(50.0 + i as f32 * 100.0, 600.0 - i as f32 * 7.0),
                        5.0,
                        0,
                        0,
                    )
                })
                .collect(),
        );

        let mut last_score = 0;
        for _ in 0..10 {
            let evaded = tick(&mut round)
                .iter()
                .filter(|e| matches!(e, RoundEvent::Evaded { .. }))
                .count() as u32;
            assert_eq!(round.score, last_score + evaded);
            assert!(round.score >= last_score);
            last_score = round.score;
        }
        assert_eq!(round.score, 5);
    }
}
