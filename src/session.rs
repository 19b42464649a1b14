//! Game session orchestration
//!
//! `GameSession` owns the active round, the score store, and the
//! presentation handle; nothing lives in globals. Two fixed-period timers
//! (the 50 ms simulation tick and the 1000 ms spawn timer) are drained in
//! deadline order off a session-local clock, so all round mutation happens
//! on one logical thread in one well-defined sequence. Ending a round drops
//! both timers with it; a torn-down round can never be touched by a stale
//! firing.

use crate::consts::*;
use crate::presentation::Presentation;
use crate::sim::{self, Field, MoveCommand, RoundEvent, RoundState};
use crate::store::ScoreStore;

/// One fixed-period timer driven off the session clock
#[derive(Debug, Clone, Copy)]
struct PeriodTimer {
    period_ms: u64,
    deadline_ms: u64,
}

impl PeriodTimer {
    fn new(period_ms: u64, now_ms: u64) -> Self {
        Self {
            period_ms,
            deadline_ms: now_ms + period_ms,
        }
    }

    #[inline]
    fn due(&self, now_ms: u64) -> bool {
        now_ms >= self.deadline_ms
    }

    /// Consume one firing and arm the next
    fn fire(&mut self) {
        self.deadline_ms += self.period_ms;
    }
}

/// A running round plus its pending timers. Dropping this cancels both.
#[derive(Debug)]
struct ActiveRound {
    state: RoundState,
    tick_timer: PeriodTimer,
    spawn_timer: PeriodTimer,
}

/// One player session: a field, a score store, a presentation, and at most
/// one active round
pub struct GameSession<S, P> {
    field: Field,
    store: S,
    presentation: P,
    clock_ms: u64,
    round: Option<ActiveRound>,
}

impl<S: ScoreStore, P: Presentation> GameSession<S, P> {
    pub fn new(field: Field, store: S, presentation: P) -> Self {
        Self {
            field,
            store,
            presentation,
            clock_ms: 0,
            round: None,
        }
    }

    /// Begin a fresh round, replacing any round in progress.
    ///
    /// The field is seeded with one asteroid right away; the spawn timer
    /// takes over from there.
    pub fn start_round(&mut self, seed: u64) {
        let mut state = RoundState::new(self.field, seed);
        sim::spawn_asteroid(&mut state);
        log::info!("round started (seed {seed})");

        self.presentation.score_changed(state.score);
        self.presentation.render(&state.ship, &state.asteroids);

        self.round = Some(ActiveRound {
            state,
            tick_timer: PeriodTimer::new(TICK_PERIOD_MS, self.clock_ms),
            spawn_timer: PeriodTimer::new(SPAWN_PERIOD_MS, self.clock_ms),
        });
    }

    /// Restart after game over: a brand new round value, same wiring
    pub fn restart(&mut self, seed: u64) {
        self.start_round(seed);
    }

    /// Abandon the current round and cancel its pending timers
    pub fn return_to_menu(&mut self) {
        if self.round.take().is_some() {
            log::info!("round abandoned, pending timers cancelled");
        }
    }

    /// Route a directional command to the ship of the active round
    pub fn handle_move(&mut self, cmd: MoveCommand) {
        if let Some(active) = &mut self.round {
            active.state.apply_move(cmd);
        }
    }

    /// Push the ranked top scores to the presentation (menu screen)
    pub fn show_high_scores(&mut self) {
        let top = self.store.top_n(TOP_SCORES);
        self.presentation.show_high_scores(&top);
    }

    /// Advance the session clock and fire every timer that came due, in
    /// deadline order. Ties go to the spawn timer, so an asteroid spawned
    /// at the same instant as a tick is moved by that tick.
    pub fn advance(&mut self, elapsed_ms: u64) {
        self.clock_ms += elapsed_ms;
        let now = self.clock_ms;

        loop {
            let Some(active) = self.round.as_mut() else {
                return;
            };

            let spawn_due = active.spawn_timer.due(now);
            let tick_due = active.tick_timer.due(now);
            let fire_spawn = match (spawn_due, tick_due) {
                (false, false) => return,
                (true, false) => true,
                (false, true) => false,
                (true, true) => active.spawn_timer.deadline_ms <= active.tick_timer.deadline_ms,
            };

            if fire_spawn {
                active.spawn_timer.fire();
                sim::spawn_asteroid(&mut active.state);
                continue;
            }

            active.tick_timer.fire();
            let events = sim::tick(&mut active.state);

            let mut final_score = None;
            let mut scored = false;
            for event in events {
                match event {
                    RoundEvent::Evaded { .. } => scored = true,
                    RoundEvent::Collision { final_score: score } => final_score = Some(score),
                }
            }

            if scored {
                self.presentation.score_changed(active.state.score);
            }

            if let Some(score) = final_score {
                // Persistence failure must not re-enter the simulation: the
                // round-over transition completes either way.
                if let Err(err) = self.store.save(score) {
                    log::error!("failed to persist round score {score}: {err}");
                }
                self.presentation.round_over(score);
                self.round = None;
                return;
            }

            self.presentation.render(&active.state.ship, &active.state.asteroids);
        }
    }

    /// The active round, if one is running
    pub fn round(&self) -> Option<&RoundState> {
        self.round.as_ref().map(|r| &r.state)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn presentation(&self) -> &P {
        &self.presentation
    }
}
