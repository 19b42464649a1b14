//! Astro Dodge entry point
//!
//! Wires the JSON score store and a logging presentation into a session,
//! then drives one headless round at the fixed tick cadence until the ship
//! is hit. Real front-ends supply their own `Presentation` and feed move
//! commands into the session.

use std::thread;
use std::time::{Duration, Instant};

use astro_dodge::consts::TICK_PERIOD_MS;
use astro_dodge::presentation::LogPresentation;
use astro_dodge::sim::Field;
use astro_dodge::store::JsonScoreStore;
use astro_dodge::GameSession;

const SCORE_FILE: &str = "astro_dodge_scores.json";

fn main() {
    env_logger::init();
    log::info!("Astro Dodge starting...");

    let store = JsonScoreStore::open(SCORE_FILE);
    let mut session = GameSession::new(Field::default(), store, LogPresentation);

    let seed = rand::random::<u64>();
    session.start_round(seed);

    let mut last = Instant::now();
    while session.round().is_some() {
        thread::sleep(Duration::from_millis(TICK_PERIOD_MS));
        let now = Instant::now();
        session.advance(now.duration_since(last).as_millis() as u64);
        last = now;
    }

    session.show_high_scores();
}
