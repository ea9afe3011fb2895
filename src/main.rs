//! Pixel Racer entry point
//!
//! Runs a headless session: the idle driver plays against the computer car on
//! the built-in course, with draw calls going to the log.

use pixel_racer::platform::{FixedRateLimiter, IdleDriver, LogRenderer, SystemClock};
use pixel_racer::sim::{Footprints, Session, Track};
use pixel_racer::{GameLoop, Settings};

fn main() {
    env_logger::init();
    log::info!("Pixel Racer (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(path),
        None => Settings::default(),
    };
    log::info!(
        "{} fps, computer base speed {}, idle seed {}",
        settings.fps,
        settings.computer.max_vel,
        settings.idle_seed
    );

    let session = Session::new(&settings, Track::builtin(), Footprints::builtin());
    let mut game = GameLoop::new(
        &settings,
        session,
        IdleDriver::new(settings.idle_seed),
        LogRenderer::new(),
        SystemClock::new(),
        FixedRateLimiter::new(settings.fps),
    );

    let summary = game.run(settings.max_ticks);
    match game.session.snapshot_json() {
        Ok(json) => log::info!("Final state: {}", json),
        Err(e) => log::warn!("Could not serialize final state: {}", e),
    }
    println!(
        "ticks={} levels_won={} computer_wins={} games_won={} bounces={}",
        summary.ticks, summary.levels_won, summary.computer_wins, summary.games_won, summary.bounces
    );
}
