//! Game loop
//!
//! Runs the session at a fixed tick rate: pace, poll input, tick, draw. Quit is
//! honoured on the tick it is observed.

use crate::hud;
use crate::platform::{Clock, FrameLimiter, InputSource, Renderer};
use crate::settings::Settings;
use crate::sim::{GameEvent, GamePhase, Session};

/// Tallies from a finished run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: u64,
    pub levels_won: u32,
    pub computer_wins: u32,
    pub games_won: u32,
    pub bounces: u32,
}

impl RunSummary {
    fn record(&mut self, event: &GameEvent) {
        match event {
            GameEvent::PlayerWon { .. } => self.levels_won += 1,
            GameEvent::ComputerWon { .. } => self.computer_wins += 1,
            GameEvent::GameWon => self.games_won += 1,
            GameEvent::Bounced | GameEvent::BackwardCrossing => self.bounces += 1,
            _ => {}
        }
    }
}

pub struct GameLoop<I, R, C, L> {
    pub session: Session,
    input: I,
    renderer: R,
    clock: C,
    limiter: L,
    /// The start prompt is redrawn this often instead of every tick
    prompt_ticks: u32,
    /// Ticks spent waiting for a start key
    waiting: u32,
}

impl<I, R, C, L> GameLoop<I, R, C, L>
where
    I: InputSource,
    R: Renderer,
    C: Clock,
    L: FrameLimiter,
{
    pub fn new(settings: &Settings, session: Session, input: I, renderer: R, clock: C, limiter: L) -> Self {
        Self {
            session,
            input,
            renderer,
            clock,
            limiter,
            prompt_ticks: settings.start_prompt_ticks(),
            waiting: 0,
        }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Run until quit, or for at most `max_ticks` ticks when non-zero
    pub fn run(&mut self, max_ticks: u64) -> RunSummary {
        let mut summary = RunSummary::default();
        log::info!("Game loop running");

        while !self.session.is_stopped() {
            self.limiter.wait();

            let mut input = self.input.poll();
            if max_ticks > 0 && summary.ticks + 1 >= max_ticks {
                input.quit = true;
            }

            let now = self.clock.now();
            for event in self.session.tick(&input, now) {
                log::debug!("{:?}", event);
                summary.record(&event);
            }
            summary.ticks += 1;

            if self.session.is_stopped() {
                break;
            }
            self.draw(now);
        }

        log::info!(
            "Stopped after {} ticks: {} levels won, {} lost, {} games won",
            summary.ticks,
            summary.levels_won,
            summary.computer_wins,
            summary.games_won
        );
        summary
    }

    fn draw(&mut self, now: f64) {
        if self.session.phase == GamePhase::AwaitingStart {
            let due = self.waiting % self.prompt_ticks.max(1) == 0;
            self.waiting += 1;
            if !due {
                return;
            }
        } else {
            self.waiting = 0;
        }
        hud::build_frame(&self.session, now).submit(&mut self.renderer);
    }
}
