//! Fixed timestep session tick
//!
//! One tick: honour quit, then run the current phase. While racing that is
//! player input, computer steering, collision checks and finally any phase
//! transition. A decided race freezes the session for a number of ticks
//! before the outcome is applied.

use serde::{Deserialize, Serialize};

use super::collision::{FinishCrossing, collide};
use super::computer::ComputerCar;
use super::kinematics::Car;
use super::player::{Controls, PlayerCar};
use super::state::LevelState;
use super::track::{Footprints, Track};
use crate::settings::Settings;

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Held driving keys
    pub controls: Controls,
    /// A key went down this tick (starts a level)
    pub start: bool,
    /// Window closed / quit requested
    pub quit: bool,
}

/// How a race ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    ComputerWon,
    PlayerWon,
    GameWon,
}

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for a key press to start the level
    AwaitingStart,
    /// Race in progress
    Running,
    /// Freeze frame after a race is decided; the outcome applies when it ends
    Celebrating { outcome: Outcome, ticks_left: u32 },
    /// Quit was requested
    Stopped,
}

/// Things that happened during a tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    LevelStarted { level: u32 },
    /// Player hit the track border
    Bounced,
    /// Player drove onto the finish line the wrong way
    BackwardCrossing,
    ComputerWon { level: u32 },
    PlayerWon { level: u32, seconds: u64 },
    GameWon,
    /// Back to level 1
    Reset,
    Stopped,
}

/// Everything the race loop mutates, owned in one place.
///
/// Serializes without its geometry; `Session::restore` takes the track and
/// footprints back explicitly.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub phase: GamePhase,
    pub level: LevelState,
    pub player: PlayerCar,
    pub computer: ComputerCar,
    #[serde(skip)]
    track: Track,
    #[serde(skip)]
    footprints: Footprints,
    freeze_ticks: u32,
}

/// Serialized part of a `Session`
#[derive(Deserialize)]
struct SessionState {
    phase: GamePhase,
    level: LevelState,
    player: PlayerCar,
    computer: ComputerCar,
    freeze_ticks: u32,
}

impl Session {
    pub fn new(settings: &Settings, track: Track, footprints: Footprints) -> Self {
        let computer = ComputerCar::new(
            &settings.computer,
            track.path.clone(),
            footprints.computer.size(),
            settings.computer_level_step,
        );
        Self {
            phase: GamePhase::AwaitingStart,
            level: LevelState::new(),
            player: PlayerCar::new(&settings.player),
            computer,
            track,
            footprints,
            freeze_ticks: settings.freeze_ticks(),
        }
    }

    /// Rebuild a session from `snapshot_json` output and the geometry it was saved without
    pub fn restore(json: &str, track: Track, footprints: Footprints) -> Result<Self, serde_json::Error> {
        let state: SessionState = serde_json::from_str(json)?;
        log::info!("Restored session on level {}", state.level.level);
        Ok(Self {
            phase: state.phase,
            level: state.level,
            player: state.player,
            computer: state.computer,
            track,
            footprints,
            freeze_ticks: state.freeze_ticks,
        })
    }

    pub fn is_stopped(&self) -> bool {
        self.phase == GamePhase::Stopped
    }

    /// Whole seconds on the level timer
    pub fn elapsed(&self, now: f64) -> u64 {
        self.level.elapsed(now)
    }

    pub fn track(&self) -> &Track {
        &self.track
    }

    /// Serialize cars, level and phase (geometry is not included)
    pub fn snapshot_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Advance the session by one tick. `now` is wall-clock seconds.
    pub fn tick(&mut self, input: &TickInput, now: f64) -> Vec<GameEvent> {
        let mut events = Vec::new();

        if input.quit {
            if self.phase != GamePhase::Stopped {
                log::info!("Quit requested on level {}", self.level.level);
                self.phase = GamePhase::Stopped;
                events.push(GameEvent::Stopped);
            }
            return events;
        }

        match self.phase {
            GamePhase::Stopped => {}
            GamePhase::AwaitingStart => {
                if input.start {
                    self.level.start_level(now);
                    self.phase = GamePhase::Running;
                    log::info!("Level {} started", self.level.level);
                    events.push(GameEvent::LevelStarted {
                        level: self.level.level,
                    });
                }
            }
            GamePhase::Running => {
                self.player.drive(&input.controls);
                self.computer.advance();
                self.handle_collisions(now, &mut events);
            }
            GamePhase::Celebrating {
                outcome,
                ticks_left,
            } => {
                if ticks_left > 1 {
                    self.phase = GamePhase::Celebrating {
                        outcome,
                        ticks_left: ticks_left - 1,
                    };
                } else {
                    self.apply_outcome(outcome, &mut events);
                }
            }
        }

        events
    }

    /// Wall bounce first, then both finish-line checks against the same
    /// positions. The computer wins ties.
    fn handle_collisions(&mut self, now: f64, events: &mut Vec<GameEvent>) {
        let (track, footprints) = (&self.track, &self.footprints);

        if let Some(poi) = collide(&self.player, &footprints.player, &track.border) {
            log::debug!("player hit border at {poi}");
            self.player.bounce();
            events.push(GameEvent::Bounced);
        }

        let computer_finish = collide(&self.computer, &footprints.computer, &track.finish);
        let player_finish = collide(&self.player, &footprints.player, &track.finish);

        if computer_finish.is_some() {
            log::info!("Computer won level {}", self.level.level);
            events.push(GameEvent::ComputerWon {
                level: self.level.level,
            });
            self.celebrate(Outcome::ComputerWon);
            return;
        }

        if let Some(poi) = player_finish {
            match FinishCrossing::from_point(poi) {
                FinishCrossing::Backward => {
                    log::debug!("player entered finish line backwards at {poi}");
                    self.player.bounce();
                    events.push(GameEvent::BackwardCrossing);
                }
                FinishCrossing::Forward => {
                    let seconds = self.level.elapsed(now);
                    log::info!("Player won level {} in {} sec", self.level.level, seconds);
                    events.push(GameEvent::PlayerWon {
                        level: self.level.level,
                        seconds,
                    });
                    self.celebrate(Outcome::PlayerWon);
                }
            }
        }
    }

    fn celebrate(&mut self, outcome: Outcome) {
        self.phase = GamePhase::Celebrating {
            outcome,
            ticks_left: self.freeze_ticks,
        };
    }

    fn apply_outcome(&mut self, outcome: Outcome, events: &mut Vec<GameEvent>) {
        match outcome {
            Outcome::ComputerWon | Outcome::GameWon => {
                self.reset_all();
                events.push(GameEvent::Reset);
                self.phase = GamePhase::AwaitingStart;
            }
            Outcome::PlayerWon => {
                self.level.next_level();
                self.player.reset();
                self.computer.advance_level(self.level.level);

                if self.level.is_finished() {
                    log::info!("All levels cleared");
                    events.push(GameEvent::GameWon);
                    self.celebrate(Outcome::GameWon);
                } else {
                    self.phase = GamePhase::AwaitingStart;
                }
            }
        }
    }

    fn reset_all(&mut self) {
        log::info!("Resetting to level 1");
        self.level.reset();
        self.player.reset();
        self.computer.reset();
    }
}
