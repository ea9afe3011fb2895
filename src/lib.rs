//! Pixel Racer - a two-car top-down racing game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, pixel masks, collisions, level state)
//! - `platform`: Clock, input, rendering and frame pacing collaborators
//! - `hud`: Per-frame draw list and HUD text
//! - `settings`: Data-driven tuning loaded from JSON
//! - `app`: The game loop tying the collaborators to a session

pub mod app;
pub mod hud;
pub mod platform;
pub mod settings;
pub mod sim;

pub use app::GameLoop;
pub use settings::{CarTuning, Settings};

use glam::DVec2;

/// Game configuration constants
pub mod consts {
    /// Target tick rate of the fixed-timestep loop
    pub const FPS: u32 = 60;
    /// Number of levels; the game is won once the player clears the last one
    pub const LEVELS: u32 = 7;

    /// Velocity gained per tick of throttle (and half of it lost per idle tick)
    pub const ACCELERATION: f64 = 0.08;

    /// Player car defaults
    pub const PLAYER_MAX_VEL: f64 = 2.0;
    pub const PLAYER_ROTATION_VEL: f64 = 4.0;
    pub const PLAYER_START: (f64, f64) = (140.0, 150.0);

    /// Computer car defaults
    pub const COMPUTER_MAX_VEL: f64 = 0.5;
    pub const COMPUTER_ROTATION_VEL: f64 = 4.0;
    pub const COMPUTER_START: (f64, f64) = (120.0, 150.0);
    /// Extra computer velocity per level
    pub const COMPUTER_LEVEL_STEP: f64 = 0.2;

    /// World position of the finish line's top-left corner
    pub const FINISH_POS: (i32, i32) = (100, 190);

    /// Freeze frame after a race is decided (ms)
    pub const FREEZE_MS: u32 = 3000;
    /// Refresh interval of the "press any key" prompt (ms)
    pub const START_PROMPT_MS: u32 = 1000;

    /// Alpha values strictly above this count as solid in a collision mask
    pub const MASK_ALPHA_THRESHOLD: u8 = 127;

    /// Hand-authored racing line for the computer car
    pub const TRACK_PATH: [(i32, i32); 18] = [
        (138, 108),
        (93, 47),
        (42, 92),
        (51, 368),
        (254, 571),
        (317, 416),
        (393, 360),
        (464, 417),
        (474, 551),
        (563, 572),
        (570, 305),
        (341, 280),
        (341, 196),
        (557, 199),
        (566, 72),
        (243, 55),
        (218, 275),
        (133, 200),
    ];
}

/// Position delta for one motion step along `angle_deg` at `vel`.
///
/// Heading 0 points up the screen (y grows downward) and positive angles turn
/// counter-clockwise, so both components are subtracted from the position.
#[inline]
pub fn heading_delta(angle_deg: f64, vel: f64) -> DVec2 {
    let radians = angle_deg.to_radians();
    DVec2::new(-radians.sin() * vel, -radians.cos() * vel)
}

/// Number of whole ticks covering `ms` at `fps` (rounded up, at least one).
/// Saturates at `u32::MAX`.
#[inline]
pub fn ms_to_ticks(ms: u32, fps: u32) -> u32 {
    let ticks = (u64::from(ms) * u64::from(fps)).div_ceil(1000);
    u32::try_from(ticks.max(1)).unwrap_or(u32::MAX)
}
