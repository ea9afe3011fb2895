//! Game settings and tuning
//!
//! Loaded from an optional JSON file; any missing field takes its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Handling parameters for one car
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarTuning {
    /// Top forward speed (px per tick)
    pub max_vel: f64,
    /// Degrees per tick
    pub rotation_vel: f64,
    /// Velocity gained per throttle tick
    pub acceleration: f64,
    /// Top-left corner of the sprite at the start line
    pub start: (f64, f64),
}

impl CarTuning {
    pub fn player() -> Self {
        Self {
            max_vel: PLAYER_MAX_VEL,
            rotation_vel: PLAYER_ROTATION_VEL,
            acceleration: ACCELERATION,
            start: PLAYER_START,
        }
    }

    pub fn computer() -> Self {
        Self {
            max_vel: COMPUTER_MAX_VEL,
            rotation_vel: COMPUTER_ROTATION_VEL,
            acceleration: ACCELERATION,
            start: COMPUTER_START,
        }
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Timing ===
    /// Ticks per second
    pub fps: u32,
    /// Freeze frame after a race is decided (ms)
    pub freeze_ms: u32,
    /// Refresh interval of the start prompt (ms)
    pub start_prompt_ms: u32,

    // === Cars ===
    pub player: CarTuning,
    pub computer: CarTuning,
    /// Computer speed added per level
    pub computer_level_step: f64,

    // === Headless driver ===
    /// Seed for the idle driver
    pub idle_seed: u64,
    /// Stop the headless run after this many ticks (0 = run until quit)
    pub max_ticks: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fps: FPS,
            freeze_ms: FREEZE_MS,
            start_prompt_ms: START_PROMPT_MS,

            player: CarTuning::player(),
            computer: CarTuning::computer(),
            computer_level_step: COMPUTER_LEVEL_STEP,

            idle_seed: 0x5eed,
            max_ticks: 60 * FPS as u64,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid settings in {}: {} - using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read {}: {} - using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Freeze-frame length in ticks
    pub fn freeze_ticks(&self) -> u32 {
        crate::ms_to_ticks(self.freeze_ms, self.fps)
    }

    /// Start prompt refresh interval in ticks
    pub fn start_prompt_ticks(&self) -> u32 {
        crate::ms_to_ticks(self.start_prompt_ms, self.fps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let settings = Settings::default();
        assert_eq!(settings.fps, 60);
        assert_eq!(settings.player.max_vel, 2.0);
        assert_eq!(settings.computer.max_vel, 0.5);
        assert_eq!(settings.player.acceleration, 0.08);
        assert_eq!(settings.freeze_ticks(), 180);
        assert_eq!(settings.start_prompt_ticks(), 60);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "fps": 30, "freeze_ms": 1000 }"#).unwrap();
        assert_eq!(settings.fps, 30);
        assert_eq!(settings.freeze_ticks(), 30);
        assert_eq!(settings.player, CarTuning::player());
    }

    #[test]
    fn test_json_roundtrip() {
        let mut settings = Settings::default();
        settings.computer.max_vel = 0.75;
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(Settings::from_json("{ fps: }").is_err());
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let settings = Settings::load("/nonexistent/pixel-racer/settings.json");
        assert_eq!(settings, Settings::default());
    }
}
