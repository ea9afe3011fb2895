//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Wall-clock time is passed in, never read
//! - No rendering, input or asset dependencies; masks arrive as plain values

pub mod collision;
pub mod computer;
pub mod kinematics;
pub mod mask;
pub mod player;
pub mod state;
pub mod tick;
pub mod track;

pub use collision::{FinishCrossing, Obstacle, collide};
pub use computer::ComputerCar;
pub use kinematics::{Car, Kinematics, Turn};
pub use mask::{CollisionMask, MaskError};
pub use player::{Controls, PlayerCar};
pub use state::LevelState;
pub use tick::{GameEvent, GamePhase, Outcome, Session, TickInput};
pub use track::{Footprints, Track};
