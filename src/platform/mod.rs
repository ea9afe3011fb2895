//! Platform abstraction layer
//!
//! The collaborators the game loop talks to:
//! - Time: wall clock and frame pacing
//! - Input: one `TickInput` per tick
//! - Rendering: draw calls for a frame

pub mod input;
pub mod render;
pub mod time;

pub use input::{IdleDriver, ScriptedInput};
pub use render::{DrawCall, ImageId, LogRenderer, RecordingRenderer};
pub use time::{FixedRateLimiter, ManualClock, SystemClock, Unlimited};

use glam::{DVec2, IVec2};

use crate::sim::TickInput;

/// Wall-clock time source
pub trait Clock {
    /// Seconds since an arbitrary fixed origin
    fn now(&self) -> f64;
}

/// Caps the loop at a target tick rate
pub trait FrameLimiter {
    /// Block until the next tick is due
    fn wait(&mut self);
}

/// Keyboard/window state, sampled once per tick
pub trait InputSource {
    fn poll(&mut self) -> TickInput;
}

/// Draw calls; the implementation owns all pixels
pub trait Renderer {
    fn draw_image(&mut self, image: ImageId, pos: IVec2);
    /// Draw centered on the unrotated sprite's center, rotated by `angle` degrees
    fn draw_rotated(&mut self, image: ImageId, pos: DVec2, angle: f64);
    fn draw_text(&mut self, text: &str, pos: IVec2);
    fn draw_text_centered(&mut self, text: &str);
    fn present(&mut self);
}
