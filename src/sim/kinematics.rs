//! Shared car kinematics
//!
//! Every car owns a `Kinematics` body. The `Car` trait provides the common
//! throttle/brake/steer behavior on top of it and funnels all movement through
//! `Car::advance`, which the player uses as-is and the computer overrides with
//! its waypoint steering.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::heading_delta;

/// Steering direction for a single rotation step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Left,
    Right,
}

/// Position, heading and speed of a car
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Kinematics {
    /// Top-left corner of the sprite (sub-pixel)
    pub pos: DVec2,
    /// Heading in degrees, unbounded
    pub angle: f64,
    /// Signed speed along the heading
    pub vel: f64,
    pub max_vel: f64,
    /// Degrees per tick
    pub rotation_vel: f64,
    /// Velocity delta per tick
    pub acceleration: f64,
    /// Where `reset` puts the car
    pub start_pos: DVec2,
}

impl Kinematics {
    pub fn new(start_pos: DVec2, max_vel: f64, rotation_vel: f64, acceleration: f64) -> Self {
        Self {
            pos: start_pos,
            angle: 0.0,
            vel: 0.0,
            max_vel,
            rotation_vel,
            acceleration,
            start_pos,
        }
    }

    /// Reverse gear tops out at half the forward speed
    #[inline]
    pub fn max_reverse_vel(&self) -> f64 {
        -self.max_vel / 2.0
    }

    /// Move one step along the current heading at the current velocity
    #[inline]
    pub fn apply_motion(&mut self) {
        self.pos += heading_delta(self.angle, self.vel);
    }

    pub fn rotate(&mut self, turn: Turn) {
        match turn {
            Turn::Left => self.angle += self.rotation_vel,
            Turn::Right => self.angle -= self.rotation_vel,
        }
    }

    /// Back to the start position, facing up, stopped
    pub fn reset(&mut self) {
        self.pos = self.start_pos;
        self.angle = 0.0;
        self.vel = 0.0;
    }
}

/// Common behavior of the player and computer cars
pub trait Car {
    fn body(&self) -> &Kinematics;
    fn body_mut(&mut self) -> &mut Kinematics;

    /// One motion step. Variants with their own steering override this.
    fn advance(&mut self) {
        self.body_mut().apply_motion();
    }

    fn reset(&mut self) {
        self.body_mut().reset();
    }

    fn rotate(&mut self, turn: Turn) {
        self.body_mut().rotate(turn);
    }

    fn accelerate_forward(&mut self) {
        let body = self.body_mut();
        body.vel = (body.vel + body.acceleration).min(body.max_vel);
        self.advance();
    }

    fn accelerate_backward(&mut self) {
        let body = self.body_mut();
        body.vel = (body.vel - body.acceleration).max(body.max_reverse_vel());
        self.advance();
    }

    #[inline]
    fn pos(&self) -> DVec2 {
        self.body().pos
    }

    #[inline]
    fn angle(&self) -> f64 {
        self.body().angle
    }

    #[inline]
    fn vel(&self) -> f64 {
        self.body().vel
    }
}
