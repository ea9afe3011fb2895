//! The scripted opponent
//!
//! The computer car drives at constant speed and steers toward the next point
//! of a fixed racing line. Each tick it turns at most `rotation_vel` degrees
//! toward the target, taking the short way round, and snaps onto the exact
//! heading once it is within one tick's budget so it does not oscillate.

use glam::{DVec2, IVec2};
use serde::{Deserialize, Serialize};

use super::kinematics::{Car, Kinematics};
use crate::settings::CarTuning;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputerCar {
    body: Kinematics,
    path: Vec<IVec2>,
    /// Index of the waypoint being chased; equals `path.len()` once the line is done
    current_point: usize,
    /// Sprite size, used for the waypoint reach test
    size: IVec2,
    /// Per-level speed increment
    level_step: f64,
}

impl ComputerCar {
    pub fn new(tuning: &CarTuning, path: Vec<IVec2>, size: IVec2, level_step: f64) -> Self {
        let mut body = Kinematics::new(
            DVec2::from(tuning.start),
            tuning.max_vel,
            tuning.rotation_vel,
            tuning.acceleration,
        );
        body.vel = tuning.max_vel;
        Self {
            body,
            path,
            current_point: 0,
            size,
            level_step,
        }
    }

    pub fn path(&self) -> &[IVec2] {
        &self.path
    }

    pub fn current_point(&self) -> usize {
        self.current_point
    }

    /// True once every waypoint has been reached
    pub fn finished_path(&self) -> bool {
        self.current_point >= self.path.len()
    }

    /// Heading (degrees) that points the car at `target`
    pub fn desired_angle(&self, target: IVec2) -> f64 {
        let diff_x = f64::from(target.x) - self.body.pos.x;
        let diff_y = f64::from(target.y) - self.body.pos.y;

        let mut radians = if diff_y == 0.0 {
            std::f64::consts::FRAC_PI_2
        } else {
            (diff_x / diff_y).atan()
        };

        // atan only covers half the circle; targets below the car need the other half
        if f64::from(target.y) > self.body.pos.y {
            radians += std::f64::consts::PI;
        }

        radians.to_degrees()
    }

    /// Rotate toward the current waypoint by at most `rotation_vel` degrees
    pub fn steer(&mut self) {
        let Some(&target) = self.path.get(self.current_point) else {
            return;
        };

        let mut difference = self.body.angle - self.desired_angle(target);
        if difference >= 180.0 {
            difference -= 360.0;
        }

        let step = self.body.rotation_vel.min(difference.abs());
        if difference > 0.0 {
            self.body.angle -= step;
        } else {
            self.body.angle += step;
        }
    }

    /// Advance to the next waypoint once the sprite rectangle covers the current one
    pub fn update_path_point(&mut self) {
        let Some(&target) = self.path.get(self.current_point) else {
            return;
        };

        // Rect corner truncates like the sprite blit position
        let min = IVec2::new(self.body.pos.x as i32, self.body.pos.y as i32);
        let max = min + self.size;
        let inside = target.x >= min.x && target.x < max.x && target.y >= min.y && target.y < max.y;

        if inside {
            self.current_point += 1;
            log::debug!(
                "computer reached waypoint {}/{}",
                self.current_point,
                self.path.len()
            );
        }
    }

    /// Reset for `level` and speed up: base speed plus one step per level, plus one.
    ///
    /// The result is not capped and overtakes the player's top speed at high levels.
    pub fn advance_level(&mut self, level: u32) {
        self.reset();
        self.body.vel = self.body.max_vel + f64::from(level + 1) * self.level_step;
        self.current_point = 0;
        log::info!("computer speed for level {}: {:.2}", level, self.body.vel);
    }
}

impl Car for ComputerCar {
    fn body(&self) -> &Kinematics {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Kinematics {
        &mut self.body
    }

    /// Steer, check the waypoint, then take the shared motion step.
    /// Holds position once the path is exhausted.
    fn advance(&mut self) {
        if self.finished_path() {
            return;
        }

        self.steer();
        self.update_path_point();
        self.body.apply_motion();
    }

    fn reset(&mut self) {
        self.body.reset();
        self.body.vel = self.body.max_vel;
        self.current_point = 0;
    }
}
