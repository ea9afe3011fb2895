//! The human-driven car

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::kinematics::{Car, Kinematics, Turn};
use crate::settings::CarTuning;

/// Logical driving actions sampled once per tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Controls {
    pub left: bool,
    pub right: bool,
    pub throttle: bool,
    pub brake: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerCar {
    body: Kinematics,
}

impl PlayerCar {
    pub fn new(tuning: &CarTuning) -> Self {
        Self {
            body: Kinematics::new(
                DVec2::from(tuning.start),
                tuning.max_vel,
                tuning.rotation_vel,
                tuning.acceleration,
            ),
        }
    }

    /// Rolling friction: lose half an acceleration step, never rolling backwards
    pub fn decelerate_when_idle(&mut self) {
        self.body.vel = (self.body.vel - self.body.acceleration / 2.0).max(0.0);
        self.advance();
    }

    /// Inelastic rebound off a wall: reverse at half speed and step once
    pub fn bounce(&mut self) {
        self.body.vel = -self.body.vel / 2.0;
        self.advance();
    }

    /// Apply one tick of player input.
    ///
    /// Steering and throttle are independent; with neither throttle nor brake
    /// held the car coasts down.
    pub fn drive(&mut self, controls: &Controls) {
        if controls.left {
            self.rotate(Turn::Left);
        }
        if controls.right {
            self.rotate(Turn::Right);
        }

        let mut moved = false;
        if controls.throttle {
            moved = true;
            self.accelerate_forward();
        }
        if controls.brake {
            moved = true;
            self.accelerate_backward();
        }

        if !moved {
            self.decelerate_when_idle();
        }
    }
}

impl Car for PlayerCar {
    fn body(&self) -> &Kinematics {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Kinematics {
        &mut self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    fn player() -> PlayerCar {
        PlayerCar::new(&Settings::default().player)
    }

    #[test]
    fn test_starts_at_rest() {
        let car = player();
        assert_eq!(car.pos(), DVec2::new(140.0, 150.0));
        assert_eq!(car.angle(), 0.0);
        assert_eq!(car.vel(), 0.0);
    }

    #[test]
    fn test_idle_deceleration_stops_at_zero() {
        let mut car = player();
        car.body_mut().vel = 0.1;
        car.decelerate_when_idle();
        assert!((car.vel() - 0.06).abs() < 1e-12);
        car.decelerate_when_idle();
        assert!((car.vel() - 0.02).abs() < 1e-12);
        car.decelerate_when_idle();
        assert_eq!(car.vel(), 0.0);
        car.decelerate_when_idle();
        assert_eq!(car.vel(), 0.0);
    }

    #[test]
    fn test_idle_deceleration_cancels_reverse() {
        let mut car = player();
        car.body_mut().vel = -0.5;
        car.decelerate_when_idle();
        assert_eq!(car.vel(), 0.0);
    }

    #[test]
    fn test_bounce_reverses_and_moves() {
        let mut car = player();
        car.body_mut().vel = 2.0;
        car.bounce();
        assert_eq!(car.vel(), -1.0);
        // Facing up with negative velocity pushes the car down
        assert!((car.pos().y - 151.0).abs() < 1e-12);
    }

    #[test]
    fn test_bounce_at_rest_is_noop() {
        let mut car = player();
        car.bounce();
        assert_eq!(car.vel(), 0.0);
        assert_eq!(car.pos(), DVec2::new(140.0, 150.0));
    }

    #[test]
    fn test_drive_throttle_and_steer() {
        let mut car = player();
        car.drive(&Controls {
            left: true,
            throttle: true,
            ..Default::default()
        });
        assert_eq!(car.angle(), 4.0);
        assert!((car.vel() - 0.08).abs() < 1e-12);
    }

    #[test]
    fn test_drive_without_pedals_coasts() {
        let mut car = player();
        car.body_mut().vel = 1.0;
        car.drive(&Controls {
            right: true,
            ..Default::default()
        });
        assert_eq!(car.angle(), -4.0);
        assert!((car.vel() - 0.96).abs() < 1e-12);
    }

    #[test]
    fn test_drive_both_pedals_applies_both() {
        let mut car = player();
        car.drive(&Controls {
            throttle: true,
            brake: true,
            ..Default::default()
        });
        // +0.08 then -0.08
        assert!(car.vel().abs() < 1e-12);
    }
}
