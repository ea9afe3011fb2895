//! Collision queries between cars and track obstacles
//!
//! Cars collide through the mask of their unrotated sprite, placed with its
//! top-left corner at the car position. Obstacles are masks placed at a fixed
//! world offset. All queries are read-only.

use glam::IVec2;

use super::kinematics::Car;
use super::mask::CollisionMask;

/// A static mask placed in the world
#[derive(Debug, Clone)]
pub struct Obstacle {
    pub mask: CollisionMask,
    /// World position of the mask's top-left corner
    pub offset: IVec2,
}

impl Obstacle {
    pub fn new(mask: CollisionMask, offset: IVec2) -> Self {
        Self { mask, offset }
    }

    /// Obstacle covering the world from the origin
    pub fn at_origin(mask: CollisionMask) -> Self {
        Self::new(mask, IVec2::ZERO)
    }
}

/// Direction in which a car entered the finish line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishCrossing {
    Forward,
    Backward,
}

impl FinishCrossing {
    /// Classify from the first intersection point on the finish mask.
    ///
    /// Contact on the mask's top row means the car came in from above, i.e. the
    /// wrong way round the track. This relies on the finish sprite being a flat
    /// horizontal strip and is not a general rule. Which point counts as
    /// "first" follows the strip order of `CollisionMask::overlap`.
    pub fn from_point(poi: IVec2) -> Self {
        if poi.y == 0 {
            FinishCrossing::Backward
        } else {
            FinishCrossing::Forward
        }
    }
}

/// First pixel where the car's footprint touches the obstacle, in obstacle-local coordinates
pub fn collide<C: Car + ?Sized>(car: &C, footprint: &CollisionMask, obstacle: &Obstacle) -> Option<IVec2> {
    let pos = car.pos();
    // Truncates toward zero
    let offset = IVec2::new(
        (pos.x - f64::from(obstacle.offset.x)) as i32,
        (pos.y - f64::from(obstacle.offset.y)) as i32,
    );
    obstacle.mask.overlap(footprint, offset)
}
