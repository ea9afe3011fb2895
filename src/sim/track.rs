//! Track geometry handed to the simulation
//!
//! The simulation only sees plain masks, offsets and sizes. Where they come
//! from (decoded sprite art, generated shapes) is up to the caller.

use glam::IVec2;

use super::collision::Obstacle;
use super::mask::CollisionMask;
use crate::consts::{FINISH_POS, TRACK_PATH};

/// Default sprite sizes for the built-in course
pub const TRACK_SIZE: IVec2 = IVec2::new(640, 640);
pub const CAR_SIZE: IVec2 = IVec2::new(19, 38);
pub const FINISH_SIZE: IVec2 = IVec2::new(108, 18);
/// Thickness of the built-in course's outer wall
const WALL_THICKNESS: u32 = 12;

/// Walls, finish line and racing line
#[derive(Debug, Clone)]
pub struct Track {
    pub size: IVec2,
    pub border: Obstacle,
    pub finish: Obstacle,
    /// Waypoints for the computer car
    pub path: Vec<IVec2>,
}

impl Track {
    pub fn new(size: IVec2, border: CollisionMask, finish: Obstacle, path: Vec<IVec2>) -> Self {
        Self {
            size,
            border: Obstacle::at_origin(border),
            finish,
            path,
        }
    }

    /// Open course walled in by a solid frame, with the standard finish line and racing line
    pub fn builtin() -> Self {
        let (w, h) = (TRACK_SIZE.x as u32, TRACK_SIZE.y as u32);
        let border = CollisionMask::from_fn(w, h, |x, y| {
            x < WALL_THICKNESS || y < WALL_THICKNESS || x >= w - WALL_THICKNESS || y >= h - WALL_THICKNESS
        });
        let finish = Obstacle::new(
            CollisionMask::filled(FINISH_SIZE.x as u32, FINISH_SIZE.y as u32),
            IVec2::from(FINISH_POS),
        );
        let path = TRACK_PATH.iter().map(|&p| IVec2::from(p)).collect();
        Self::new(TRACK_SIZE, border, finish, path)
    }
}

/// Collision footprints of the two car sprites
#[derive(Debug, Clone)]
pub struct Footprints {
    pub player: CollisionMask,
    pub computer: CollisionMask,
}

impl Footprints {
    pub fn new(player: CollisionMask, computer: CollisionMask) -> Self {
        Self { player, computer }
    }

    /// Solid rectangles of the default car size
    pub fn builtin() -> Self {
        let (w, h) = (CAR_SIZE.x as u32, CAR_SIZE.y as u32);
        Self::new(CollisionMask::filled(w, h), CollisionMask::filled(w, h))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_track_layout() {
        let track = Track::builtin();
        assert_eq!(track.path.len(), 18);
        assert_eq!(track.finish.offset, IVec2::new(100, 190));
        assert!(track.border.mask.get(0, 0));
        assert!(track.border.mask.get(639, 320));
        assert!(!track.border.mask.get(320, 320));
    }

    #[test]
    fn test_waypoints_are_inside_the_walls() {
        let track = Track::builtin();
        for p in &track.path {
            assert!(!track.border.mask.get(p.x, p.y), "waypoint {p} is in a wall");
        }
    }
}
