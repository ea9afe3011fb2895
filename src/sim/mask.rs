//! Per-pixel collision masks
//!
//! A mask is a width x height grid of solid/empty cells, usually derived from
//! the alpha channel of a sprite. Overlap queries place a second mask at an
//! integer offset relative to this one.

use std::fmt;

use glam::IVec2;

use crate::consts::MASK_ALPHA_THRESHOLD;

/// Raw pixel buffer did not match the requested dimensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaskError {
    BufferSize { expected: usize, actual: usize },
}

impl fmt::Display for MaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaskError::BufferSize { expected, actual } => {
                write!(f, "rgba buffer has {actual} bytes, expected {expected}")
            }
        }
    }
}

impl std::error::Error for MaskError {}

/// Cells in a width x height grid, computed without `u32` overflow
#[inline]
fn cell_count(width: u32, height: u32) -> usize {
    width as usize * height as usize
}

/// Width of the column strips `overlap` searches, one machine word of bits
pub const SCAN_STRIP: i32 = 64;

/// Occupancy bitmap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollisionMask {
    width: u32,
    height: u32,
    /// Row-major
    cells: Vec<bool>,
}

impl CollisionMask {
    /// Empty mask
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![false; cell_count(width, height)],
        }
    }

    /// Fully solid mask
    pub fn filled(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![true; cell_count(width, height)],
        }
    }

    pub fn from_fn(width: u32, height: u32, mut solid: impl FnMut(u32, u32) -> bool) -> Self {
        let mut cells = Vec::with_capacity(cell_count(width, height));
        for y in 0..height {
            for x in 0..width {
                cells.push(solid(x, y));
            }
        }
        Self { width, height, cells }
    }

    /// Build from an RGBA8 buffer; a pixel is solid when its alpha is above the threshold
    pub fn from_alpha(width: u32, height: u32, rgba: &[u8]) -> Result<Self, MaskError> {
        let expected = cell_count(width, height) * 4;
        if rgba.len() != expected {
            return Err(MaskError::BufferSize {
                expected,
                actual: rgba.len(),
            });
        }
        let cells = rgba
            .chunks_exact(4)
            .map(|px| px[3] > MASK_ALPHA_THRESHOLD)
            .collect();
        Ok(Self { width, height, cells })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn size(&self) -> IVec2 {
        IVec2::new(self.width as i32, self.height as i32)
    }

    /// Solid test; anything outside the grid is empty
    pub fn get(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return false;
        }
        self.cells[y as usize * self.width as usize + x as usize]
    }

    pub fn set(&mut self, x: u32, y: u32, solid: bool) {
        if x < self.width && y < self.height {
            self.cells[y as usize * self.width as usize + x as usize] = solid;
        }
    }

    /// Number of solid cells
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// First cell solid in both masks with `other`'s top-left placed at `offset`.
    ///
    /// The point is in this mask's coordinates. The search walks this mask in
    /// vertical strips `SCAN_STRIP` columns wide, left strip first; each strip
    /// is scanned top to bottom and each row within it left to right. Masks
    /// with transparent corners can therefore report a lower point in an
    /// earlier strip ahead of a higher point in a later one.
    pub fn overlap(&self, other: &CollisionMask, offset: IVec2) -> Option<IVec2> {
        let x_start = offset.x.max(0);
        let y_start = offset.y.max(0);
        let x_end = (offset.x + other.width as i32).min(self.width as i32);
        let y_end = (offset.y + other.height as i32).min(self.height as i32);

        if x_start >= x_end || y_start >= y_end {
            return None;
        }

        let first_strip = x_start / SCAN_STRIP * SCAN_STRIP;
        (first_strip..x_end)
            .step_by(SCAN_STRIP as usize)
            .flat_map(|strip| {
                let (lo, hi) = (strip.max(x_start), (strip + SCAN_STRIP).min(x_end));
                (y_start..y_end).flat_map(move |y| (lo..hi).map(move |x| IVec2::new(x, y)))
            })
            .find(|p| self.get(p.x, p.y) && other.get(p.x - offset.x, p.y - offset.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_alpha_threshold() {
        // 2x1: alpha 127 is empty, 128 is solid
        let rgba = [255, 0, 0, 127, 0, 255, 0, 128];
        let mask = CollisionMask::from_alpha(2, 1, &rgba).unwrap();
        assert!(!mask.get(0, 0));
        assert!(mask.get(1, 0));
        assert_eq!(mask.count(), 1);
    }

    #[test]
    fn test_from_alpha_rejects_bad_buffer() {
        let err = CollisionMask::from_alpha(2, 2, &[0; 8]).unwrap_err();
        assert_eq!(
            err,
            MaskError::BufferSize {
                expected: 16,
                actual: 8
            }
        );
    }

    #[test]
    fn test_identical_masks_overlap_at_origin() {
        let a = CollisionMask::filled(10, 5);
        let b = CollisionMask::filled(10, 5);
        assert_eq!(a.overlap(&b, IVec2::ZERO), Some(IVec2::ZERO));
    }

    #[test]
    fn test_disjoint_offset_misses() {
        let a = CollisionMask::filled(10, 10);
        let b = CollisionMask::filled(4, 4);
        assert_eq!(a.overlap(&b, IVec2::new(10, 0)), None);
        assert_eq!(a.overlap(&b, IVec2::new(-4, 3)), None);
        assert_eq!(a.overlap(&b, IVec2::new(3, 10)), None);
    }

    #[test]
    fn test_overlap_point_is_in_self_coordinates() {
        let a = CollisionMask::filled(10, 10);
        let b = CollisionMask::filled(4, 4);
        assert_eq!(a.overlap(&b, IVec2::new(6, 7)), Some(IVec2::new(6, 7)));
        // Negative offset clips to the top-left of self
        assert_eq!(a.overlap(&b, IVec2::new(-2, -3)), Some(IVec2::ZERO));
    }

    #[test]
    fn test_empty_cells_do_not_collide() {
        // Hollow frame around a 6x6 area
        let frame = CollisionMask::from_fn(6, 6, |x, y| x == 0 || y == 0 || x == 5 || y == 5);
        let dot = CollisionMask::filled(2, 2);
        assert_eq!(frame.overlap(&dot, IVec2::new(2, 2)), None);
        assert_eq!(frame.overlap(&dot, IVec2::new(4, 2)), Some(IVec2::new(5, 2)));
    }

    #[test]
    fn test_scan_order_within_a_strip() {
        let mut a = CollisionMask::new(5, 5);
        a.set(4, 1, true);
        a.set(0, 3, true);
        let b = CollisionMask::filled(5, 5);
        assert_eq!(a.overlap(&b, IVec2::ZERO), Some(IVec2::new(4, 1)));
    }

    #[test]
    fn test_earlier_strip_wins_over_higher_row() {
        // Finish-line shape with a transparent top-left corner: the left strip
        // only touches on row 5, the right strip already on row 0
        let mut a = CollisionMask::new(130, 10);
        a.set(70, 0, true);
        a.set(10, 5, true);
        let b = CollisionMask::filled(130, 10);
        assert_eq!(a.overlap(&b, IVec2::ZERO), Some(IVec2::new(10, 5)));

        // Once the left strip is out of range the right strip's top row is found
        let c = CollisionMask::filled(60, 10);
        assert_eq!(a.overlap(&c, IVec2::new(65, 0)), Some(IVec2::new(70, 0)));
    }

    #[test]
    fn test_strips_are_aligned_to_self() {
        // Offset 60 starts mid-strip: columns 60..63 precede the strip at 64
        let mut a = CollisionMask::new(128, 4);
        a.set(62, 3, true);
        a.set(64, 0, true);
        let b = CollisionMask::filled(20, 4);
        assert_eq!(a.overlap(&b, IVec2::new(60, 0)), Some(IVec2::new(62, 3)));
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_cell_count_does_not_overflow_u32() {
        assert_eq!(cell_count(65_536, 65_536), 1 << 32);
        assert_eq!(cell_count(u32::MAX, 2), 2 * u32::MAX as usize);
    }

    #[test]
    fn test_get_outside_is_empty() {
        let a = CollisionMask::filled(3, 3);
        assert!(!a.get(-1, 0));
        assert!(!a.get(0, 3));
        assert_eq!(a.size(), IVec2::new(3, 3));
    }
}
