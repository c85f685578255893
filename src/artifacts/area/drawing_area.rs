//! The region of the card screen that accepts strokes
//!
//! The dotted boundary is a rectangle with two rectangles carved out of it:
//!
//! ```text
//! +--------+---------------------------+
//! | EXCL   |                           |
//! | (top-  |     DRAWABLE AREA         |
//! | left)  |                           |
//! +--------+                    +------+
//! |                             | EXCL |
//! |                             |(visa)|
//! +-----------------------------+------+
//! ```
//!
//! All coordinates are absolute screen pixels.

use serde::{Deserialize, Serialize};

use crate::errors::AreaError;

/// Largest screen coordinate an area may reach.
pub const MAX_SCREEN_DIMENSION: i32 = 8192;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawingArea {
    pub top: i32,
    pub left: i32,
    pub right: i32,
    pub bottom: i32,
    /// Left edge of the bottom-right (VISA logo) exclusion
    pub cutout_left: i32,
    /// Top edge of the bottom-right (VISA logo) exclusion
    pub cutout_top: i32,
    /// Right edge of the top-left exclusion
    pub top_excl_right: i32,
    /// Bottom edge of the top-left exclusion
    pub top_excl_bottom: i32,
}

impl DrawingArea {
    /// Whether a stroke may touch `(x, y)`.
    pub fn is_inside(&self, x: i32, y: i32) -> bool {
        if !(self.left <= x && x <= self.right && self.top <= y && y <= self.bottom) {
            return false;
        }
        if x <= self.top_excl_right && y <= self.top_excl_bottom {
            return false;
        }
        if x >= self.cutout_left && y >= self.cutout_top {
            return false;
        }
        true
    }

    /// Reject areas no screen could have: off-screen or oversized bounds,
    /// no drawable extent, exclusions sticking out of the outer rectangle.
    pub fn validate(&self) -> Result<(), AreaError> {
        if self.left < 0 || self.top < 0 {
            return Err(AreaError::OffScreen);
        }
        if self.right > MAX_SCREEN_DIMENSION || self.bottom > MAX_SCREEN_DIMENSION {
            return Err(AreaError::TooLarge(MAX_SCREEN_DIMENSION));
        }
        if self.left >= self.right || self.top >= self.bottom {
            return Err(AreaError::Empty);
        }

        let horizontal = self.left..=self.right;
        let vertical = self.top..=self.bottom;
        if !horizontal.contains(&self.top_excl_right)
            || !horizontal.contains(&self.cutout_left)
            || !vertical.contains(&self.top_excl_bottom)
            || !vertical.contains(&self.cutout_top)
        {
            return Err(AreaError::ExclusionOutOfBounds);
        }
        Ok(())
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Centre of the main drawable block, the part left of the VISA
    /// exclusion and below the top-left one.
    pub fn center(&self) -> (i32, i32) {
        let main_left = self.left.max(self.top_excl_right);
        let main_top = self.top.max(self.top_excl_bottom);
        let cx = main_left + (self.cutout_left - main_left) / 2;
        let cy = main_top + (self.bottom - main_top) / 2;
        (cx, cy)
    }

    /// Shrink the area by `margin` away from every boundary, exclusions included.
    pub fn safe_bounds(&self, margin: i32) -> Self {
        DrawingArea {
            top: self.top + margin,
            left: self.left + margin,
            right: self.right - margin,
            bottom: self.bottom - margin,
            cutout_left: self.cutout_left - margin,
            cutout_top: self.cutout_top - margin,
            top_excl_right: self.top_excl_right + margin,
            top_excl_bottom: self.top_excl_bottom + margin,
        }
    }

    /// Largest rectangle clear of both exclusions, as `(x1, y1, x2, y2)`.
    pub fn usable_rect(&self, margin: i32) -> (i32, i32, i32, i32) {
        (
            self.left.max(self.top_excl_right) + margin,
            self.top.max(self.top_excl_bottom) + margin,
            self.cutout_left - margin,
            self.bottom - margin,
        )
    }

    /// Corners of the drawable outline, clockwise from the top edge.
    pub fn outline(&self) -> [(i32, i32); 8] {
        [
            (self.top_excl_right, self.top),
            (self.right, self.top),
            (self.right, self.cutout_top),
            (self.cutout_left, self.cutout_top),
            (self.cutout_left, self.bottom),
            (self.left, self.bottom),
            (self.left, self.top_excl_bottom),
            (self.top_excl_right, self.top_excl_bottom),
        ]
    }
}

impl std::fmt::Display for DrawingArea {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "DrawingArea(bounds=({},{})-({},{}), top_excl=({},{}), visa_excl=({},{}))",
            self.left,
            self.top,
            self.right,
            self.bottom,
            self.top_excl_right,
            self.top_excl_bottom,
            self.cutout_left,
            self.cutout_top
        )
    }
}
