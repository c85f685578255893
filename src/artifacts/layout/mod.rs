//! Placing paths on the screen
//!
//! - `scale`: fit a whole extracted image into the drawing area (CLI path)
//! - `transform`: fit paths into the usable frame, then apply user offset,
//!   scale, rotation and flips (web UI layers)
//!
//! Either way the result is clipped point by point against
//! [`DrawingArea::is_inside`].

pub mod scale;
pub mod transform;

pub use scale::{FitOptions, scale_paths_to_area};
pub use transform::{FRAME_MARGIN, Flip, Frame, Placement, Transform};

use crate::artifacts::area::DrawingArea;
use crate::artifacts::geometry::{Path, is_drawable};

/// Transform `paths` into screen space and clip them to `area`.
pub fn place_paths(
    paths: &[Path],
    transform: &Transform,
    frame: &Frame,
    area: &DrawingArea,
) -> Vec<Path> {
    let Some(placement) = transform.placement(paths, frame) else {
        return Vec::new();
    };

    paths
        .iter()
        .map(|path| {
            path.iter()
                .map(|p| placement.apply(*p))
                .filter(|p| area.is_inside(p.x, p.y))
                .collect::<Path>()
        })
        .filter(is_drawable)
        .collect()
}
