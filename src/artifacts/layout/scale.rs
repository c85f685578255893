use crate::artifacts::area::DrawingArea;
use crate::artifacts::extraction::ImagePaths;
use crate::artifacts::geometry::{Path, Point, is_drawable};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FitOptions {
    pub margin: i32,
    pub maintain_aspect: bool,
    /// Fit into the whole outer rectangle instead of the part left of the
    /// VISA exclusion. Whatever lands in an exclusion is clipped.
    pub use_full_area: bool,
}

impl Default for FitOptions {
    fn default() -> Self {
        FitOptions {
            margin: 20,
            maintain_aspect: true,
            use_full_area: false,
        }
    }
}

/// Map image-space paths onto the screen, centred inside the drawing area.
///
/// Points that fall outside the area are dropped; a path survives only if
/// at least two of its points do.
pub fn scale_paths_to_area(
    image: &ImagePaths,
    area: &DrawingArea,
    options: FitOptions,
) -> Vec<Path> {
    if image.paths.is_empty() || image.width == 0 || image.height == 0 {
        return Vec::new();
    }

    let margin = f64::from(options.margin);
    let right = if options.use_full_area {
        area.right
    } else {
        area.cutout_left
    };
    let available_w = f64::from(right - area.left) - 2.0 * margin;
    let available_h = f64::from(area.bottom - area.top) - 2.0 * margin;

    let src_w = f64::from(image.width);
    let src_h = f64::from(image.height);
    let (scale_x, scale_y) = if options.maintain_aspect {
        let scale = (available_w / src_w).min(available_h / src_h);
        (scale, scale)
    } else {
        (available_w / src_w, available_h / src_h)
    };

    let offset_x = f64::from(area.left) + margin + (available_w - src_w * scale_x) / 2.0;
    let offset_y = f64::from(area.top) + margin + (available_h - src_h * scale_y) / 2.0;

    image
        .paths
        .iter()
        .map(|path| {
            path.iter()
                .map(|p| {
                    Point::from_f64(
                        offset_x + f64::from(p.x) * scale_x,
                        offset_y + f64::from(p.y) * scale_y,
                    )
                })
                .filter(|p| area.is_inside(p.x, p.y))
                .collect::<Path>()
        })
        .filter(is_drawable)
        .collect()
}
