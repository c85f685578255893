//! Offline rendering of what would be drawn
//!
//! The preview is a black image in screen coordinates, large enough to hold
//! the drawing area plus a border, with the area outline and every path.

use std::path::Path as FsPath;

use anyhow::Context;
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_hollow_rect_mut, draw_line_segment_mut};

use crate::artifacts::area::{DrawingArea, MAX_SCREEN_DIMENSION};
use crate::artifacts::detection::overlay::rect_between;
use crate::artifacts::geometry::Path;

const BORDER: i32 = 100;
const OUTLINE: Rgb<u8> = Rgb([50, 50, 50]);
const VISA_EXCLUSION: Rgb<u8> = Rgb([50, 30, 30]);
const PATH_COLORS: [Rgb<u8>; 4] = [
    Rgb([0, 255, 0]),
    Rgb([255, 255, 0]),
    Rgb([0, 255, 255]),
    Rgb([255, 0, 255]),
];

pub const PREVIEW_FILE: &str = "draw_preview.png";

/// The canvas never grows past a screen's worth of pixels plus the border,
/// whatever `area` claims.
pub fn render_preview(paths: &[Path], area: &DrawingArea) -> RgbImage {
    let limit = MAX_SCREEN_DIMENSION + BORDER;
    let width = (area.right + BORDER).clamp(1, limit) as u32;
    let height = (area.bottom + BORDER).clamp(1, limit) as u32;
    let mut canvas = RgbImage::new(width, height);

    draw_hollow_rect_mut(
        &mut canvas,
        rect_between(area.left, area.top, area.right, area.bottom),
        OUTLINE,
    );
    draw_hollow_rect_mut(
        &mut canvas,
        rect_between(area.cutout_left, area.cutout_top, area.right, area.bottom),
        VISA_EXCLUSION,
    );

    for (i, path) in paths.iter().enumerate() {
        let color = PATH_COLORS[i % PATH_COLORS.len()];
        for pair in path.windows(2) {
            draw_line_segment_mut(
                &mut canvas,
                (pair[0].x as f32, pair[0].y as f32),
                (pair[1].x as f32, pair[1].y as f32),
                color,
            );
        }
    }

    canvas
}

pub fn save_preview(paths: &[Path], area: &DrawingArea, target: &FsPath) -> anyhow::Result<()> {
    render_preview(paths, area)
        .save(target)
        .with_context(|| format!("Failed to write preview: {}", target.display()))?;
    tracing::info!(path = %target.display(), "saved preview");
    Ok(())
}
