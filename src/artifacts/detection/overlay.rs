use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_hollow_rect_mut, draw_line_segment_mut};
use imageproc::rect::Rect;

use crate::artifacts::area::DrawingArea;

const OUTER: Rgb<u8> = Rgb([0, 255, 0]);
const TOP_EXCLUSION: Rgb<u8> = Rgb([0, 255, 255]);
const VISA_EXCLUSION: Rgb<u8> = Rgb([255, 0, 0]);
const OUTLINE: Rgb<u8> = Rgb([255, 255, 0]);
const CENTER: Rgb<u8> = Rgb([255, 0, 255]);

pub(crate) fn rect_between(x1: i32, y1: i32, x2: i32, y2: i32) -> Rect {
    let width = (x2 - x1).unsigned_abs().max(1);
    let height = (y2 - y1).unsigned_abs().max(1);
    Rect::at(x1.min(x2), y1.min(y2)).of_size(width, height)
}

/// Paint the detected boundary, both exclusions and the centre onto a copy
/// of the screenshot.
pub fn render_overlay(screenshot: &RgbImage, area: &DrawingArea) -> RgbImage {
    let mut canvas = screenshot.clone();

    // thicken by drawing each rectangle twice, one pixel apart
    for inset in 0..2 {
        draw_hollow_rect_mut(
            &mut canvas,
            rect_between(
                area.left + inset,
                area.top + inset,
                area.right - inset,
                area.bottom - inset,
            ),
            OUTER,
        );
        draw_hollow_rect_mut(
            &mut canvas,
            rect_between(
                area.left + inset,
                area.top + inset,
                area.top_excl_right - inset,
                area.top_excl_bottom - inset,
            ),
            TOP_EXCLUSION,
        );
        draw_hollow_rect_mut(
            &mut canvas,
            rect_between(
                area.cutout_left + inset,
                area.cutout_top + inset,
                area.right - inset,
                area.bottom - inset,
            ),
            VISA_EXCLUSION,
        );
    }

    let outline = area.outline();
    for (i, &(x1, y1)) in outline.iter().enumerate() {
        let (x2, y2) = outline[(i + 1) % outline.len()];
        draw_line_segment_mut(
            &mut canvas,
            (x1 as f32, y1 as f32),
            (x2 as f32, y2 as f32),
            OUTLINE,
        );
    }

    let (cx, cy) = area.center();
    draw_filled_circle_mut(&mut canvas, (cx, cy), 8, CENTER);

    canvas
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_marks_center_and_outline() {
        let screenshot = RgbImage::new(500, 700);
        let area = DrawingArea {
            top: 100,
            left: 50,
            right: 450,
            bottom: 600,
            cutout_left: 300,
            cutout_top: 450,
            top_excl_right: 120,
            top_excl_bottom: 180,
        };

        let overlay = render_overlay(&screenshot, &area);
        let (cx, cy) = area.center();

        assert_eq!(*overlay.get_pixel(cx as u32, cy as u32), CENTER);
        assert_eq!(*overlay.get_pixel(300, 300), Rgb([0, 0, 0]));
        assert_ne!(*overlay.get_pixel(450, 300), Rgb([0, 0, 0]));
    }
}
