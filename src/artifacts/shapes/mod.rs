//! Shapes and text built directly in screen space
//!
//! Unlike extracted images these need no layout: they are generated around a
//! centre point that is either given, detected, or a fixed fallback. The
//! output is a list of [`Stroke`]s, each one path plus the pause the device
//! should take after drawing it.

pub mod font;
pub mod parametric;

use std::time::Duration;

use crate::ShapeKind;
use crate::artifacts::geometry::{Path, Point};
pub use font::{TextStyle, glyph_strokes, text_strokes};
pub use parametric::{circle, heart, spiral, star};

pub const DEFAULT_SIZE: i32 = 60;
/// Used when neither coordinates nor detection are available.
pub const FALLBACK_CENTER: Point = Point { x: 350, y: 850 };
/// Margin applied to a detected area before taking its centre.
pub const SHAPE_SAFE_MARGIN: i32 = 30;

/// Widest a line of text may get from the command line.
pub const CLI_TEXT_BUDGET: i32 = 400;
/// Widest a line of text may get from the interactive prompt.
pub const INTERACTIVE_TEXT_BUDGET: i32 = 350;
/// Text baseline sits this far above the centre.
const TEXT_RISE: i32 = 17;

const FIGURE_PAUSE: Duration = Duration::from_millis(300);
const GLYPH_PAUSE: Duration = Duration::from_millis(30);

#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub path: Path,
    pub pause_after: Duration,
}

impl Stroke {
    pub fn new(path: Path) -> Self {
        Stroke {
            path,
            pause_after: Duration::ZERO,
        }
    }

    pub fn with_pause(mut self, pause: Duration) -> Self {
        self.pause_after += pause;
        self
    }
}

pub fn shape_strokes(kind: ShapeKind, center: Point, size: i32) -> Vec<Stroke> {
    let path = match kind {
        ShapeKind::Heart => heart(center, size),
        ShapeKind::Star => star(center, size, None, parametric::STAR_POINTS),
        ShapeKind::Circle => circle(center, size, parametric::CIRCLE_SEGMENTS),
        ShapeKind::Spiral => spiral(center, size, parametric::SPIRAL_TURNS),
        ShapeKind::Demo => return demo(center, size),
    };
    vec![Stroke::new(path)]
}

/// Heart and star side by side above a small spiral.
pub fn demo(center: Point, size: i32) -> Vec<Stroke> {
    let Point { x: cx, y: cy } = center;
    vec![
        Stroke::new(heart(Point::new(cx - 80, cy - 60), size)).with_pause(FIGURE_PAUSE),
        Stroke::new(star(Point::new(cx + 80, cy - 60), size, None, parametric::STAR_POINTS))
            .with_pause(FIGURE_PAUSE),
        Stroke::new(spiral(Point::new(cx, cy + 80), size / 2, 2.0)),
    ]
}

/// Glyph width that keeps `text` within `budget` pixels, capped at the
/// default width.
pub fn fitted_char_width(text: &str, budget: i32) -> i32 {
    let len = text.chars().count().max(1) as i32;
    font::CHAR_WIDTH.min(budget / len)
}

/// One line of text centred on `center`, shrunk to fit `budget`.
pub fn centered_text(text: &str, center: Point, budget: i32) -> Vec<Stroke> {
    let style = TextStyle {
        char_width: fitted_char_width(text, budget),
        ..TextStyle::default()
    };
    let origin = Point::new(center.x - style.text_width(text) / 2, center.y - TEXT_RISE);

    text_strokes(text, origin, &style)
        .into_iter()
        .flat_map(|glyph| {
            let last = glyph.len().saturating_sub(1);
            glyph.into_iter().enumerate().map(move |(i, path)| {
                let stroke = Stroke::new(path).with_pause(GLYPH_PAUSE);
                if i == last {
                    stroke.with_pause(GLYPH_PAUSE)
                } else {
                    stroke
                }
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(ShapeKind::Heart, 51)]
    #[case(ShapeKind::Star, 11)]
    #[case(ShapeKind::Circle, 37)]
    #[case(ShapeKind::Spiral, 120)]
    fn single_shapes_are_one_stroke(#[case] kind: ShapeKind, #[case] points: usize) {
        let strokes = shape_strokes(kind, FALLBACK_CENTER, DEFAULT_SIZE);

        assert_eq!(strokes.len(), 1);
        assert_eq!(strokes[0].path.len(), points);
    }

    #[test]
    fn demo_pauses_between_figures() {
        let strokes = shape_strokes(ShapeKind::Demo, Point::new(400, 800), 60);

        assert_eq!(strokes.len(), 3);
        assert_eq!(strokes[0].pause_after, FIGURE_PAUSE);
        assert_eq!(strokes[2].pause_after, Duration::ZERO);
        // the spiral starts at its centre
        assert_eq!(strokes[2].path[0], Point::new(400, 880));
        assert_eq!(strokes[2].path.len(), 80);
    }

    #[rstest]
    #[case("HI", 400, 25)]
    #[case("HELLO WORLD AGAIN", 400, 23)]
    #[case("", 400, 25)]
    #[case("ABCDEFGHIJKLMNOPQRSTUVWXYZ", 350, 13)]
    fn char_width_fits_the_budget(#[case] text: &str, #[case] budget: i32, #[case] width: i32) {
        assert_eq!(fitted_char_width(text, budget), width);
    }

    #[test]
    fn text_is_centred_on_the_point() {
        let strokes = centered_text("T", Point::new(300, 500), CLI_TEXT_BUDGET);

        // one glyph 25 wide starting 12 px left of the centre
        assert_eq!(strokes[0].path[0], Point::new(288, 483));
        assert_eq!(strokes[0].path[1], Point::new(313, 483));
    }

    #[test]
    fn glyph_boundaries_get_an_extra_pause() {
        let strokes = centered_text("T", Point::new(300, 500), CLI_TEXT_BUDGET);

        assert_eq!(strokes.len(), 2);
        assert_eq!(strokes[0].pause_after, GLYPH_PAUSE);
        assert_eq!(strokes[1].pause_after, GLYPH_PAUSE * 2);
    }
}
