use image::GrayImage;
use image::imageops::crop_imm;

use crate::artifacts::area::DrawingArea;
use crate::artifacts::core::binarize;
use crate::artifacts::detection::card_region::{CardRegion, find_card_region};
use crate::artifacts::detection::lines::{
    LineCandidate, cluster_lines, detect_lines, find_boundary_line,
};
use crate::errors::DetectionError;

/// The dotted boundary is white.
const BRIGHT_THRESHOLD: u8 = 200;
const CLUSTER_GAP: i32 = 40;
const MIN_EXPECTED_CLUSTERS: usize = 3;

/// Where one boundary edge is searched for, as fractions of the card
/// dimension, and where it is assumed to be when nothing is found there.
struct EdgeSearch {
    start: f64,
    end: f64,
    fallback: f64,
}

const TOP: EdgeSearch = EdgeSearch { start: 0.0, end: 0.15, fallback: 0.05 };
const BOTTOM: EdgeSearch = EdgeSearch { start: 0.80, end: 1.0, fallback: 0.92 };
const LEFT: EdgeSearch = EdgeSearch { start: 0.0, end: 0.15, fallback: 0.07 };
const RIGHT: EdgeSearch = EdgeSearch { start: 0.85, end: 1.0, fallback: 0.94 };
const TOP_EXCL_BOTTOM: EdgeSearch = EdgeSearch { start: 0.10, end: 0.25, fallback: 0.18 };
const TOP_EXCL_RIGHT: EdgeSearch = EdgeSearch { start: 0.12, end: 0.30, fallback: 0.18 };
const VISA_TOP: EdgeSearch = EdgeSearch { start: 0.45, end: 0.70, fallback: 0.58 };
const VISA_LEFT: EdgeSearch = EdgeSearch { start: 0.50, end: 0.75, fallback: 0.60 };

impl EdgeSearch {
    fn locate(&self, clusters: &[LineCandidate], dim: u32) -> i32 {
        find_boundary_line(clusters, self.start, self.end, dim)
            .unwrap_or_else(|| (f64::from(dim) * self.fallback) as i32)
    }
}

/// Everything a detection pass produces, kept for debug output.
#[derive(Debug)]
pub struct Detection {
    pub area: DrawingArea,
    pub card: CardRegion,
    pub horizontal: Vec<LineCandidate>,
    pub vertical: Vec<LineCandidate>,
    /// Bright-pixel mask of the card, card-relative
    pub bright: GrayImage,
}

/// Detect the drawing boundary purely from line positions, so any screen
/// size works.
pub fn detect_boundary(gray: &GrayImage) -> Result<Detection, DetectionError> {
    let card = find_card_region(gray)?;
    tracing::info!(%card, "card region");

    let card_gray = crop_imm(gray, card.x, card.y, card.width, card.height).to_image();
    let bright = binarize(&card_gray, |v| v > BRIGHT_THRESHOLD);

    let lines = detect_lines(&bright);
    let horizontal = cluster_lines(&lines.horizontal, CLUSTER_GAP);
    let vertical = cluster_lines(&lines.vertical, CLUSTER_GAP);

    tracing::debug!(
        horizontal = ?summarize(&horizontal),
        vertical = ?summarize(&vertical),
        "line clusters"
    );

    if horizontal.len() < MIN_EXPECTED_CLUSTERS || vertical.len() < MIN_EXPECTED_CLUSTERS {
        tracing::warn!("not enough lines detected, results may be inaccurate");
    }

    let (w, h) = (card.width, card.height);
    let top = TOP.locate(&horizontal, h);
    let bottom = BOTTOM.locate(&horizontal, h);
    let left = LEFT.locate(&vertical, w);
    let right = RIGHT.locate(&vertical, w);
    let top_excl_bottom = TOP_EXCL_BOTTOM.locate(&horizontal, h);
    let top_excl_right = TOP_EXCL_RIGHT.locate(&vertical, w);
    let visa_top = VISA_TOP.locate(&horizontal, h);
    let visa_left = VISA_LEFT.locate(&vertical, w);

    tracing::debug!(top, bottom, left, right, "outer boundary");
    tracing::debug!(top_excl_right, top_excl_bottom, visa_left, visa_top, "exclusions");

    let (ox, oy) = (card.x as i32, card.y as i32);
    let area = DrawingArea {
        top: oy + top,
        left: ox + left,
        right: ox + right,
        bottom: oy + bottom,
        cutout_left: ox + visa_left,
        cutout_top: oy + visa_top,
        top_excl_right: ox + top_excl_right,
        top_excl_bottom: oy + top_excl_bottom,
    };

    Ok(Detection {
        area,
        card,
        horizontal,
        vertical,
        bright,
    })
}

fn summarize(clusters: &[LineCandidate]) -> Vec<(i32, i64)> {
    clusters
        .iter()
        .map(|c| (c.position, c.length as i64))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    #[test]
    fn blank_card_falls_back_to_typical_proportions() {
        let screen = GrayImage::from_fn(420, 500, |x, y| {
            let card = (10..410).contains(&x) && (100..400).contains(&y);
            Luma([if card { 60 } else { 0 }])
        });

        let detection = detect_boundary(&screen).unwrap();

        assert_eq!((detection.card.width, detection.card.height), (400, 300));
        assert_eq!(
            detection.area,
            DrawingArea {
                top: 115,
                left: 38,
                right: 386,
                bottom: 376,
                cutout_left: 250,
                cutout_top: 274,
                top_excl_right: 82,
                top_excl_bottom: 154,
            }
        );
    }
}
