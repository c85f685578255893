use crate::artifacts::core::{binarize, contour_area, external_contours};
use crate::errors::DetectionError;
use image::GrayImage;

/// Anything brighter than this is part of the card rather than the dark
/// page background.
const CARD_THRESHOLD: u8 = 25;

/// Bounding box of the card preview on the screenshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl std::fmt::Display for CardRegion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "x={}, y={}, w={}, h={}",
            self.x, self.y, self.width, self.height
        )
    }
}

/// The card is the largest lighter blob on the dark background.
pub fn find_card_region(gray: &GrayImage) -> Result<CardRegion, DetectionError> {
    let mask = binarize(gray, |v| v > CARD_THRESHOLD);

    let card = external_contours(&mask)
        .into_iter()
        .max_by(|a, b| contour_area(&a.points).total_cmp(&contour_area(&b.points)))
        .ok_or(DetectionError::NoCardRegion)?;

    let xs = card.points.iter().map(|p| p.x);
    let ys = card.points.iter().map(|p| p.y);
    let (min_x, max_x) = (xs.clone().min(), xs.max());
    let (min_y, max_y) = (ys.clone().min(), ys.max());

    match (min_x, max_x, min_y, max_y) {
        (Some(min_x), Some(max_x), Some(min_y), Some(max_y)) => Ok(CardRegion {
            x: min_x as u32,
            y: min_y as u32,
            width: (max_x - min_x + 1) as u32,
            height: (max_y - min_y + 1) as u32,
        }),
        _ => Err(DetectionError::NoCardRegion),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    #[test]
    fn largest_bright_blob_wins() {
        let screen = GrayImage::from_fn(200, 300, |x, y| {
            let card = (20..180).contains(&x) && (100..220).contains(&y);
            let badge = (5..15).contains(&x) && (5..15).contains(&y);
            Luma([if card { 60 } else if badge { 200 } else { 10 }])
        });

        let card = find_card_region(&screen).unwrap();

        assert_eq!(
            card,
            CardRegion {
                x: 20,
                y: 100,
                width: 160,
                height: 120
            }
        );
    }

    #[test]
    fn all_dark_screen_has_no_card() {
        let screen = GrayImage::from_pixel(50, 50, Luma([5]));
        assert!(matches!(
            find_card_region(&screen),
            Err(DetectionError::NoCardRegion)
        ));
    }
}
