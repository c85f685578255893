//! Drawing-area detection from a screenshot
//!
//! The pipeline has no hard-coded screen geometry:
//!
//! 1. `card_region`: find the card, the largest light blob on the dark page
//! 2. `lines`: find the white dotted boundary lines inside the card
//! 3. `boundary`: pick, per edge, the strongest line in the band where that
//!    edge is expected, falling back to typical proportions
//! 4. `overlay`: optionally paint the result for inspection

pub mod boundary;
pub mod card_region;
pub mod lines;
pub mod overlay;

pub use boundary::{Detection, detect_boundary};

use crate::errors::DetectionError;
use image::DynamicImage;

pub fn decode_screenshot(bytes: &[u8]) -> Result<DynamicImage, DetectionError> {
    Ok(image::load_from_memory(bytes)?)
}

pub fn detect_from_image(image: &DynamicImage) -> Result<Detection, DetectionError> {
    tracing::info!(width = image.width(), height = image.height(), "screenshot");
    detect_boundary(&image.to_luma8())
}
