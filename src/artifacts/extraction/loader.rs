use std::path::Path;

use anyhow::Context;
use image::GrayImage;
use image::imageops::{FilterType, resize};

/// Longest side extraction works on. Larger inputs only add points the
/// device cannot reproduce anyway.
pub const MAX_IMAGE_SIZE: u32 = 500;

pub fn load_image(path: &Path, max_size: u32) -> anyhow::Result<GrayImage> {
    let image = image::open(path)
        .with_context(|| format!("Could not load image: {}", path.display()))?;
    Ok(fit_within(image.to_luma8(), max_size))
}

pub fn decode_image(bytes: &[u8], max_size: u32) -> anyhow::Result<GrayImage> {
    let image = image::load_from_memory(bytes).context("Could not decode image")?;
    Ok(fit_within(image.to_luma8(), max_size))
}

/// Downscale so the longer side is at most `max_size`; smaller images are
/// returned untouched.
pub fn fit_within(gray: GrayImage, max_size: u32) -> GrayImage {
    let (w, h) = gray.dimensions();
    let longest = w.max(h);
    if longest <= max_size {
        return gray;
    }

    let scale = f64::from(max_size) / f64::from(longest);
    let new_w = ((f64::from(w) * scale) as u32).max(1);
    let new_h = ((f64::from(h) * scale) as u32).max(1);
    tracing::debug!(from = ?(w, h), to = ?(new_w, new_h), "resizing input image");

    resize(&gray, new_w, new_h, FilterType::Triangle)
}
