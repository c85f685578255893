use image::GrayImage;
use imageproc::contours::Contour;

use crate::artifacts::core::{all_contours, binarize, contour_area};
use crate::artifacts::extraction::image_paths::ImagePaths;
use crate::artifacts::extraction::simplified_path;
use crate::artifacts::geometry::Path;

const MIN_CONTOUR_AREA: f64 = 20.0;
const MIN_CLOSED_POINTS: usize = 3;

/// Which side of the threshold is ink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    /// Dark strokes on a light background
    DarkOnLight,
    /// Light strokes on a dark background
    LightOnDark,
}

/// Threshold the image and trace every border, nested ones included.
/// Suited to logos and line drawings.
pub fn extract_contours(
    img: &GrayImage,
    threshold: u8,
    simplify: f64,
    polarity: Polarity,
) -> ImagePaths {
    let binary = match polarity {
        Polarity::DarkOnLight => binarize(img, |v| v <= threshold),
        Polarity::LightOnDark => binarize(img, |v| v > threshold),
    };

    let paths = closed_paths(all_contours(&binary), MIN_CONTOUR_AREA, simplify);
    ImagePaths::new(paths, img.width(), img.height())
}

/// Drop small contours, simplify the rest and close each path by repeating
/// its first point.
pub(crate) fn closed_paths(contours: Vec<Contour<i32>>, min_area: f64, simplify: f64) -> Vec<Path> {
    contours
        .into_iter()
        .filter(|contour| contour_area(&contour.points) >= min_area)
        .map(|contour| simplified_path(&contour.points, simplify, true))
        .filter(|path| path.len() >= MIN_CLOSED_POINTS)
        .map(|mut path| {
            path.push(path[0]);
            path
        })
        .collect()
}
