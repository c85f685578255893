//! Core utilities and shared raster helpers
//!
//! Detection and extraction both work on 8-bit grayscale rasters and both
//! need the same handful of pixel-level operations: thresholding into a
//! binary mask, picking out outer contours, measuring contour area.

use image::{GrayImage, Luma};
use imageproc::contours::{Contour, find_contours};
use imageproc::point::Point as RasterPoint;

pub const SET: u8 = 255;
pub const UNSET: u8 = 0;

/// Binary mask with [`SET`] wherever `keep` accepts the pixel value.
pub fn binarize(gray: &GrayImage, keep: impl Fn(u8) -> bool) -> GrayImage {
    GrayImage::from_fn(gray.width(), gray.height(), |x, y| {
        let Luma([value]) = *gray.get_pixel(x, y);
        Luma([if keep(value) { SET } else { UNSET }])
    })
}

/// Every border in the mask, outer and hole borders alike.
pub fn all_contours(mask: &GrayImage) -> Vec<Contour<i32>> {
    find_contours::<i32>(mask)
}

/// Only the outermost borders (those without a parent).
pub fn external_contours(mask: &GrayImage) -> Vec<Contour<i32>> {
    find_contours::<i32>(mask)
        .into_iter()
        .filter(|contour| contour.parent.is_none())
        .collect()
}

/// Unsigned polygon area of a traced border.
pub fn contour_area(points: &[RasterPoint<i32>]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    imageproc::geometry::contour_area(points).abs()
}

/// Keep only the points where a traced border changes direction, so a
/// straight run of pixels collapses to its two ends. The first and last
/// points always survive.
pub fn compress_chain(points: &[RasterPoint<i32>]) -> Vec<RasterPoint<i32>> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let step = |a: &RasterPoint<i32>, b: &RasterPoint<i32>| ((b.x - a.x).signum(), (b.y - a.y).signum());
    let mut kept = vec![points[0]];
    kept.extend(
        points
            .windows(3)
            .filter(|w| step(&w[0], &w[1]) != step(&w[1], &w[2]))
            .map(|w| w[1]),
    );
    kept.push(points[points.len() - 1]);
    kept
}

pub fn mean_and_std_dev(gray: &GrayImage) -> (f64, f64) {
    let count = f64::from(gray.width()) * f64::from(gray.height());
    if count == 0.0 {
        return (0.0, 0.0);
    }

    let sum: f64 = gray.pixels().map(|p| f64::from(p[0])).sum();
    let mean = sum / count;
    let variance = gray
        .pixels()
        .map(|p| {
            let d = f64::from(p[0]) - mean;
            d * d
        })
        .sum::<f64>()
        / count;

    (mean, variance.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_on_white() -> GrayImage {
        GrayImage::from_fn(60, 60, |x, y| {
            if (20..40).contains(&x) && (20..40).contains(&y) {
                Luma([0])
            } else {
                Luma([255])
            }
        })
    }

    #[test]
    fn binarize_marks_accepted_pixels() {
        let mask = binarize(&square_on_white(), |v| v < 128);

        assert_eq!(mask.get_pixel(25, 25)[0], SET);
        assert_eq!(mask.get_pixel(5, 5)[0], UNSET);
    }

    #[test]
    fn single_blob_has_one_external_contour() {
        let mask = binarize(&square_on_white(), |v| v < 128);
        let contours = external_contours(&mask);

        assert_eq!(contours.len(), 1);
        let area = contour_area(&contours[0].points);
        assert!((area - 19.0 * 19.0).abs() < 1.0, "area was {area}");
    }

    #[test]
    fn straight_runs_collapse_to_their_ends() {
        let run: Vec<_> = (0..10).map(|x| RasterPoint::new(x, 4)).collect();

        assert_eq!(
            compress_chain(&run),
            vec![RasterPoint::new(0, 4), RasterPoint::new(9, 4)]
        );
    }

    #[test]
    fn corners_survive_compression() {
        let mut corner: Vec<_> = (0..5).map(|x| RasterPoint::new(x, 0)).collect();
        corner.extend((1..5).map(|y| RasterPoint::new(4, y)));

        assert_eq!(
            compress_chain(&corner),
            vec![
                RasterPoint::new(0, 0),
                RasterPoint::new(4, 0),
                RasterPoint::new(4, 4)
            ]
        );
    }

    #[test]
    fn std_dev_of_flat_image_is_zero() {
        let flat = GrayImage::from_pixel(10, 10, Luma([90]));
        assert_eq!(mean_and_std_dev(&flat), (90.0, 0.0));
    }

    #[test]
    fn std_dev_of_half_black_half_white_is_half_range() {
        let split = GrayImage::from_fn(10, 10, |x, _| Luma([if x < 5 { 0 } else { 255 }]));
        let (mean, std_dev) = mean_and_std_dev(&split);

        assert_eq!(mean, 127.5);
        assert!((std_dev - 127.5).abs() < 1e-9);
    }
}
