use image::GrayImage;
use imageproc::contrast::otsu_level;
use imageproc::edges::canny;
use imageproc::filter::gaussian_blur_f32;

use imageproc::point::Point as RasterPoint;

use crate::artifacts::core::{all_contours, compress_chain};
use crate::artifacts::extraction::image_paths::ImagePaths;
use crate::artifacts::extraction::simplified_path;
use crate::artifacts::geometry::{Path, is_drawable};

/// Sigma of a 5x5 Gaussian kernel.
pub(crate) const BLUR_SIGMA: f32 = 1.1;
/// Counted after straight runs are collapsed.
const MIN_CONTOUR_POINTS: usize = 5;

/// Canny edges traced into open paths. Suited to photos and busy images.
pub fn extract_edges(img: &GrayImage, simplify: f64) -> ImagePaths {
    let blurred = gaussian_blur_f32(img, BLUR_SIGMA);

    // Otsu picks the upper hysteresis threshold, the lower is half of it.
    // A zero threshold would accept every pixel, flat ones included.
    let high = f32::from(otsu_level(&blurred)).max(1.0);
    let edges = canny(&blurred, high * 0.5, high);

    let paths = all_contours(&edges)
        .into_iter()
        .filter_map(|contour| edge_path(&contour.points, simplify))
        .collect();

    ImagePaths::new(paths, img.width(), img.height())
}

/// An open path for one traced edge, or `None` when the edge has too few
/// turns to be worth drawing.
fn edge_path(border: &[RasterPoint<i32>], simplify: f64) -> Option<Path> {
    let compressed = compress_chain(border);
    if compressed.len() < MIN_CONTOUR_POINTS {
        return None;
    }
    Some(simplified_path(&compressed, simplify, false)).filter(is_drawable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    #[test]
    fn disk_outline_produces_paths() {
        let img = GrayImage::from_fn(120, 120, |x, y| {
            let (dx, dy) = (x as i32 - 60, y as i32 - 60);
            let inside = dx * dx + dy * dy <= 35 * 35;
            Luma([if inside { 20 } else { 230 }])
        });

        let paths = extract_edges(&img, 2.0);

        assert!(!paths.paths.is_empty());
        assert!(paths.paths.iter().all(|p| p.len() >= 2));
        assert_eq!((paths.width, paths.height), (120, 120));
    }

    #[test]
    fn straight_edge_is_too_short_once_compressed() {
        // a one pixel wide line traced out and back: 19 border points, one turn
        let mut border: Vec<_> = (0..10).map(|x| RasterPoint::new(x, 7)).collect();
        border.extend((1..9).rev().map(|x| RasterPoint::new(x, 7)));
        border.push(RasterPoint::new(0, 7));

        assert!(border.len() >= MIN_CONTOUR_POINTS);
        assert_eq!(edge_path(&border, 0.0), None);
    }

    #[test]
    fn staircase_edge_keeps_its_turns() {
        let border: Vec<_> = (0..12)
            .map(|i| RasterPoint::new(i / 2 + i % 2, i / 2))
            .collect();

        let path = edge_path(&border, 0.0).unwrap();

        assert!(path.len() >= MIN_CONTOUR_POINTS);
        assert_eq!(path[0], crate::artifacts::geometry::Point::new(0, 0));
    }

    #[test]
    fn flat_image_has_no_edges() {
        let img = GrayImage::from_pixel(64, 64, Luma([128]));
        assert!(extract_edges(&img, 2.0).paths.is_empty());
    }
}
