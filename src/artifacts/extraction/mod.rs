//! Turning an input image into drawable paths
//!
//! Four strategies are available, picked by [`ExtractMethod`]:
//!
//! - `edges`: Canny edges, open paths
//! - `contours` / `contours_inv`: global threshold, closed paths
//! - `adaptive`: local threshold, closed paths
//!
//! `auto` looks at the contrast of the image and picks `contours` or `edges`.
//! All strategies return paths in the pixel space of the (possibly
//! downscaled) grayscale image; layout maps them onto the screen later.

pub mod adaptive;
pub mod contours;
pub mod edges;
pub mod image_paths;
pub mod loader;

use image::GrayImage;
use imageproc::geometry::approximate_polygon_dp;
use imageproc::point::Point as RasterPoint;

use crate::ExtractMethod;
use crate::artifacts::core::mean_and_std_dev;
use crate::artifacts::geometry::{Path, Point};
pub use contours::Polarity;
pub use image_paths::{ExtractionReport, ExtractionStats, ImagePaths};
pub use loader::{MAX_IMAGE_SIZE, decode_image, load_image};

/// Standard deviation above which an image counts as high contrast.
const HIGH_CONTRAST_STD_DEV: f64 = 70.0;

pub const DEFAULT_THRESHOLD: u8 = 127;
pub const DEFAULT_SIMPLIFY: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtractOptions {
    pub method: ExtractMethod,
    pub threshold: u8,
    /// Douglas-Peucker epsilon in pixels; `0` disables simplification
    pub simplify: f64,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            method: ExtractMethod::Auto,
            threshold: DEFAULT_THRESHOLD,
            simplify: DEFAULT_SIMPLIFY,
        }
    }
}

/// Replace `auto` with the concrete method for this image.
pub fn resolve_method(img: &GrayImage, method: ExtractMethod) -> ExtractMethod {
    if method != ExtractMethod::Auto {
        return method;
    }

    let (_, std_dev) = mean_and_std_dev(img);
    let chosen = if std_dev > HIGH_CONTRAST_STD_DEV {
        ExtractMethod::Contours
    } else {
        ExtractMethod::Edges
    };
    tracing::debug!(std_dev, method = %chosen, "auto-selected extraction method");
    chosen
}

/// Run the extraction named by `options`, returning the method actually used.
pub fn extract_paths(img: &GrayImage, options: &ExtractOptions) -> (ExtractMethod, ImagePaths) {
    let method = resolve_method(img, options.method);
    let paths = match method {
        ExtractMethod::Edges | ExtractMethod::Auto => edges::extract_edges(img, options.simplify),
        ExtractMethod::Contours => contours::extract_contours(
            img,
            options.threshold,
            options.simplify,
            Polarity::DarkOnLight,
        ),
        ExtractMethod::ContoursInv => contours::extract_contours(
            img,
            options.threshold,
            options.simplify,
            Polarity::LightOnDark,
        ),
        ExtractMethod::Adaptive => adaptive::extract_adaptive(img, options.simplify),
    };

    let stats = paths.stats();
    tracing::info!(
        %method,
        paths = stats.path_count,
        points = stats.point_count,
        "extracted paths"
    );
    (method, paths)
}

pub(crate) fn simplified_path(points: &[RasterPoint<i32>], epsilon: f64, closed: bool) -> Path {
    let points = if epsilon > 0.0 && points.len() > 2 {
        approximate_polygon_dp(points, epsilon, closed)
    } else {
        points.to_vec()
    };
    points.into_iter().map(|p| Point::new(p.x, p.y)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;
    use pretty_assertions::assert_eq;

    #[test]
    fn auto_picks_contours_for_high_contrast() {
        let img = GrayImage::from_fn(100, 100, |x, _| Luma([if x < 50 { 0 } else { 255 }]));
        assert_eq!(resolve_method(&img, ExtractMethod::Auto), ExtractMethod::Contours);
    }

    #[test]
    fn auto_picks_edges_for_low_contrast() {
        let img = GrayImage::from_fn(100, 100, |x, _| Luma([if x < 50 { 100 } else { 140 }]));
        assert_eq!(resolve_method(&img, ExtractMethod::Auto), ExtractMethod::Edges);
    }

    #[test]
    fn explicit_method_is_kept() {
        let img = GrayImage::from_pixel(10, 10, Luma([0]));
        assert_eq!(
            resolve_method(&img, ExtractMethod::Adaptive),
            ExtractMethod::Adaptive
        );
    }

    #[test]
    fn extract_reports_the_resolved_method() {
        let img = GrayImage::from_fn(100, 100, |x, y| {
            let inside = (30..70).contains(&x) && (30..70).contains(&y);
            Luma([if inside { 0 } else { 255 }])
        });

        let (method, paths) = extract_paths(&img, &ExtractOptions::default());

        assert_eq!(method, ExtractMethod::Contours);
        assert_eq!(paths.paths.len(), 1);
    }

    #[test]
    fn simplification_keeps_endpoints_of_open_paths() {
        let line: Vec<RasterPoint<i32>> = (0..20).map(|x| RasterPoint::new(x, 0)).collect();

        let path = simplified_path(&line, 1.0, false);

        assert_eq!(path, vec![Point::new(0, 0), Point::new(19, 0)]);
    }
}
