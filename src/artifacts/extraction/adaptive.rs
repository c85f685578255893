use image::{GrayImage, Luma};
use imageproc::distance_transform::Norm;
use imageproc::filter::gaussian_blur_f32;
use imageproc::morphology::close;

use crate::artifacts::core::{SET, UNSET, external_contours};
use crate::artifacts::extraction::contours::closed_paths;
use crate::artifacts::extraction::image_paths::ImagePaths;

/// Sigma of the Gaussian weighting over an 11x11 neighbourhood.
const BLOCK_SIGMA: f32 = 2.0;
/// Subtracted from the local mean before comparing.
const MEAN_OFFSET: i16 = 2;
const MIN_CONTOUR_AREA: f64 = 30.0;

/// Threshold each pixel against its neighbourhood, then trace outer borders.
/// Suited to photos of drawings with uneven lighting.
pub fn extract_adaptive(img: &GrayImage, simplify: f64) -> ImagePaths {
    let local_mean = gaussian_blur_f32(img, BLOCK_SIGMA);

    let binary = GrayImage::from_fn(img.width(), img.height(), |x, y| {
        let value = i16::from(img.get_pixel(x, y)[0]);
        let limit = i16::from(local_mean.get_pixel(x, y)[0]) - MEAN_OFFSET;
        Luma([if value <= limit { SET } else { UNSET }])
    });
    let binary = close(&binary, Norm::LInf, 1);

    let paths = closed_paths(external_contours(&binary), MIN_CONTOUR_AREA, simplify);
    ImagePaths::new(paths, img.width(), img.height())
}
