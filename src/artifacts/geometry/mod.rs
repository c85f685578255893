//! Points, polylines and their extents
//!
//! Every drawable thing in the crate ends up as a list of [`Path`]s: an image
//! after extraction, a shape, a glyph. A path is only worth sending to the
//! device when it has at least two points.

pub mod bounds;
pub mod point;

pub use bounds::Bounds;
pub use point::Point;

pub type Path = Vec<Point>;

pub const MIN_PATH_POINTS: usize = 2;

pub fn point_count(paths: &[Path]) -> usize {
    paths.iter().map(Vec::len).sum()
}

pub fn is_drawable(path: &Path) -> bool {
    path.len() >= MIN_PATH_POINTS
}
