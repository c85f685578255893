pub mod drawing_area;

pub use drawing_area::{DrawingArea, MAX_SCREEN_DIMENSION};
