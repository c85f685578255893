//! Drawing data structures and algorithms
//!
//! - `area`: The L-shaped drawing area and its geometry
//! - `canvas`: Layers, eraser and undo
//! - `core`: Shared raster helpers (thresholding, contours)
//! - `detection`: Finding the drawing area on a screenshot
//! - `extraction`: Turning an image into paths
//! - `geometry`: Points, paths, bounds
//! - `layout`: Fitting and transforming paths into the area
//! - `plotter`: Replaying paths as swipes, with progress
//! - `preview`: Rendering paths to a PNG
//! - `shapes`: Parametric shapes and the stroke font

pub mod area;
pub mod canvas;
pub mod core;
pub mod detection;
pub mod extraction;
pub mod geometry;
pub mod layout;
pub mod plotter;
pub mod preview;
pub mod shapes;
