//! Porcelain commands (user-facing drawing workflows)
//!
//! Each command is a method on [`Session`](crate::areas::session::Session)
//! that composes detection, extraction, layout and the plotter and reports
//! progress through the session writer.
//!
//! ## Commands
//!
//! - `detect`: Find and report the drawing area
//! - `draw`: Extract an image, fit it into the area and draw it
//! - `shape`: Draw a parametric shape
//! - `text`: Draw a line of text
//! - `interactive`: Draw shapes and text from a prompt
//! - `serve`: Run the web UI

pub mod detect;
pub mod draw;
pub mod interactive;
pub mod serve;
pub mod shape;
pub mod text;
