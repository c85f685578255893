//! Plumbing commands (low-level building blocks)
//!
//! Plumbing commands expose single pipeline stages directly. They're
//! primarily used for scripting and for inspecting what the porcelain
//! commands would do.
//!
//! ## Commands
//!
//! - `extract`: Print the paths extracted from an image as JSON
//! - `screencap`: Save a screenshot from the device

pub mod extract;
pub mod screencap;
