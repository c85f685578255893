//! Command implementations
//!
//! This module contains all command implementations, organized into two
//! categories:
//!
//! - `plumbing`: Single pipeline stages (extract, screencap)
//! - `porcelain`: User-facing workflows (detect, draw, shape, text, interactive, serve)
//!
//! Plumbing commands provide building blocks, while porcelain commands compose
//! them into complete drawing jobs.

pub mod plumbing;
pub mod porcelain;
