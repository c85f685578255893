//! RevoDraw: draw images, shapes and text on a card customisation screen
//! by replaying them as touch swipes over ADB.
//!
//! - `areas`: the pieces a drawing session works against (device, workspace, session)
//! - `artifacts`: geometry, detection, path extraction, layout and plotting
//! - `commands`: CLI command implementations
//! - `server`: local web UI
//! - `config`: YAML configuration

use clap::ValueEnum;

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod config;
pub mod errors;
pub mod server;

/// How paths are pulled out of an input image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractMethod {
    /// Pick `contours` for high-contrast images, `edges` otherwise
    #[default]
    Auto,
    /// Canny edge detection (photos)
    Edges,
    /// Threshold + contours (dark on light)
    Contours,
    /// Inverted threshold + contours (light on dark)
    #[value(name = "contours_inv")]
    ContoursInv,
    /// Adaptive threshold (uneven lighting)
    Adaptive,
}

impl std::fmt::Display for ExtractMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ExtractMethod::Auto => "auto",
            ExtractMethod::Edges => "edges",
            ExtractMethod::Contours => "contours",
            ExtractMethod::ContoursInv => "contours_inv",
            ExtractMethod::Adaptive => "adaptive",
        };
        write!(f, "{name}")
    }
}

impl std::str::FromStr for ExtractMethod {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(ExtractMethod::Auto),
            "edges" => Ok(ExtractMethod::Edges),
            "contours" => Ok(ExtractMethod::Contours),
            "contours_inv" => Ok(ExtractMethod::ContoursInv),
            "adaptive" => Ok(ExtractMethod::Adaptive),
            other => anyhow::bail!("Unknown method: {other}"),
        }
    }
}

/// Built-in parametric shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShapeKind {
    Heart,
    Star,
    Circle,
    Spiral,
    /// Heart, star and spiral side by side
    Demo,
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ShapeKind::Heart => "heart",
            ShapeKind::Star => "star",
            ShapeKind::Circle => "circle",
            ShapeKind::Spiral => "spiral",
            ShapeKind::Demo => "demo",
        };
        write!(f, "{name}")
    }
}
