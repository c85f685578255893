use std::io::Write;
use std::path::Path;

use colored::Colorize;

use crate::ShapeKind;
use crate::areas::session::Session;
use crate::artifacts::geometry::Point;
use crate::artifacts::plotter::DrawSettings;
use crate::artifacts::shapes::{FALLBACK_CENTER, SHAPE_SAFE_MARGIN, Stroke, shape_strokes};
use crate::commands::porcelain::detect::detect_area;

/// Where a shape or text goes: explicit coordinates, the fixed fallback, or
/// the centre of the detected area.
#[derive(Debug, Clone, Default)]
pub struct ShapeTarget<'a> {
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub no_detect: bool,
    pub screenshot: Option<&'a Path>,
    pub debug: bool,
}

impl Session {
    pub async fn draw_shape(
        &self,
        kind: ShapeKind,
        size: i32,
        target: &ShapeTarget<'_>,
    ) -> anyhow::Result<()> {
        let center = self.resolve_center(target).await?;

        match kind {
            ShapeKind::Demo => writeln!(self.writer(), "Drawing demo shapes...")?,
            _ => writeln!(self.writer(), "Drawing {} at {}...", kind, center)?,
        }

        self.draw_shape_strokes(&shape_strokes(kind, center, size))
            .await
    }

    /// Centre for a shape, reporting how it was chosen. Detection failures
    /// fall back to [`FALLBACK_CENTER`] instead of aborting.
    pub(crate) async fn resolve_center(&self, target: &ShapeTarget<'_>) -> anyhow::Result<Point> {
        if let (Some(x), Some(y)) = (target.x, target.y) {
            let center = Point::new(x, y);
            writeln!(self.writer(), "Using manual coordinates: {}", center)?;
            return Ok(center);
        }

        if target.no_detect {
            writeln!(self.writer(), "Using default coordinates: {}", FALLBACK_CENTER)?;
            return Ok(FALLBACK_CENTER);
        }

        writeln!(self.writer(), "Detecting drawing area...")?;
        let detected = detect_area(
            self.device().as_ref(),
            self.workspace(),
            target.screenshot,
            target.debug,
        )
        .await;

        match detected {
            Ok(area) => {
                let safe = area.safe_bounds(SHAPE_SAFE_MARGIN);
                let (cx, cy) = safe.center();
                let center = Point::new(cx, cy);
                writeln!(self.writer(), "Detected center: {}", center)?;
                writeln!(
                    self.writer(),
                    "Safe bounds: {},{} to {},{}",
                    safe.left,
                    safe.top,
                    safe.right,
                    safe.bottom
                )?;
                Ok(center)
            }
            Err(e) => {
                tracing::warn!(error = %e, "detection failed");
                writeln!(self.writer(), "{} {:#}", "Detection failed:".yellow(), e)?;
                writeln!(self.writer(), "Using fallback coordinates")?;
                Ok(FALLBACK_CENTER)
            }
        }
    }

    pub(crate) async fn draw_shape_strokes(&self, strokes: &[Stroke]) -> anyhow::Result<()> {
        self.device().verify().await?;

        let settings = DrawSettings::for_shapes(&self.config().drawing);
        self.plotter().draw_strokes(strokes, &settings).await?;

        writeln!(self.writer(), "{}", "Done!".green())?;
        Ok(())
    }
}
