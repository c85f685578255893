use std::io::Write;
use std::path::Path;

use anyhow::Context;
use bytes::Bytes;
use colored::Colorize;

use crate::areas::device::InputDevice;
use crate::areas::session::Session;
use crate::areas::workspace::Workspace;
use crate::artifacts::area::DrawingArea;
use crate::artifacts::detection::overlay::render_overlay;
use crate::artifacts::detection::{decode_screenshot, detect_from_image};
use crate::artifacts::layout::FRAME_MARGIN;

/// Margin used for the "safe area" report.
pub const REPORT_SAFE_MARGIN: i32 = 20;

/// Find the drawing area on `screenshot`, or on a fresh capture from the
/// device when no file is given. Captures are kept in the workspace.
pub async fn detect_area(
    device: &dyn InputDevice,
    workspace: &Workspace,
    screenshot: Option<&Path>,
    debug: bool,
) -> anyhow::Result<DrawingArea> {
    let png = match screenshot {
        Some(path) => Bytes::from(
            std::fs::read(path)
                .with_context(|| format!("Could not read screenshot: {}", path.display()))?,
        ),
        None => {
            let png = device.screencap().await?;
            let saved = workspace.save_screenshot(&png)?;
            tracing::info!(path = %saved.display(), "screenshot saved");
            png
        }
    };

    let image = decode_screenshot(&png)?;
    let detection = detect_from_image(&image)?;

    if debug {
        let overlay = render_overlay(&image.to_rgb8(), &detection.area);
        workspace.save_debug_images(&overlay, &detection.bright)?;
        tracing::info!(path = %workspace.debug_overlay_path().display(), "debug images saved");
    }

    Ok(detection.area)
}

impl Session {
    pub async fn detect(&self, screenshot: Option<&Path>, debug: bool) -> anyhow::Result<()> {
        let area = detect_area(self.device().as_ref(), self.workspace(), screenshot, debug).await?;
        let (cx, cy) = area.center();
        let safe = area.safe_bounds(REPORT_SAFE_MARGIN);
        let (x1, y1, x2, y2) = safe.usable_rect(FRAME_MARGIN);

        writeln!(self.writer(), "{} {}", "Result:".bold(), area)?;
        writeln!(self.writer(), "{} ({}, {})", "Center:".bold(), cx, cy)?;
        writeln!(self.writer(), "{} {}", "Safe area:".bold(), safe)?;
        writeln!(
            self.writer(),
            "{} ({}, {}, {}, {})",
            "Usable rect:".bold(),
            x1,
            y1,
            x2,
            y2
        )?;
        if debug {
            writeln!(
                self.writer(),
                "Debug saved: {}",
                self.workspace().debug_overlay_path().display()
            )?;
        }

        Ok(())
    }
}
