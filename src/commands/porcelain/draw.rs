use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use colored::Colorize;

use crate::ExtractMethod;
use crate::areas::session::Session;
use crate::artifacts::extraction::{ExtractOptions, MAX_IMAGE_SIZE, extract_paths, load_image};
use crate::artifacts::geometry::point_count;
use crate::artifacts::layout::{FitOptions, scale_paths_to_area};
use crate::artifacts::plotter::{DrawOutcome, DrawSettings, Progress};
use crate::artifacts::preview::save_preview;
use crate::commands::porcelain::detect::detect_area;

/// Margin between the detected boundary and the area the image is fitted into.
pub const DRAW_SAFE_MARGIN: i32 = 25;
/// Extra margin inside the safe area when scaling.
pub const LAYOUT_MARGIN: i32 = 10;

#[derive(Debug, Clone, Default)]
pub struct DrawOptions<'a> {
    pub extract: ExtractOptions,
    /// Stop after writing the preview.
    pub preview_only: bool,
    /// Fit into the whole L-shape, letting the VISA corner clip.
    pub full_area: bool,
    pub screenshot: Option<&'a Path>,
    pub debug: bool,
}

impl Session {
    pub async fn draw_image(&self, image: &Path, options: &DrawOptions<'_>) -> anyhow::Result<()> {
        if !image.exists() {
            anyhow::bail!("Image not found: {}", image.display());
        }

        writeln!(self.writer(), "Loading image: {}", image.display())?;
        let gray = load_image(image, MAX_IMAGE_SIZE)?;
        writeln!(self.writer(), "Image size: {}x{}", gray.width(), gray.height())?;

        let (method, image_paths) = extract_paths(&gray, &options.extract);
        if options.extract.method == ExtractMethod::Auto {
            writeln!(self.writer(), "Auto-selected method: {}", method)?;
        }
        writeln!(self.writer(), "Extracted {} paths", image_paths.paths.len())?;

        if image_paths.paths.is_empty() {
            writeln!(
                self.writer(),
                "{}",
                "No paths extracted! Try adjusting threshold or method.".yellow()
            )?;
            return Ok(());
        }

        writeln!(self.writer(), "Detecting drawing area...")?;
        let area = detect_area(
            self.device().as_ref(),
            self.workspace(),
            options.screenshot,
            options.debug,
        )
        .await?;
        let safe = area.safe_bounds(DRAW_SAFE_MARGIN);
        writeln!(
            self.writer(),
            "Drawing area: {},{} to {},{}",
            safe.left,
            safe.top,
            safe.right,
            safe.bottom
        )?;

        let fit = FitOptions {
            margin: LAYOUT_MARGIN,
            use_full_area: options.full_area,
            ..FitOptions::default()
        };
        let scaled = scale_paths_to_area(&image_paths, &safe, fit);
        writeln!(self.writer(), "Scaled to {} drawable paths", scaled.len())?;

        if scaled.is_empty() {
            writeln!(self.writer(), "{}", "No paths fit within the drawing area!".yellow())?;
            return Ok(());
        }

        let preview = self.workspace().preview_path();
        save_preview(&scaled, &safe, &preview)?;
        writeln!(self.writer(), "Preview saved to {}", preview.display())?;

        if options.preview_only {
            writeln!(self.writer(), "Preview only mode - not drawing")?;
            return Ok(());
        }

        self.device().verify().await?;
        writeln!(
            self.writer(),
            "This may take a while ({} points)...",
            point_count(&scaled)
        )?;

        let cancel = Arc::new(AtomicBool::new(false));
        let interrupt = {
            let cancel = cancel.clone();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    cancel.store(true, Ordering::SeqCst);
                }
            })
        };

        let settings = DrawSettings::for_images(&self.config().drawing);
        let outcome = self
            .plotter()
            .draw_paths(&scaled, &settings, &cancel, |progress| {
                if let Err(e) = self.report_progress(&progress) {
                    tracing::warn!(error = %e, "could not write progress");
                }
            })
            .await;
        interrupt.abort();

        match outcome {
            DrawOutcome::Completed | DrawOutcome::Stopped => Ok(()),
            DrawOutcome::Failed => anyhow::bail!("Drawing failed"),
        }
    }

    pub(crate) fn report_progress(&self, progress: &Progress) -> std::io::Result<()> {
        let mut writer = self.writer();
        match progress {
            Progress::Message(message) => writeln!(writer, "{}", message),
            Progress::Percent(percent) => {
                write!(writer, "\r  {}%", percent)?;
                writer.flush()
            }
            Progress::Done { message, .. } => writeln!(writer, "\n{}", message.green()),
            Progress::Error(error) => writeln!(writer, "\n{} {}", "Error:".red(), error),
        }
    }
}
