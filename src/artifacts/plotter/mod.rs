//! Replaying paths on the device
//!
//! Every path becomes a chain of swipes between consecutive points. Image
//! jobs report [`Progress`] and can be cancelled between paths; shape jobs
//! are short and simply run to the end.

pub mod progress;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use anyhow::Result;

use crate::areas::device::InputDevice;
use crate::artifacts::geometry::{Path, is_drawable, point_count};
use crate::artifacts::shapes::Stroke;
use crate::config::DrawingConfig;
pub use progress::{Progress, ProgressEvent};

/// Swipe timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawSettings {
    pub stroke_duration_ms: u64,
    pub stroke_delay: Duration,
}

impl DrawSettings {
    pub fn new(stroke_duration_ms: u64, stroke_delay_ms: u64) -> Self {
        DrawSettings {
            stroke_duration_ms,
            stroke_delay: Duration::from_millis(stroke_delay_ms),
        }
    }

    /// Timing for extracted images.
    pub fn for_images(config: &DrawingConfig) -> Self {
        Self::new(config.stroke_duration_ms, config.stroke_delay_ms)
    }

    /// Timing for shapes and text.
    pub fn for_shapes(config: &DrawingConfig) -> Self {
        Self::new(config.shape_stroke_ms, config.shape_delay_ms)
    }
}

impl Default for DrawSettings {
    fn default() -> Self {
        Self::for_images(&DrawingConfig::default())
    }
}

/// How an image job ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOutcome {
    Completed,
    Stopped,
    Failed,
}

pub struct Plotter {
    device: Arc<dyn InputDevice>,
}

impl Plotter {
    pub fn new(device: Arc<dyn InputDevice>) -> Self {
        Plotter { device }
    }

    /// Draw `paths` in order, checking `cancel` before each one.
    pub async fn draw_paths(
        &self,
        paths: &[Path],
        settings: &DrawSettings,
        cancel: &AtomicBool,
        mut progress: impl FnMut(Progress),
    ) -> DrawOutcome {
        let total = paths.len();
        progress(Progress::Message(format!(
            "Drawing {} paths ({} points)...",
            total,
            point_count(paths)
        )));

        for (i, path) in paths.iter().enumerate() {
            if cancel.load(Ordering::SeqCst) {
                tracing::info!(drawn = i, total, "drawing stopped");
                progress(Progress::Done {
                    message: "Stopped".to_string(),
                    progress: None,
                });
                return DrawOutcome::Stopped;
            }

            if let Err(e) = self.draw_path(path, settings).await {
                tracing::error!(error = %e, path = i, "swipe failed");
                progress(Progress::Error(format!("{e:#}")));
                return DrawOutcome::Failed;
            }

            progress(Progress::Percent(((i + 1) * 100 / total) as u8));
        }

        progress(Progress::Done {
            message: "Complete!".to_string(),
            progress: Some(100),
        });
        DrawOutcome::Completed
    }

    /// One swipe per consecutive point pair, pausing `stroke_delay` after
    /// each. Paths with fewer than two points draw nothing.
    pub async fn draw_path(&self, path: &Path, settings: &DrawSettings) -> Result<()> {
        if !is_drawable(path) {
            return Ok(());
        }

        for pair in path.windows(2) {
            self.device
                .swipe(pair[0], pair[1], settings.stroke_duration_ms)
                .await?;
            tokio::time::sleep(settings.stroke_delay).await;
        }
        Ok(())
    }

    /// Draw shape or text strokes, honouring each stroke's trailing pause.
    pub async fn draw_strokes(&self, strokes: &[Stroke], settings: &DrawSettings) -> Result<()> {
        for stroke in strokes {
            self.draw_path(&stroke.path, settings).await?;
            if !stroke.pause_after.is_zero() {
                tokio::time::sleep(stroke.pause_after).await;
            }
        }
        Ok(())
    }
}
