use std::path::{Path, PathBuf};

use anyhow::Context;
use image::{GrayImage, RgbImage};

use crate::artifacts::preview::PREVIEW_FILE;

const SCREENSHOT_FILE: &str = "screen.png";
const DEBUG_OVERLAY_FILE: &str = "debug_detection.png";
const DEBUG_BRIGHT_FILE: &str = "debug_bright.png";

/// Directory where captured screenshots, debug images and previews land.
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn screenshot_path(&self) -> PathBuf {
        self.path.join(SCREENSHOT_FILE)
    }

    pub fn preview_path(&self) -> PathBuf {
        self.path.join(PREVIEW_FILE)
    }

    pub fn debug_overlay_path(&self) -> PathBuf {
        self.path.join(DEBUG_OVERLAY_FILE)
    }

    pub fn debug_bright_path(&self) -> PathBuf {
        self.path.join(DEBUG_BRIGHT_FILE)
    }

    fn ensure_exists(&self) -> anyhow::Result<()> {
        std::fs::create_dir_all(&self.path)
            .with_context(|| format!("Failed to create output directory {:?}", self.path))
    }

    pub fn save_screenshot(&self, png: &[u8]) -> anyhow::Result<PathBuf> {
        self.ensure_exists()?;
        let target = self.screenshot_path();
        std::fs::write(&target, png)
            .with_context(|| format!("Failed to write screenshot {:?}", target))?;
        Ok(target)
    }

    /// Write the detection overlay and the bright-pixel mask side by side.
    pub fn save_debug_images(&self, overlay: &RgbImage, bright: &GrayImage) -> anyhow::Result<()> {
        self.ensure_exists()?;
        overlay
            .save(self.debug_overlay_path())
            .context("Failed to write detection overlay")?;
        bright
            .save(self.debug_bright_path())
            .context("Failed to write bright mask")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    #[test]
    fn output_files_live_under_the_workspace() {
        let workspace = Workspace::new(PathBuf::from("/tmp/revodraw").into_boxed_path());

        assert_eq!(workspace.screenshot_path(), PathBuf::from("/tmp/revodraw/screen.png"));
        assert_eq!(workspace.preview_path(), PathBuf::from("/tmp/revodraw/draw_preview.png"));
    }

    #[test]
    fn debug_images_are_written() {
        let dir = assert_fs::TempDir::new().unwrap();
        let workspace = Workspace::new(dir.path().join("out").into_boxed_path());

        workspace
            .save_debug_images(&RgbImage::new(4, 4), &GrayImage::from_pixel(4, 4, Luma([255])))
            .unwrap();

        assert!(workspace.debug_overlay_path().exists());
        assert!(workspace.debug_bright_path().exists());
    }
}
