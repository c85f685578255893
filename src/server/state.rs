use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::Mutex;

use crate::areas::device::{Adb, InputDevice};
use crate::areas::workspace::Workspace;
use crate::artifacts::area::DrawingArea;
use crate::artifacts::canvas::Canvas;
use crate::config::Config;

/// Where layers are laid out before `/detect` has found the real area.
/// Drawing still waits for a detected or submitted area.
pub const PREVIEW_AREA: DrawingArea = DrawingArea {
    top: 430,
    left: 160,
    right: 930,
    bottom: 915,
    cutout_left: 630,
    cutout_top: 730,
    top_excl_right: 260,
    top_excl_bottom: 500,
};

/// Shared state behind every handler.
pub struct AppState {
    pub config: Config,
    pub device: Arc<dyn InputDevice>,
    pub workspace: Workspace,
    /// Last area found by `/detect`
    pub area: Mutex<Option<DrawingArea>>,
    /// Layers being edited on the page
    pub canvas: Mutex<Canvas>,
    drawing: AtomicBool,
    cancel: AtomicBool,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let device = Arc::new(Adb::from_config(&config.device));
        Self::with_device(config, device)
    }

    pub fn with_device(config: Config, device: Arc<dyn InputDevice>) -> Self {
        let workspace = Workspace::new(config.detection.output_dir.clone().into_boxed_path());

        AppState {
            config,
            device,
            workspace,
            area: Mutex::new(None),
            canvas: Mutex::new(Canvas::new()),
            drawing: AtomicBool::new(false),
            cancel: AtomicBool::new(false),
        }
    }

    /// The detected area, or [`PREVIEW_AREA`] with `false` when there is none yet.
    pub async fn layout_area(&self) -> (DrawingArea, bool) {
        match *self.area.lock().await {
            Some(area) => (area, true),
            None => (PREVIEW_AREA, false),
        }
    }

    /// Claim the drawing slot. Only one job runs at a time; the returned
    /// guard releases the slot when dropped.
    pub fn try_start_job(self: &Arc<Self>) -> Option<JobGuard> {
        self.drawing
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()?;
        self.cancel.store(false, Ordering::SeqCst);
        Some(JobGuard {
            state: Arc::clone(self),
        })
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing.load(Ordering::SeqCst)
    }

    /// Ask the running job, if any, to stop before its next path.
    pub fn request_stop(&self) {
        self.cancel.store(true, Ordering::SeqCst);
    }

    pub fn cancel_flag(&self) -> &AtomicBool {
        &self.cancel
    }
}

pub struct JobGuard {
    state: Arc<AppState>,
}

impl JobGuard {
    pub fn state(&self) -> &AppState {
        &self.state
    }
}

impl Drop for JobGuard {
    fn drop(&mut self) {
        self.state.drawing.store(false, Ordering::SeqCst);
    }
}
