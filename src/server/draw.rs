//! `POST /draw`: compose the layers and stream the job's progress back as
//! server-sent events.

use std::convert::Infallible;
use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use futures::Stream;
use serde::Deserialize;
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::artifacts::area::DrawingArea;
use crate::artifacts::canvas::{Canvas, Layer};
use crate::artifacts::geometry::Path;
use crate::artifacts::plotter::{DrawSettings, Plotter, Progress};
use crate::server::layers::TransformSpec;
use crate::server::state::{AppState, JobGuard};

/// One layer as a client sends it: source-space paths plus placement.
#[derive(Debug, Clone, Deserialize)]
pub struct LayerSpec {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub paths: Vec<Path>,
    #[serde(flatten)]
    pub transform: TransformSpec,
    #[serde(default = "visible_by_default")]
    pub visible: bool,
}

fn visible_by_default() -> bool {
    true
}

impl From<LayerSpec> for Layer {
    fn from(spec: LayerSpec) -> Self {
        let mut layer = Layer::new(spec.name, spec.paths);
        layer.set_transform(spec.transform.into());
        layer.visible = spec.visible;
        layer
    }
}

/// Without `layers` the server's own canvas is drawn; without `area` the
/// last detected one is used.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DrawRequest {
    pub layers: Option<Vec<LayerSpec>>,
    pub area: Option<DrawingArea>,
    /// Swipe duration in ms
    pub stroke_duration: Option<u64>,
    /// Pause after each swipe in ms
    pub stroke_delay: Option<u64>,
}

/// Screen paths for every visible layer, in order.
pub fn compose_layers(layers: Vec<LayerSpec>, area: &DrawingArea) -> Vec<Path> {
    let mut canvas = Canvas::new();
    for spec in layers {
        canvas.add_layer(spec.into());
    }
    canvas.compose(area)
}

/// Paths and timing for a job, or the reason it cannot start.
async fn plan_job(
    state: &AppState,
    request: DrawRequest,
) -> Result<(Vec<Path>, DrawSettings), String> {
    let area = match request.area {
        Some(area) => area,
        None => (*state.area.lock().await)
            .ok_or_else(|| "Detect the drawing area first".to_string())?,
    };
    area.validate().map_err(|e| e.to_string())?;

    let paths = match request.layers {
        Some(layers) => compose_layers(layers, &area),
        None => state.canvas.lock().await.compose(&area),
    };

    let defaults = &state.config.drawing;
    let settings = DrawSettings::new(
        request.stroke_duration.unwrap_or(defaults.stroke_duration_ms),
        request.stroke_delay.unwrap_or(defaults.stroke_delay_ms),
    );
    Ok((paths, settings))
}

pub async fn handle_draw(
    State(state): State<Arc<AppState>>,
    Json(request): Json<DrawRequest>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let (tx, rx) = mpsc::unbounded_channel();

    // the receiver is alive until the stream is dropped
    match plan_job(&state, request).await {
        Err(message) => {
            warn!(%message, "drawing job refused");
            let _ = tx.send(Progress::Error(message));
        }
        Ok((paths, settings)) => match state.try_start_job() {
            Some(job) => {
                info!(paths = paths.len(), ?settings, "starting drawing job");
                tokio::spawn(run_job(job, paths, settings, tx));
            }
            None => {
                warn!("drawing job rejected, another one is running");
                let _ = tx.send(Progress::Error(
                    "A drawing is already in progress".to_string(),
                ));
            }
        },
    }

    Sse::new(progress_stream(rx)).keep_alive(KeepAlive::default())
}

async fn run_job(
    job: JobGuard,
    paths: Vec<Path>,
    settings: DrawSettings,
    tx: mpsc::UnboundedSender<Progress>,
) {
    let state = job.state();

    if let Err(e) = state.device.verify().await {
        let _ = tx.send(Progress::Error(format!("{e:#}")));
        return;
    }

    let outcome = Plotter::new(state.device.clone())
        .draw_paths(&paths, &settings, state.cancel_flag(), |progress| {
            // a closed stream means the page went away; keep drawing
            let _ = tx.send(progress);
        })
        .await;
    info!(?outcome, "drawing job finished");
}

fn progress_stream(
    rx: mpsc::UnboundedReceiver<Progress>,
) -> impl Stream<Item = Result<Event, Infallible>> {
    futures::stream::unfold(rx, |mut rx| async move {
        let progress = rx.recv().await?;
        let event = Event::default()
            .json_data(&progress)
            .unwrap_or_else(|_| Event::default().data("{}"));
        Some((Ok(event), rx))
    })
}
