//! Layer editing
//!
//! The page holds no geometry of its own. Every edit lands on the shared
//! [`Canvas`] and the reply is a [`CanvasView`] carrying the screen paths to
//! render, so what the page shows is what `/draw` will send to the phone.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path as UrlPath, State};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::artifacts::area::DrawingArea;
use crate::artifacts::canvas::{Canvas, Layer};
use crate::artifacts::geometry::{Path, Point};
use crate::artifacts::layout::{Flip, Transform};
use crate::server::handlers::ApiError;
use crate::server::state::AppState;

/// A layer's placement as the page edits it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformSpec {
    pub offset_x: f64,
    pub offset_y: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    pub rotation: f64,
    pub flip_h: bool,
    pub flip_v: bool,
}

impl Default for TransformSpec {
    fn default() -> Self {
        Transform::default().into()
    }
}

impl From<Transform> for TransformSpec {
    fn from(t: Transform) -> Self {
        TransformSpec {
            offset_x: t.offset_x,
            offset_y: t.offset_y,
            scale_x: t.scale_x,
            scale_y: t.scale_y,
            rotation: t.rotation,
            flip_h: t.flip.contains(Flip::HORIZONTAL),
            flip_v: t.flip.contains(Flip::VERTICAL),
        }
    }
}

impl From<TransformSpec> for Transform {
    fn from(spec: TransformSpec) -> Self {
        Transform {
            offset_x: spec.offset_x,
            offset_y: spec.offset_y,
            scale_x: spec.scale_x,
            scale_y: spec.scale_y,
            rotation: spec.rotation,
            flip: Flip::from_axes(spec.flip_h, spec.flip_v),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LayerView {
    pub name: String,
    pub visible: bool,
    pub path_count: usize,
    pub undo_depth: usize,
    pub transform: TransformSpec,
    /// Where the paths land on the phone, already clipped to the area
    pub screen_paths: Vec<Path>,
}

#[derive(Debug, Serialize)]
pub struct CanvasView {
    pub area: DrawingArea,
    /// `false` while `area` is only the layout placeholder
    pub detected: bool,
    pub active: Option<usize>,
    pub layers: Vec<LayerView>,
}

impl CanvasView {
    pub fn of(canvas: &Canvas, area: DrawingArea, detected: bool) -> Self {
        let layers = canvas
            .layers()
            .iter()
            .map(|layer| LayerView {
                name: layer.name.clone(),
                visible: layer.visible,
                path_count: layer.paths.len(),
                undo_depth: layer.history_len(),
                transform: layer.transform.into(),
                screen_paths: layer.screen_paths(&area),
            })
            .collect();

        CanvasView {
            area,
            detected,
            active: canvas.active_index(),
            layers,
        }
    }
}

/// Apply `edit` to the canvas and describe the result.
pub(crate) async fn edit_canvas<T>(
    state: &AppState,
    edit: impl FnOnce(&mut Canvas, &DrawingArea) -> Result<T, ApiError>,
) -> Result<Json<CanvasView>, ApiError> {
    let (area, detected) = state.layout_area().await;
    let mut canvas = state.canvas.lock().await;
    edit(&mut canvas, &area)?;
    Ok(Json(CanvasView::of(&canvas, area, detected)))
}

fn no_such_layer(index: usize) -> ApiError {
    ApiError::NotFound(format!("No layer {index}"))
}

/// `GET /layers`
pub async fn handle_list(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CanvasView>, ApiError> {
    edit_canvas(&state, |_, _| Ok(())).await
}

/// `POST /layers/{index}/select`
pub async fn handle_select(
    State(state): State<Arc<AppState>>,
    UrlPath(index): UrlPath<usize>,
) -> Result<Json<CanvasView>, ApiError> {
    edit_canvas(&state, |canvas, _| {
        canvas
            .select(index)
            .then_some(())
            .ok_or_else(|| no_such_layer(index))
    })
    .await
}

/// `DELETE /layers/{index}`
#[instrument(skip(state))]
pub async fn handle_remove(
    State(state): State<Arc<AppState>>,
    UrlPath(index): UrlPath<usize>,
) -> Result<Json<CanvasView>, ApiError> {
    edit_canvas(&state, |canvas, _| {
        let removed = canvas.remove(index).ok_or_else(|| no_such_layer(index))?;
        debug!(name = %removed.name, "removed layer");
        Ok(())
    })
    .await
}

/// `POST /layers/{index}/visibility`
pub async fn handle_toggle_visibility(
    State(state): State<Arc<AppState>>,
    UrlPath(index): UrlPath<usize>,
) -> Result<Json<CanvasView>, ApiError> {
    edit_canvas(&state, |canvas, _| {
        canvas
            .layer_mut(index)
            .map(Layer::toggle_visibility)
            .ok_or_else(|| no_such_layer(index))
    })
    .await
}

/// `PUT /layers/{index}/transform`
pub async fn handle_transform(
    State(state): State<Arc<AppState>>,
    UrlPath(index): UrlPath<usize>,
    Json(transform): Json<TransformSpec>,
) -> Result<Json<CanvasView>, ApiError> {
    edit_canvas(&state, |canvas, _| {
        let layer = canvas.layer_mut(index).ok_or_else(|| no_such_layer(index))?;
        layer.set_transform(transform.into());
        Ok(())
    })
    .await
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct EraseRequest {
    /// Screen coordinates
    pub x: i32,
    pub y: i32,
    pub radius: f64,
}

/// `POST /erase`: erase around a screen point on the active layer.
#[instrument(skip(state))]
pub async fn handle_erase(
    State(state): State<Arc<AppState>>,
    Json(request): Json<EraseRequest>,
) -> Result<Json<CanvasView>, ApiError> {
    if request.radius.is_nan() || request.radius <= 0.0 {
        return Err(ApiError::BadRequest(format!(
            "Invalid eraser radius: {}",
            request.radius
        )));
    }

    edit_canvas(&state, |canvas, area| {
        let layer = canvas
            .active_layer_mut()
            .ok_or_else(|| ApiError::BadRequest("No layer selected".to_string()))?;
        let removed = layer.erase_at(Point::new(request.x, request.y), request.radius, area);
        debug!(removed, "erased points");
        Ok(())
    })
    .await
}

/// `POST /undo`: revert the active layer's last erase.
pub async fn handle_undo(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CanvasView>, ApiError> {
    edit_canvas(&state, |canvas, _| {
        let layer = canvas
            .active_layer_mut()
            .ok_or_else(|| ApiError::BadRequest("No layer selected".to_string()))?;
        layer
            .undo()
            .then_some(())
            .ok_or_else(|| ApiError::BadRequest("Nothing to undo".to_string()))
    })
    .await
}
