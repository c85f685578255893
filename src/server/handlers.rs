use std::sync::Arc;

use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use serde::Serialize;
use serde_json::json;
use tracing::{error, info, instrument, warn};

use crate::ExtractMethod;
use crate::artifacts::canvas::Layer;
use crate::artifacts::extraction::{
    ExtractOptions, ExtractionReport, MAX_IMAGE_SIZE, decode_image, extract_paths,
};
use crate::commands::porcelain::detect::detect_area;
use crate::server::layers::{CanvasView, edit_canvas};
use crate::server::state::AppState;

const INDEX_HTML: &str = include_str!("../../assets/index.html");

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failures are reported to the page as `{"error": "..."}`.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => {
                warn!(%message, "bad request");
                (StatusCode::BAD_REQUEST, message)
            }
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            ApiError::Internal(err) => {
                error!(error = %err, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, format!("{err:#}"))
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err)
    }
}

impl From<axum::extract::multipart::MultipartError> for ApiError {
    fn from(err: axum::extract::multipart::MultipartError) -> Self {
        ApiError::BadRequest(err.body_text())
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// `GET /`
pub async fn handle_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

#[derive(Debug, Serialize)]
pub struct ProcessResponse {
    #[serde(flatten)]
    pub report: ExtractionReport,
    pub canvas: CanvasView,
}

/// `POST /process`
///
/// Multipart upload with an `image` file and optional `method`, `threshold`
/// and `simplify` fields. The extracted paths become a new, active layer;
/// the reply carries them with their stats and the updated canvas.
#[instrument(skip_all)]
pub async fn handle_process(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<ProcessResponse>, ApiError> {
    let mut image = None;
    let mut name = None;
    let mut options = ExtractOptions::default();

    while let Some(field) = multipart.next_field().await? {
        let field_name = field.name().unwrap_or_default().to_string();
        match field_name.as_str() {
            "image" => {
                name = field.file_name().map(str::to_string);
                image = Some(field.bytes().await?);
            }
            "method" => {
                options.method = field
                    .text()
                    .await?
                    .parse::<ExtractMethod>()
                    .map_err(|e| ApiError::BadRequest(e.to_string()))?;
            }
            "threshold" => {
                let value = field.text().await?;
                options.threshold = value
                    .trim()
                    .parse::<i64>()
                    .map(|t| t.clamp(0, 255) as u8)
                    .map_err(|_| ApiError::BadRequest(format!("Invalid threshold: {value}")))?;
            }
            "simplify" => {
                let value = field.text().await?;
                options.simplify = value
                    .trim()
                    .parse::<f64>()
                    .map_err(|_| ApiError::BadRequest(format!("Invalid simplify: {value}")))?;
            }
            _ => {}
        }
    }

    let image = image.ok_or_else(|| ApiError::BadRequest("No image uploaded".to_string()))?;

    let (method, image_paths) = tokio::task::spawn_blocking(move || {
        let gray = decode_image(&image, MAX_IMAGE_SIZE)?;
        anyhow::Ok(extract_paths(&gray, &options))
    })
    .await
    .map_err(anyhow::Error::from)?
    .map_err(|e| ApiError::BadRequest(format!("{e:#}")))?;

    info!(%method, paths = image_paths.paths.len(), "processed upload");
    let report = image_paths.into_report(method);

    let Json(canvas) = edit_canvas(&state, |canvas, _| {
        let name = name.unwrap_or_else(|| format!("Layer {}", canvas.layers().len() + 1));
        Ok(canvas.add_layer(Layer::new(name, report.paths.clone())))
    })
    .await?;

    Ok(Json(ProcessResponse { report, canvas }))
}

/// `GET /detect`
#[instrument(skip_all)]
pub async fn handle_detect(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    let area = detect_area(state.device.as_ref(), &state.workspace, None, false).await?;
    *state.area.lock().await = Some(area);

    Ok(Json(json!({ "area": area })).into_response())
}

/// `POST /stop`
pub async fn handle_stop(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    state.request_stop();
    info!(running = state.is_drawing(), "stop requested");
    Json(json!({ "status": "stopped" }))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub device: CheckResult,
    pub drawing: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Ok,
    Degraded,
}

#[derive(Debug, Serialize)]
pub struct CheckResult {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// `GET /healthz`
pub async fn handle_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let device = match state.device.verify().await {
        Ok(()) => CheckResult {
            ok: true,
            detail: None,
        },
        Err(e) => CheckResult {
            ok: false,
            detail: Some(format!("{e:#}")),
        },
    };
    let status = if device.ok {
        HealthStatus::Ok
    } else {
        HealthStatus::Degraded
    };

    Json(HealthResponse {
        status,
        device,
        drawing: state.is_drawing(),
    })
}
