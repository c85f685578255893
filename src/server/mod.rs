//! Local web UI
//!
//! Routes:
//! - `GET  /`         - Single-page editor
//! - `POST /process`  - Extract paths from an uploaded image into a new layer
//! - `GET  /detect`   - Find the drawing area on the phone
//! - `GET  /layers`   - Current layers with their screen paths
//! - `POST /layers/{index}/select`, `POST /layers/{index}/visibility`,
//!   `PUT /layers/{index}/transform`, `DELETE /layers/{index}` - Layer edits
//! - `POST /erase`, `POST /undo` - Eraser on the active layer
//! - `POST /draw`     - Draw the composed layers, streaming progress (SSE)
//! - `POST /stop`     - Cancel the running drawing
//! - `GET  /healthz`  - Device status

pub mod draw;
pub mod handlers;
pub mod layers;
pub mod state;

use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{delete, get, post, put};
use tokio::signal;

pub use state::AppState;

/// Largest accepted upload.
pub const MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::handle_index))
        .route("/process", post(handlers::handle_process))
        .route("/detect", get(handlers::handle_detect))
        .route("/layers", get(layers::handle_list))
        .route("/layers/{index}", delete(layers::handle_remove))
        .route("/layers/{index}/select", post(layers::handle_select))
        .route(
            "/layers/{index}/visibility",
            post(layers::handle_toggle_visibility),
        )
        .route("/layers/{index}/transform", put(layers::handle_transform))
        .route("/erase", post(layers::handle_erase))
        .route("/undo", post(layers::handle_undo))
        .route("/draw", post(draw::handle_draw))
        .route("/stop", post(handlers::handle_stop))
        .route("/healthz", get(handlers::handle_health))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}

/// Serve until SIGINT or SIGTERM. A running drawing is asked to stop first.
pub async fn run_server(state: Arc<AppState>, listen: &str) -> anyhow::Result<()> {
    let listen_addr: std::net::SocketAddr = listen
        .parse()
        .with_context(|| format!("invalid listen address: {listen}"))?;

    let listener = tokio::net::TcpListener::bind(listen_addr)
        .await
        .with_context(|| format!("failed to bind {listen_addr}"))?;

    tracing::info!(%listen_addr, "web UI listening");

    let app = create_router(state.clone());
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(state))
        .await
        .context("HTTP server error")?;

    Ok(())
}

async fn shutdown_signal(state: Arc<AppState>) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received SIGINT"),
        () = terminate => tracing::info!("received SIGTERM"),
    }

    state.request_stop();
}
