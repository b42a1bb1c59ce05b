//! Read-only HTTP surface over the archive
//!
//! One fallback route takes every request: the percent-decoded path is
//! classified and answered from the blocking pool, since archive queries
//! are synchronous filesystem reads.

pub mod dispatch;

use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::http::Uri;
use axum::response::{IntoResponse, Response};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::app::services::archive::ArchiveService;
use crate::app::services::path_classifier::classify;
use crate::config::ServerConfig;
use crate::error::{ArchiveError, Result};

pub use dispatch::{ArchiveReply, ReplyError, answer, json_response};

/// Shared state handed to every request
#[derive(Debug, Clone)]
pub struct AppState {
    pub archive: Arc<ArchiveService>,
}

/// Build the router for an opened archive
pub fn router(archive: Arc<ArchiveService>) -> Router {
    Router::new()
        .fallback(handle_request)
        .with_state(AppState { archive })
        .layer(TraceLayer::new_for_http())
}

/// Open the configured archive and serve it until Ctrl-C
pub async fn serve(config: ServerConfig) -> Result<()> {
    let archive = Arc::new(ArchiveService::open(&config.data_dir)?);

    let listener = TcpListener::bind(config.listen_addr)
        .await
        .map_err(|e| ArchiveError::internal(format!("failed to bind {}", config.listen_addr), e))?;

    info!(
        "Serving payments from {} on http://{}",
        config.data_dir.display(),
        config.listen_addr
    );

    axum::serve(listener, router(archive))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ArchiveError::internal("server failed", e))
}

async fn handle_request(State(state): State<AppState>, uri: Uri) -> Response {
    let path = match urlencoding::decode(uri.path()) {
        Ok(path) => path.into_owned(),
        Err(e) => {
            warn!("Undecodable request path '{}': {}", uri.path(), e);
            return ReplyError::ServerError.into_response();
        }
    };

    let shape = classify(&path);
    let archive = state.archive.clone();

    match tokio::task::spawn_blocking(move || answer(&archive, &shape)).await {
        Ok(Ok(reply)) => json_response(&reply),
        Ok(Err(reply_error)) => reply_error.into_response(),
        Err(e) => {
            error!("Archive query task failed: {}", e);
            ReplyError::ServerError.into_response()
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to install CTRL+C signal handler: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Received CTRL+C, shutting down gracefully");
}
