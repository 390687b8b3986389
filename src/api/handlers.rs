//! HTTP API handlers.

use std::sync::Arc;

use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::config::Config;

/// Fallback page shown when the frontend has not been built yet.
///
/// Kept as an external template resource so content stays out of the
/// control logic.
pub const RECOVERY_PAGE: &str = include_str!("../../templates/recovery.html");

/// System name reported by the health endpoint.
pub const SYSTEM_NAME: &str = "J.A.R.V.I.S.";

/// Application state shared with handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Configuration snapshot taken at process start.
    pub config: Arc<Config>,
}

impl AppState {
    /// Create new app state from a configuration snapshot.
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status: "online".
    pub status: &'static str,
    /// System name.
    pub system: &'static str,
    /// Whether the build output directory exists right now.
    pub build_exists: bool,
}

/// Health check handler - always returns 200.
///
/// `build_exists` is re-read from the filesystem on every request; no state
/// is retained between requests.
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "online",
        system: SYSTEM_NAME,
        build_exists: state.config.build_exists(),
    })
}

/// Root handler - serves the built entry file, or the recovery page when the
/// frontend has not been compiled yet. Both cases are 200.
pub async fn index(State(state): State<AppState>) -> Response {
    let index_path = state.config.index_path();

    match tokio::fs::read(&index_path).await {
        Ok(bytes) => (
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            bytes,
        )
            .into_response(),
        Err(_) => Html(RECOVERY_PAGE).into_response(),
    }
}
