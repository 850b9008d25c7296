use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Number of catalog entries being served
    pub templates: usize,
}

/// GET /health
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    log::debug!("health check requested");
    Json(HealthResponse {
        status: "ok",
        templates: state.catalog.len(),
    })
}
