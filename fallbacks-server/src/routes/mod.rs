//! HTTP route handlers and router configuration

mod download;
mod health;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;

use crate::error::ServerError;
use crate::state::AppState;

/// Build the application router
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route(
            "/api/download-template",
            get(download::download_template).fallback(method_not_allowed),
        )
        .fallback(route_not_found)
        .with_state(state)
}

async fn method_not_allowed() -> ServerError {
    ServerError::MethodNotAllowed
}

async fn route_not_found() -> ServerError {
    ServerError::RouteNotFound
}
