//! Template download endpoint: GET /api/download-template?path=...

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{ConnectInfo, RawQuery, State};
use axum::http::{HeaderMap, HeaderValue, header};
use axum::response::{IntoResponse, Response};
use fallbacks_lib::TemplateError;

use crate::error::{Result, ServerError};
use crate::rate_limit::client_key;
use crate::state::AppState;

/// First `path` value in the query string. Repeated keys are ignored.
fn path_param(query: Option<&str>) -> std::result::Result<String, TemplateError> {
    let Some(query) = query else {
        return Err(TemplateError::MissingPath);
    };
    let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query)
        .map_err(|e| TemplateError::invalid_path(format!("malformed query string: {e}")))?;
    pairs
        .into_iter()
        .find_map(|(key, value)| (key == "path").then_some(value))
        .ok_or(TemplateError::MissingPath)
}

pub async fn download_template(
    State(state): State<Arc<AppState>>,
    peer: Option<ConnectInfo<SocketAddr>>,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
) -> Result<Response> {
    let client = client_key(&headers, peer.map(|ConnectInfo(addr)| addr));
    if !state.limiter.check(&client).await {
        return Err(ServerError::RateLimited);
    }

    let raw_path = path_param(query.as_deref())?;
    let loader_state = Arc::clone(&state);
    let source = tokio::task::spawn_blocking(move || loader_state.loader.load(&raw_path))
        .await
        .map_err(|e| ServerError::internal(format!("template read task failed: {e}")))??;

    log::info!("Serving template {} to {}", source.path, client);

    let disposition = HeaderValue::from_str(&format!(
        "attachment; filename=\"{}\"",
        source.file_name
    ))
    .map_err(|e| ServerError::internal(e.to_string()))?;

    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(source.content_type)),
            (header::CONTENT_DISPOSITION, disposition),
            (header::CACHE_CONTROL, HeaderValue::from_static("public, max-age=3600")),
            (header::X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff")),
            (header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY")),
        ],
        source.content,
    )
        .into_response())
}
