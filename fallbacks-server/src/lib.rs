//! HTTP server for template source downloads.
//!
//! Serves `GET /api/download-template?path=...` with per-client rate
//! limiting, plus a `/health` probe reporting the catalog size.

pub mod config;
pub mod error;
pub mod rate_limit;
pub mod routes;
pub mod state;

pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use routes::build_router;
pub use state::AppState;

use std::net::SocketAddr;
use std::sync::Arc;

use fallbacks_catalog::Catalog;
use tokio::net::TcpListener;

/// Template download server
pub struct FallbacksServer {
    state: Arc<AppState>,
}

impl FallbacksServer {
    pub fn new(config: ServerConfig, catalog: Catalog) -> Self {
        Self {
            state: Arc::new(AppState::new(config, catalog)),
        }
    }

    pub fn state(&self) -> &Arc<AppState> {
        &self.state
    }

    /// Bind the configured address and serve until Ctrl-C.
    pub async fn run(self) -> std::io::Result<()> {
        let listener = TcpListener::bind(&self.state.config.listen).await?;
        log::info!(
            "Serving {} templates from {} on http://{}",
            self.state.catalog.len(),
            self.state.config.template_root.display(),
            listener.local_addr()?
        );

        let router = build_router(self.state.clone());
        axum::serve(
            listener,
            router.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(shutdown_signal())
        .await
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    log::info!("Shutting down");
}
