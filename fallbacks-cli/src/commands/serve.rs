use std::path::PathBuf;

use fallbacks_catalog::Catalog;
use fallbacks_lib::Settings;
use fallbacks_server::{FallbacksServer, ServerConfig};

use crate::CliError;

/// Run the download server until interrupted.
pub(crate) fn run_serve(
    catalog: Catalog,
    settings: &Settings,
    listen: Option<String>,
    root: Option<PathBuf>,
) -> Result<(), CliError> {
    let mut config = ServerConfig::from_settings(&settings.server);
    if let Some(listen) = listen {
        config.listen = listen;
    }
    if let Some(root) = root {
        config.template_root = root;
    }
    if !config.template_root.is_dir() {
        return Err(CliError::config(format!(
            "template root {} is not a directory",
            config.template_root.display()
        )));
    }

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::runtime(format!("Failed to create tokio runtime: {}", e)))?;
    rt.block_on(FallbacksServer::new(config, catalog).run())?;
    Ok(())
}
