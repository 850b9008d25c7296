//! Server configuration

use std::path::PathBuf;
use std::time::Duration;

use fallbacks_lib::settings::ServerSettings;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind, e.g. `127.0.0.1:3000`
    pub listen: String,
    /// Directory template paths are resolved against
    pub template_root: PathBuf,
    pub rate_limit_window: Duration,
    pub rate_limit_max_attempts: u32,
    pub max_template_bytes: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::from_settings(&ServerSettings::default())
    }
}

impl ServerConfig {
    pub fn from_settings(settings: &ServerSettings) -> Self {
        Self {
            listen: settings.listen.clone(),
            template_root: settings.template_root.clone(),
            rate_limit_window: Duration::from_secs(settings.rate_limit_window_secs),
            rate_limit_max_attempts: settings.rate_limit_max_attempts,
            max_template_bytes: settings.max_template_bytes,
        }
    }
}
