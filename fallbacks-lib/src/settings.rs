//! Shared application settings.
//!
//! The CLI and the server read `~/.config/fallbacks/settings.toml`. Every
//! field has a default, so a missing file or a missing table is fine.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::template::MAX_TEMPLATE_BYTES;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub server: ServerSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CatalogSettings {
    /// Catalog YAML file or directory. Unset means the bundled catalog.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_listen")]
    pub listen: String,
    /// Directory template paths are resolved against.
    #[serde(default = "default_template_root")]
    pub template_root: PathBuf,
    #[serde(default = "default_rate_limit_window_secs")]
    pub rate_limit_window_secs: u64,
    #[serde(default = "default_rate_limit_max_attempts")]
    pub rate_limit_max_attempts: u32,
    #[serde(default = "default_max_template_bytes")]
    pub max_template_bytes: u64,
}

fn default_listen() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_template_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_rate_limit_window_secs() -> u64 {
    60
}

fn default_rate_limit_max_attempts() -> u32 {
    10
}

fn default_max_template_bytes() -> u64 {
    MAX_TEMPLATE_BYTES
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            template_root: default_template_root(),
            rate_limit_window_secs: default_rate_limit_window_secs(),
            rate_limit_max_attempts: default_rate_limit_max_attempts(),
            max_template_bytes: default_max_template_bytes(),
        }
    }
}

/// Returns `~/.config/fallbacks/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("fallbacks").join("settings.toml")
}

/// Load settings from the default location.
pub fn load_settings() -> Settings {
    load_settings_from(&settings_path())
}

/// Load settings from `path`, returning defaults if missing or corrupt.
pub fn load_settings_from(path: &Path) -> Settings {
    match std::fs::read_to_string(path) {
        Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
            log::warn!("Failed to parse settings at {}: {}", path.display(), e);
            Settings::default()
        }),
        Err(_) => Settings::default(),
    }
}

/// Save settings to `path` atomically (write to temp, then rename).
pub fn save_settings_to(settings: &Settings, path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let contents = toml::to_string_pretty(settings).map_err(std::io::Error::other)?;
    let tmp = path.with_extension("toml.tmp");
    std::fs::write(&tmp, contents)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}

/// Resolve the catalog location: CLI override, then settings, then `None`
/// for the bundled catalog.
pub fn resolve_catalog_path(cli_override: Option<PathBuf>, settings: &Settings) -> Option<PathBuf> {
    cli_override.or_else(|| settings.catalog.path.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_defaults() {
        let tmp = TempDir::new().unwrap();
        let settings = load_settings_from(&tmp.path().join("settings.toml"));
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.server.rate_limit_window_secs, 60);
        assert_eq!(settings.server.rate_limit_max_attempts, 10);
        assert_eq!(settings.server.max_template_bytes, 100_000);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("settings.toml");
        std::fs::write(&path, "[server]\nlisten = \"0.0.0.0:8080\"\n").unwrap();
        let settings = load_settings_from(&path);
        assert_eq!(settings.server.listen, "0.0.0.0:8080");
        assert_eq!(settings.server.rate_limit_max_attempts, 10);
        assert_eq!(settings.catalog.path, None);
    }

    #[test]
    fn corrupt_file_gives_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("settings.toml");
        std::fs::write(&path, "[server\nlisten = ").unwrap();
        assert_eq!(load_settings_from(&path), Settings::default());
    }

    #[test]
    fn save_then_load() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("settings.toml");
        let mut settings = Settings::default();
        settings.catalog.path = Some(PathBuf::from("/srv/catalog"));
        settings.server.rate_limit_max_attempts = 3;
        save_settings_to(&settings, &path).unwrap();
        assert_eq!(load_settings_from(&path), settings);
        assert!(!path.with_extension("toml.tmp").exists());
    }

    #[test]
    fn cli_override_wins() {
        let mut settings = Settings::default();
        settings.catalog.path = Some(PathBuf::from("from-settings"));
        assert_eq!(
            resolve_catalog_path(Some(PathBuf::from("from-cli")), &settings),
            Some(PathBuf::from("from-cli"))
        );
        assert_eq!(
            resolve_catalog_path(None, &settings),
            Some(PathBuf::from("from-settings"))
        );
        assert_eq!(resolve_catalog_path(None, &Settings::default()), None);
    }
}
