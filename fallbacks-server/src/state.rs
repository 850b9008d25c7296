//! Shared application state

use fallbacks_catalog::Catalog;
use fallbacks_lib::TemplateLoader;

use crate::config::ServerConfig;
use crate::rate_limit::RateLimiter;

pub struct AppState {
    pub config: ServerConfig,
    pub catalog: Catalog,
    pub loader: TemplateLoader,
    pub limiter: RateLimiter,
}

impl AppState {
    pub fn new(config: ServerConfig, catalog: Catalog) -> Self {
        let loader = TemplateLoader::new(config.template_root.clone())
            .with_max_bytes(config.max_template_bytes);
        let limiter = RateLimiter::new(config.rate_limit_window, config.rate_limit_max_attempts);
        Self {
            config,
            catalog,
            loader,
            limiter,
        }
    }
}
