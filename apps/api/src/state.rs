use std::sync::Arc;

use crate::config::Config;
use crate::media::ImageSlots;
use crate::registry::PortfolioStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Users and portfolios. Lives as long as the process.
    pub store: Arc<PortfolioStore>,
    /// Fixed-name original/cropped image slots under `config.upload_dir`.
    pub slots: ImageSlots,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            store: Arc::new(PortfolioStore::new()),
            slots: ImageSlots::new(config.upload_dir.clone()),
            config,
        }
    }
}
