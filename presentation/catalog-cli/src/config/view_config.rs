use std::time::Duration;

use business::application::catalog::search_debouncer::DEFAULT_QUIET_PERIOD_MS;
use business::domain::catalog::view::DEFAULT_PAGE_SIZE;

use super::env_or;

/// Catalog view configuration
#[derive(Debug, Clone)]
pub struct ViewConfig {
    pub page_size: usize,
    pub search_debounce: Duration,
}

impl ViewConfig {
    /// Environment variables:
    /// - CATALOG_PAGE_SIZE: Products per page (default: 3)
    /// - CATALOG_SEARCH_DEBOUNCE_MS: Search quiet period (default: 300)
    pub fn from_env() -> Self {
        let page_size = env_or("CATALOG_PAGE_SIZE", DEFAULT_PAGE_SIZE).max(1);
        let search_debounce =
            Duration::from_millis(env_or("CATALOG_SEARCH_DEBOUNCE_MS", DEFAULT_QUIET_PERIOD_MS));

        Self {
            page_size,
            search_debounce,
        }
    }
}
