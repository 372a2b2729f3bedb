use super::{catalog_api_config::CatalogApiConfig, view_config::ViewConfig};
use crate::cli::Cli;

pub struct AppConfig {
    pub catalog_api: CatalogApiConfig,
    pub view: ViewConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            catalog_api: CatalogApiConfig::from_env(),
            view: ViewConfig::from_env(),
        }
    }

    /// Command line flags take precedence over the environment.
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(api_url) = &cli.api_url {
            self.catalog_api.base_url = api_url.clone();
        }
        if let Some(page_size) = cli.page_size {
            self.view.page_size = page_size.max(1);
        }
        self
    }
}
