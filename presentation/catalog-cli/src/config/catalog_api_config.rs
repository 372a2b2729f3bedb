use std::env;
use std::time::Duration;

use catalog_api::client::DEFAULT_BASE_URL;

use super::env_or;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Remote catalog service configuration
#[derive(Debug, Clone)]
pub struct CatalogApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl CatalogApiConfig {
    /// Load service configuration from environment variables
    ///
    /// Environment variables:
    /// - CATALOG_API_URL: Base URL of the service (default: "https://fakestoreapi.com")
    /// - CATALOG_API_TIMEOUT_SECS: Request timeout in seconds (default: 30)
    pub fn from_env() -> Self {
        let base_url = env::var("CATALOG_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let timeout = Duration::from_secs(env_or("CATALOG_API_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS));

        Self { base_url, timeout }
    }
}
