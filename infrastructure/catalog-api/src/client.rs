use std::time::Duration;

use reqwest::Client;

use business::domain::product::value_objects::ProductId;

pub const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";

/// Shared HTTP client configuration for the remote catalog service.
pub struct CatalogApiClient {
    pub client: Client,
    pub base_url: String,
}

impl CatalogApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Returns the collection endpoint URL.
    pub fn products_url(&self) -> String {
        format!("{}/products", self.base_url)
    }

    /// Returns the endpoint URL of a single product.
    pub fn product_url(&self, id: &ProductId) -> String {
        format!("{}/products/{}", self.base_url, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_urls_without_double_slash() {
        let client = CatalogApiClient::new("https://fakestoreapi.com/", Duration::from_secs(5));

        assert_eq!(client.products_url(), "https://fakestoreapi.com/products");
        assert_eq!(
            client.product_url(&ProductId::new("7")),
            "https://fakestoreapi.com/products/7"
        );
    }
}
