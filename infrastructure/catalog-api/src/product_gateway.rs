use async_trait::async_trait;
use reqwest::Response;

use business::domain::errors::GatewayError;
use business::domain::product::gateway::ProductGateway;
use business::domain::product::model::{Product, ProductDraft};
use business::domain::product::value_objects::ProductId;

use crate::client::CatalogApiClient;
use crate::dto::{CreatedProduct, ProductPayload, RemoteProduct, coerce_id};

pub struct ProductGatewayHttp {
    client: CatalogApiClient,
}

impl ProductGatewayHttp {
    pub fn new(client: CatalogApiClient) -> Self {
        Self { client }
    }

    /// Network errors and non-2xx statuses both count as failures.
    fn ensure_success(response: Response) -> Result<Response, GatewayError> {
        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::unexpected_status(status.as_u16()));
        }
        Ok(response)
    }
}

#[async_trait]
impl ProductGateway for ProductGatewayHttp {
    async fn fetch_all(&self) -> Result<Vec<Product>, GatewayError> {
        let response = self
            .client
            .client
            .get(self.client.products_url())
            .send()
            .await
            .map_err(|_| GatewayError::request_failed())?;

        let records: Vec<RemoteProduct> = Self::ensure_success(response)?
            .json()
            .await
            .map_err(|_| GatewayError::invalid_response())?;

        records
            .into_iter()
            .map(RemoteProduct::into_product)
            .collect()
    }

    async fn delete(&self, id: &ProductId) -> Result<(), GatewayError> {
        let response = self
            .client
            .client
            .delete(self.client.product_url(id))
            .send()
            .await
            .map_err(|_| GatewayError::request_failed())?;

        Self::ensure_success(response)?;
        Ok(())
    }

    async fn update(&self, product: &Product) -> Result<Option<Product>, GatewayError> {
        let response = self
            .client
            .client
            .put(self.client.product_url(&product.id))
            .json(&ProductPayload::from(product))
            .send()
            .await
            .map_err(|_| GatewayError::request_failed())?;

        // The echo is informational only; an undecodable body is not a failure.
        let echoed = Self::ensure_success(response)?
            .json::<RemoteProduct>()
            .await
            .ok()
            .and_then(|remote| remote.into_product().ok());
        Ok(echoed)
    }

    async fn create(&self, draft: &ProductDraft) -> Result<ProductId, GatewayError> {
        let response = self
            .client
            .client
            .post(self.client.products_url())
            .json(&ProductPayload::from(draft))
            .send()
            .await
            .map_err(|_| GatewayError::request_failed())?;

        let created: CreatedProduct = Self::ensure_success(response)?
            .json()
            .await
            .map_err(|_| GatewayError::invalid_response())?;

        coerce_id(&created.id)
    }
}
