use async_trait::async_trait;

use crate::domain::errors::GatewayError;

use super::model::{Product, ProductDraft};
use super::value_objects::ProductId;

/// Port to the remote catalog service. The service does not persist
/// mutations, so nothing returned by `update` is authoritative.
#[async_trait]
pub trait ProductGateway: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<Product>, GatewayError>;
    async fn delete(&self, id: &ProductId) -> Result<(), GatewayError>;
    /// Returns the echoed record when the response body could be decoded.
    async fn update(&self, product: &Product) -> Result<Option<Product>, GatewayError>;
    /// Returns the id assigned by the service.
    async fn create(&self, draft: &ProductDraft) -> Result<ProductId, GatewayError>;
}
