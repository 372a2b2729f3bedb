use async_trait::async_trait;

use crate::domain::product::errors::ProductError;

#[async_trait]
pub trait LoadProductsUseCase: Send + Sync {
    /// Replaces the catalog with the remote collection and returns its size.
    async fn execute(&self) -> Result<usize, ProductError>;
}
