use std::sync::Arc;

use async_trait::async_trait;

use crate::application::catalog::store::CatalogStore;
use crate::domain::catalog::state::CatalogAction;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::gateway::ProductGateway;
use crate::domain::product::model::Product;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub gateway: Arc<dyn ProductGateway>,
    pub store: Arc<CatalogStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        let product = params.product;
        self.logger
            .info(&format!("Updating product: {}", product.id));

        let echoed = self.gateway.update(&product).await.map_err(|e| {
            self.logger
                .warn(&format!("Failed to update product {}: {}", product.id, e));
            ProductError::from(e)
        })?;

        // The remote service does not persist edits, so the submitted product
        // is committed instead of the echo. Whether server or client state
        // should be authoritative against a real backend is still undecided.
        if let Some(echoed) = echoed
            && echoed.draft() != product.draft()
        {
            self.logger.debug(&format!(
                "Service echo for product {} differs from submitted fields; keeping submitted",
                product.id
            ));
        }

        self.store
            .dispatch(CatalogAction::UpdateProduct(product.clone()));

        self.logger
            .info(&format!("Product updated: {}", product.id));
        Ok(product)
    }
}
