use std::sync::Arc;

use async_trait::async_trait;

use crate::application::catalog::store::CatalogStore;
use crate::domain::catalog::state::CatalogAction;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::gateway::ProductGateway;
use crate::domain::product::model::Product;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub gateway: Arc<dyn ProductGateway>,
    pub store: Arc<CatalogStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Creating product: {}", params.draft.title));

        let id = self.gateway.create(&params.draft).await.map_err(|e| {
            self.logger
                .warn(&format!("Failed to create product: {}", e));
            ProductError::from(e)
        })?;

        let product = Product::from_draft(id, params.draft);
        self.store
            .dispatch(CatalogAction::AddProduct(product.clone()));

        self.logger
            .info(&format!("Product created: {}", product.id));
        Ok(product)
    }
}
