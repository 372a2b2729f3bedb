use std::sync::Arc;

use async_trait::async_trait;

use crate::application::catalog::store::CatalogStore;
use crate::domain::catalog::state::CatalogAction;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::gateway::ProductGateway;
use crate::domain::product::use_cases::load_all::LoadProductsUseCase;

/// User-facing message stored in the catalog when a full load fails.
pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load products. Please try again.";

pub struct LoadProductsUseCaseImpl {
    pub gateway: Arc<dyn ProductGateway>,
    pub store: Arc<CatalogStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LoadProductsUseCase for LoadProductsUseCaseImpl {
    async fn execute(&self) -> Result<usize, ProductError> {
        self.logger.info("Loading product catalog");
        self.store.dispatch(CatalogAction::SetLoading(true));

        let result = match self.gateway.fetch_all().await {
            Ok(products) => {
                let count = products.len();
                self.store.dispatch(CatalogAction::SetProducts(products));
                self.logger.info(&format!("Loaded {} products", count));
                Ok(count)
            }
            Err(e) => {
                self.logger
                    .error(&format!("Failed to load products: {}", e));
                self.store
                    .dispatch(CatalogAction::SetError(LOAD_FAILURE_MESSAGE.to_string()));
                Err(ProductError::LoadFailed)
            }
        };

        self.store.dispatch(CatalogAction::SetLoading(false));
        result
    }
}
