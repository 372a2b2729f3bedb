use std::sync::Arc;

use async_trait::async_trait;

use crate::application::catalog::store::CatalogStore;
use crate::domain::catalog::state::CatalogAction;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::gateway::ProductGateway;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};

pub struct DeleteProductUseCaseImpl {
    pub gateway: Arc<dyn ProductGateway>,
    pub store: Arc<CatalogStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError> {
        self.logger
            .info(&format!("Deleting product: {}", params.id));

        if let Err(e) = self.gateway.delete(&params.id).await {
            self.logger
                .warn(&format!("Failed to delete product {}: {}", params.id, e));
            return Err(e.into());
        }

        self.store
            .dispatch(CatalogAction::RemoveProduct(params.id.clone()));

        self.logger.info(&format!("Product deleted: {}", params.id));
        Ok(())
    }
}
