use std::sync::Arc;

use logger::TracingLogger;

use catalog_api::client::CatalogApiClient;
use catalog_api::product_gateway::ProductGatewayHttp;

use business::application::catalog::store::CatalogStore;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::load_all::LoadProductsUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::domain::product::use_cases::create::CreateProductUseCase;
use business::domain::product::use_cases::delete::DeleteProductUseCase;
use business::domain::product::use_cases::load_all::LoadProductsUseCase;
use business::domain::product::use_cases::update::UpdateProductUseCase;

use crate::config::catalog_api_config::CatalogApiConfig;

pub struct DependencyContainer {
    pub store: Arc<CatalogStore>,
    pub load_products: Arc<dyn LoadProductsUseCase>,
    pub create_product: Arc<dyn CreateProductUseCase>,
    pub update_product: Arc<dyn UpdateProductUseCase>,
    pub delete_product: Arc<dyn DeleteProductUseCase>,
}

impl DependencyContainer {
    pub fn new(config: &CatalogApiConfig) -> Self {
        let logger = Arc::new(TracingLogger::new("products"));
        let store = Arc::new(CatalogStore::new());

        // Infrastructure adapters
        let client = CatalogApiClient::new(config.base_url.clone(), config.timeout);
        let gateway = Arc::new(ProductGatewayHttp::new(client));

        // Product use cases
        let load_products = Arc::new(LoadProductsUseCaseImpl {
            gateway: gateway.clone(),
            store: store.clone(),
            logger: logger.clone(),
        });
        let create_product = Arc::new(CreateProductUseCaseImpl {
            gateway: gateway.clone(),
            store: store.clone(),
            logger: logger.clone(),
        });
        let update_product = Arc::new(UpdateProductUseCaseImpl {
            gateway: gateway.clone(),
            store: store.clone(),
            logger: logger.clone(),
        });
        let delete_product = Arc::new(DeleteProductUseCaseImpl {
            gateway,
            store: store.clone(),
            logger,
        });

        Self {
            store,
            load_products,
            create_product,
            update_product,
            delete_product,
        }
    }
}
