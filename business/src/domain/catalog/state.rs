use crate::domain::product::model::Product;
use crate::domain::product::value_objects::ProductId;

/// Client-side catalog: the product list plus the status of the last full load.
///
/// `items` holds at most one product per id; `error` is only set after a
/// failed full load and cleared by the next successful one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogState {
    pub items: Vec<Product>,
    pub loading: bool,
    pub error: Option<String>,
}

/// The complete set of transitions the catalog accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogAction {
    SetProducts(Vec<Product>),
    SetLoading(bool),
    SetError(String),
    AddProduct(Product),
    RemoveProduct(ProductId),
    ToggleLike(ProductId),
    UpdateProduct(Product),
}

impl CatalogState {
    /// Applies one transition. Total: unknown ids leave the state unchanged.
    pub fn reduce(mut self, action: CatalogAction) -> Self {
        match action {
            CatalogAction::SetProducts(products) => {
                self.items = products
                    .into_iter()
                    .map(|product| Product {
                        is_liked: false,
                        ..product
                    })
                    .collect();
                self.loading = false;
                self.error = None;
            }
            CatalogAction::SetLoading(loading) => {
                self.loading = loading;
            }
            CatalogAction::SetError(message) => {
                self.error = Some(message);
                self.loading = false;
            }
            CatalogAction::AddProduct(product) => {
                // Ids come from the remote service, so no duplicate check here.
                self.items.push(Product {
                    is_liked: false,
                    ..product
                });
            }
            CatalogAction::RemoveProduct(id) => {
                self.items.retain(|item| item.id != id);
            }
            CatalogAction::ToggleLike(id) => {
                if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
                    item.is_liked = !item.is_liked;
                }
            }
            CatalogAction::UpdateProduct(product) => {
                if let Some(item) = self.items.iter_mut().find(|item| item.id == product.id) {
                    *item = product;
                }
            }
        }
        self
    }

    pub fn find(&self, id: &ProductId) -> Option<&Product> {
        self.items.iter().find(|item| &item.id == id)
    }
}
