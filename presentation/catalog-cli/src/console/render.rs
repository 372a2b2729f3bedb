use business::domain::catalog::state::CatalogState;
use business::domain::catalog::view::{CatalogPage, ViewQuery};
use business::domain::product::model::Product;

fn like_marker(product: &Product) -> &'static str {
    if product.is_liked { "♥" } else { " " }
}

/// Renders the current page, or the loading/error status of the catalog.
pub fn render_page(state: &CatalogState, page: &CatalogPage, query: &ViewQuery) -> String {
    if state.loading {
        return "Loading...".to_string();
    }
    if let Some(error) = &state.error {
        return error.clone();
    }

    let mut out = format!(
        "search: {:?}  category: {}  favorites: {}\n",
        query.search(),
        query.category(),
        if query.favorites_only() { "on" } else { "off" }
    );

    if page.items.is_empty() {
        out.push_str(if query.favorites_only() {
            "Nothing has been added to favorites."
        } else {
            "No products found."
        });
        return out;
    }

    for product in &page.items {
        out.push_str(&format!(
            "{} [{}] {} ({}) ${:.2}\n",
            like_marker(product),
            product.id,
            product.title,
            product.category,
            product.price
        ));
    }
    out.push_str(&format!("page {} of {}", query.page(), page.total_pages));
    out
}

pub fn render_product(product: &Product) -> String {
    format!(
        "{} [{}] {}\n  category: {}\n  price: ${:.2}\n  image: {}\n  {}",
        like_marker(product),
        product.id,
        product.title,
        product.category,
        product.price,
        product.image,
        product.description
    )
}

pub fn render_categories(categories: &[String]) -> String {
    categories.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::catalog::view::derive_page;
    use business::domain::product::value_objects::ProductId;

    fn product(id: &str, title: &str, is_liked: bool) -> Product {
        Product {
            is_liked,
            ..Product::from_remote(
                ProductId::new(id),
                title.to_string(),
                7.95,
                "Rain jacket for women".to_string(),
                "https://example.com/rain.png".to_string(),
                "women's clothing".to_string(),
            )
        }
    }

    #[test]
    fn should_render_loading_before_anything_else() {
        let state = CatalogState {
            loading: true,
            ..CatalogState::default()
        };
        let page = derive_page(&state.items, &ViewQuery::default(), 3);

        assert_eq!(render_page(&state, &page, &ViewQuery::default()), "Loading...");
    }

    #[test]
    fn should_render_load_error() {
        let state = CatalogState {
            error: Some("Failed to load products. Please try again.".to_string()),
            ..CatalogState::default()
        };
        let page = derive_page(&state.items, &ViewQuery::default(), 3);

        assert_eq!(
            render_page(&state, &page, &ViewQuery::default()),
            "Failed to load products. Please try again."
        );
    }

    #[test]
    fn should_render_items_with_page_footer() {
        let state = CatalogState {
            items: vec![product("1", "Rain Jacket", true), product("2", "Boat Neck", false)],
            ..CatalogState::default()
        };
        let query = ViewQuery::default();
        let page = derive_page(&state.items, &query, 3);

        let rendered = render_page(&state, &page, &query);

        assert!(rendered.contains("♥ [1] Rain Jacket (women's clothing) $7.95"));
        assert!(rendered.contains("  [2] Boat Neck"));
        assert!(rendered.ends_with("page 1 of 1"));
    }

    #[test]
    fn should_render_empty_favorites_message() {
        let state = CatalogState {
            items: vec![product("1", "Rain Jacket", false)],
            ..CatalogState::default()
        };
        let mut query = ViewQuery::default();
        query.set_favorites_only(true);
        let page = derive_page(&state.items, &query, 3);

        assert!(
            render_page(&state, &page, &query).ends_with("Nothing has been added to favorites.")
        );
    }
}
