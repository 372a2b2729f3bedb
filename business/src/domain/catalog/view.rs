use crate::domain::product::model::Product;
use crate::domain::product::value_objects::{ALL_CATEGORIES, CategoryFilter};

pub const DEFAULT_PAGE_SIZE: usize = 3;

/// UI selections that drive the catalog view.
///
/// Changing the search text, the category or the favorites toggle sends the
/// view back to the first page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewQuery {
    search: String,
    category: CategoryFilter,
    favorites_only: bool,
    page: usize,
}

impl Default for ViewQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: CategoryFilter::All,
            favorites_only: false,
            page: 1,
        }
    }
}

impl ViewQuery {
    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    pub fn favorites_only(&self) -> bool {
        self.favorites_only
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.category = category;
        self.page = 1;
    }

    pub fn set_favorites_only(&mut self, favorites_only: bool) {
        self.favorites_only = favorites_only;
        self.page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    fn matches(&self, product: &Product, needle: &str) -> bool {
        (!self.favorites_only || product.is_liked)
            && product.title.to_lowercase().contains(needle)
            && self.category.matches(&product.category)
    }
}

/// One page of the filtered catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogPage {
    pub items: Vec<Product>,
    pub total_pages: usize,
}

/// Filters `items` by favorites, title search and category, then cuts out
/// the requested page. Order is preserved; out-of-range pages are empty.
pub fn derive_page(items: &[Product], query: &ViewQuery, page_size: usize) -> CatalogPage {
    let page_size = page_size.max(1);
    let needle = query.search.to_lowercase();
    let filtered: Vec<&Product> = items
        .iter()
        .filter(|product| query.matches(product, &needle))
        .collect();

    let total_pages = filtered.len().div_ceil(page_size);
    let items = match query.page.checked_sub(1) {
        Some(index) => filtered
            .into_iter()
            .skip(index.saturating_mul(page_size))
            .take(page_size)
            .cloned()
            .collect(),
        None => Vec::new(),
    };

    CatalogPage { items, total_pages }
}

/// Category choices for the view: the "all" sentinel first, then every
/// distinct category in order of first appearance.
pub fn categories(items: &[Product]) -> Vec<String> {
    let mut categories = vec![ALL_CATEGORIES.to_string()];
    for product in items {
        if !categories.contains(&product.category) {
            categories.push(product.category.clone());
        }
    }
    categories
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::value_objects::ProductId;
    use proptest::prelude::*;

    fn product(id: usize, title: &str, category: &str, is_liked: bool) -> Product {
        Product {
            id: ProductId::from(id as u64),
            title: title.to_string(),
            price: 9.5,
            description: "Description long enough".to_string(),
            image: "https://example.com/i.png".to_string(),
            category: category.to_string(),
            is_liked,
        }
    }

    fn seven_items() -> Vec<Product> {
        (0..7)
            .map(|i| product(i, &format!("Item {}", i), "misc", false))
            .collect()
    }

    fn ids(page: &CatalogPage) -> Vec<String> {
        page.items.iter().map(|p| p.id.to_string()).collect()
    }

    #[test]
    fn should_split_seven_items_into_three_pages() {
        let items = seven_items();
        let mut query = ViewQuery::default();

        let first = derive_page(&items, &query, 3);
        query.set_page(2);
        let second = derive_page(&items, &query, 3);
        query.set_page(3);
        let third = derive_page(&items, &query, 3);

        assert_eq!(first.total_pages, 3);
        assert_eq!(ids(&first), vec!["0", "1", "2"]);
        assert_eq!(ids(&second), vec!["3", "4", "5"]);
        assert_eq!(ids(&third), vec!["6"]);
    }

    #[test]
    fn should_report_zero_pages_when_nothing_matches() {
        let mut query = ViewQuery::default();
        query.set_search("nothing like this");

        let page = derive_page(&seven_items(), &query, 3);

        assert_eq!(page.total_pages, 0);
        assert!(page.items.is_empty());
    }

    #[test]
    fn should_return_empty_page_when_page_is_out_of_range() {
        let mut query = ViewQuery::default();
        query.set_page(4);
        assert!(derive_page(&seven_items(), &query, 3).items.is_empty());

        query.set_page(0);
        assert!(derive_page(&seven_items(), &query, 3).items.is_empty());
    }

    #[test]
    fn should_match_search_case_insensitively() {
        let items = vec![
            product(1, "Laptop Stand", "electronics", false),
            product(2, "Cotton Jacket", "clothing", false),
        ];
        let mut query = ViewQuery::default();
        query.set_search("lap");

        let page = derive_page(&items, &query, 3);

        assert_eq!(ids(&page), vec!["1"]);
    }

    #[test]
    fn should_return_search_filtered_set_when_category_is_all() {
        let items = vec![
            product(1, "Laptop Stand", "electronics", false),
            product(2, "Laptop Bag", "accessories", false),
            product(3, "Cotton Jacket", "clothing", false),
        ];
        let mut query = ViewQuery::default();
        query.set_search("LAPTOP");
        query.set_category(CategoryFilter::from("all"));

        let page = derive_page(&items, &query, 10);

        assert_eq!(ids(&page), vec!["1", "2"]);
    }

    #[test]
    fn should_keep_only_selected_category() {
        let items = vec![
            product(1, "Laptop Stand", "electronics", false),
            product(2, "Monitor", "electronics", false),
            product(3, "Cotton Jacket", "clothing", false),
        ];
        let mut query = ViewQuery::default();
        query.set_category(CategoryFilter::from("clothing"));

        assert_eq!(ids(&derive_page(&items, &query, 10)), vec!["3"]);
    }

    #[test]
    fn should_keep_only_liked_items_when_favorites_only() {
        let items = vec![
            product(1, "Laptop Stand", "electronics", true),
            product(2, "Monitor", "electronics", false),
            product(3, "Cotton Jacket", "clothing", true),
        ];
        let mut query = ViewQuery::default();
        query.set_favorites_only(true);

        assert_eq!(ids(&derive_page(&items, &query, 10)), vec!["1", "3"]);
    }

    #[test]
    fn should_reset_page_when_filters_change() {
        let mut query = ViewQuery::default();

        query.set_page(3);
        query.set_search("x");
        assert_eq!(query.page(), 1);

        query.set_page(3);
        query.set_category(CategoryFilter::from("clothing"));
        assert_eq!(query.page(), 1);

        query.set_page(3);
        query.set_favorites_only(true);
        assert_eq!(query.page(), 1);
    }

    #[test]
    fn should_list_all_sentinel_first_then_distinct_categories() {
        let items = vec![
            product(1, "A", "electronics", false),
            product(2, "B", "clothing", false),
            product(3, "C", "electronics", false),
        ];

        assert_eq!(categories(&items), vec!["all", "electronics", "clothing"]);
        assert_eq!(categories(&[]), vec!["all"]);
    }

    proptest! {
        #[test]
        fn pages_cover_every_filtered_item_once(count in 0usize..40, page_size in 1usize..8) {
            let items: Vec<Product> = (0..count)
                .map(|i| product(i, "Item", "misc", false))
                .collect();
            let mut query = ViewQuery::default();
            let first = derive_page(&items, &query, page_size);
            prop_assert_eq!(first.total_pages, count.div_ceil(page_size));

            let mut seen = Vec::new();
            for page in 1..=first.total_pages {
                query.set_page(page);
                let current = derive_page(&items, &query, page_size);
                prop_assert!(!current.items.is_empty());
                prop_assert!(current.items.len() <= page_size);
                seen.extend(current.items);
            }
            prop_assert_eq!(seen, items);
        }
    }
}
