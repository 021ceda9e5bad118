//! # Storefront
//!
//! Binds a product repository to the listing settings and answers the
//! browse queries a presentation layer asks for: one page of products,
//! the category menu, and single-product lookup.

use crate::config::ListingConfig;
use crate::error::{StoreError, StoreResult};
use crate::listing::{self, NavigationMenu, ProductsListViewModel};
use crate::product::{BoxedProductRepository, Product, ProductId};
use std::sync::Arc;

/// Product browsing over a shared repository
#[derive(Clone)]
pub struct Storefront {
    repository: BoxedProductRepository,
    config: ListingConfig,
}

impl Storefront {
    /// Create a storefront over `repository`
    pub fn new(repository: BoxedProductRepository, config: ListingConfig) -> Self {
        Self { repository, config }
    }

    /// Listing settings in effect
    pub fn config(&self) -> ListingConfig {
        self.config
    }

    /// One page of the listing, using the configured page size.
    ///
    /// Pass page `1` when the category changes so paging restarts against
    /// the newly filtered set.
    pub fn list(&self, category: Option<&str>, page: usize) -> StoreResult<ProductsListViewModel> {
        listing::list_products(
            &self.repository.products(),
            category,
            page,
            self.config.page_size(),
        )
    }

    /// Category navigation menu with `selected` highlighted
    pub fn menu(&self, selected: Option<&str>) -> NavigationMenu {
        listing::category_menu(&self.repository.products(), selected)
    }

    /// Look up one product
    pub fn product(&self, id: ProductId) -> StoreResult<Arc<Product>> {
        self.repository
            .find(id)
            .ok_or(StoreError::ProductNotFound { product_id: id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::{Price, ProductCatalog, ProductRepository};

    fn storefront(page_size: i64) -> Storefront {
        let catalog: ProductCatalog = [
            (1, "Apples"),
            (2, "Plums"),
            (3, "Plums"),
            (4, "Apples"),
            (5, "Oranges"),
        ]
        .into_iter()
        .map(|(id, category)| {
            Product::new(id, format!("P{}", id), Price::new(1.0)).with_category(category)
        })
        .collect();

        Storefront::new(Arc::new(catalog), ListingConfig::new(page_size).unwrap())
    }

    /// Repository that hands products back in reverse ID order
    struct ReversedRepository(Vec<Arc<Product>>);

    impl ProductRepository for ReversedRepository {
        fn products(&self) -> Vec<Arc<Product>> {
            self.0.iter().rev().cloned().collect()
        }
    }

    #[test]
    fn test_list_uses_configured_page_size() {
        let store = storefront(3);

        let model = store.list(None, 2).unwrap();

        assert_eq!(model.paging.items_per_page, 3);
        let ids: Vec<_> = model.products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![4, 5]);
    }

    #[test]
    fn test_category_then_first_page() {
        let store = storefront(3);
        store.list(None, 2).unwrap();

        let model = store.list(Some("Apples"), 1).unwrap();

        assert_eq!(model.paging.current_page, 1);
        assert_eq!(model.paging.total_items, 2);
        assert_eq!(model.paging.total_pages, 1);
    }

    #[test]
    fn test_menu() {
        let menu = storefront(3).menu(Some("Plums"));

        assert_eq!(menu.categories, vec!["Apples", "Oranges", "Plums"]);
        assert_eq!(menu.selected_category.as_deref(), Some("Plums"));
    }

    #[test]
    fn test_product_lookup() {
        let store = storefront(3);

        assert_eq!(store.product(3).unwrap().name, "P3");
        assert!(matches!(
            store.product(42),
            Err(StoreError::ProductNotFound { product_id: 42 })
        ));
    }

    #[test]
    fn test_custom_repository() {
        let products = (1..=5)
            .map(|id| Arc::new(Product::new(id, format!("P{}", id), Price::ZERO)))
            .collect();
        let store = Storefront::new(
            Arc::new(ReversedRepository(products)),
            ListingConfig::default(),
        );

        let ids: Vec<_> = store.list(None, 1).unwrap().products.iter().map(|p| p.id).collect();

        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(store.product(5).unwrap().id, 5);
    }
}
