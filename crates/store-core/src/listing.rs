//! # Catalog Listing
//!
//! Category filtering, pagination, and the category navigation menu.
//!
//! Both queries are pure functions of the product set they are handed, so
//! they can run concurrently over shared data without locking.
//!
//! ```text
//!  products ──► filter(category) ──► sort(id) ──► skip/take(page) ──► view model
//!                      │
//!                      └──► total_items (filtered count) ──► PagingInfo
//! ```

use crate::error::{StoreError, StoreResult};
use crate::product::Product;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Paging metadata for one page of a filtered listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagingInfo {
    /// 1-based page number
    pub current_page: usize,
    pub items_per_page: usize,
    /// Size of the filtered set, not the whole catalog
    pub total_items: usize,
    pub total_pages: usize,
}

impl PagingInfo {
    pub fn new(current_page: usize, items_per_page: usize, total_items: usize) -> Self {
        let total_pages = if items_per_page == 0 {
            0
        } else {
            total_items.div_ceil(items_per_page)
        };
        Self {
            current_page,
            items_per_page,
            total_items,
            total_pages,
        }
    }

    /// One link per page, with the current page marked
    pub fn page_links(&self) -> Vec<PageLink> {
        (1..=self.total_pages)
            .map(|page| PageLink {
                page,
                is_current: page == self.current_page,
            })
            .collect()
    }
}

/// A numbered page link for pagination controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLink {
    pub page: usize,
    pub is_current: bool,
}

/// One page of products plus its paging metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductsListViewModel {
    pub products: Vec<Arc<Product>>,
    pub paging: PagingInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_category: Option<String>,
}

/// Category names for the navigation surface
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationMenu {
    /// Distinct categories, sorted
    pub categories: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_category: Option<String>,
}

/// Compute one page of the listing.
///
/// Products matching `category` exactly (all products when `None`) are
/// ordered by ID, then `page` (1-based) of size `page_size` is taken.
/// Pages past the end are empty rather than an error.
///
/// # Errors
/// `InvalidArgument` if `page` or `page_size` is zero.
pub fn list_products(
    products: &[Arc<Product>],
    category: Option<&str>,
    page: usize,
    page_size: usize,
) -> StoreResult<ProductsListViewModel> {
    if page_size == 0 {
        return Err(StoreError::InvalidArgument(
            "page size must be positive".to_string(),
        ));
    }
    if page == 0 {
        return Err(StoreError::InvalidArgument(
            "page numbers start at 1".to_string(),
        ));
    }

    let mut filtered: Vec<Arc<Product>> = products
        .iter()
        .filter(|p| category.map_or(true, |c| p.category == c))
        .cloned()
        .collect();
    filtered.sort_by_key(|p| p.id);

    let total_items = filtered.len();
    let skip = (page - 1).saturating_mul(page_size);
    let page_products: Vec<Arc<Product>> =
        filtered.into_iter().skip(skip).take(page_size).collect();

    debug!(
        category = category.unwrap_or("*"),
        page,
        page_size,
        total_items,
        returned = page_products.len(),
        "Listed products"
    );

    Ok(ProductsListViewModel {
        products: page_products,
        paging: PagingInfo::new(page, page_size, total_items),
        current_category: category.map(str::to_string),
    })
}

/// Build the navigation menu: distinct categories in alphabetical order.
///
/// Ordering ignores case, with ties broken by the exact string, so `"a"`
/// sorts next to `"A"`. Uncategorized products (empty tag) are left out.
pub fn category_menu(products: &[Arc<Product>], selected: Option<&str>) -> NavigationMenu {
    let mut categories: Vec<&str> = products
        .iter()
        .map(|p| p.category.as_str())
        .filter(|c| !c.is_empty())
        .collect();
    categories.sort_by_cached_key(|c| (c.to_lowercase(), *c));
    categories.dedup();

    NavigationMenu {
        categories: categories.into_iter().map(str::to_string).collect(),
        selected_category: selected.map(str::to_string),
    }
}
