//! # store-core
//!
//! Core types for the sports-store catalog and shopping cart.
//!
//! This crate provides:
//! - `Product`, `Price` and the `ProductRepository` trait for the catalog
//! - `Cart` and `CartLine` for the session shopping cart
//! - `list_products` and `category_menu` for paginated, filtered browsing
//! - `Storefront` to serve those queries over a shared repository
//! - `StoreConfig` / `ListingConfig` for TOML configuration
//! - `StoreError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use store_core::{Cart, ListingConfig, Price, Product, ProductCatalog, Storefront};
//! use std::sync::Arc;
//!
//! let catalog = ProductCatalog::new()
//!     .with_product(Product::new(1, "Kayak", Price::new(275.0)).with_category("Watersports"));
//!
//! let store = Storefront::new(Arc::new(catalog), ListingConfig::default());
//! let page = store.list(Some("Watersports"), 1)?;
//!
//! let mut cart = Cart::new();
//! cart.add_item(store.product(1)?, 2);
//! assert_eq!(cart.compute_total_value().display(), "$550.00");
//! ```

pub mod cart;
pub mod config;
pub mod error;
pub mod listing;
pub mod product;
pub mod storefront;

// Re-exports for convenience
pub use cart::{Cart, CartLine};
pub use config::{ListingConfig, StoreConfig, DEFAULT_PAGE_SIZE};
pub use error::{StoreError, StoreResult};
pub use listing::{
    category_menu, list_products, NavigationMenu, PageLink, PagingInfo, ProductsListViewModel,
};
pub use product::{
    BoxedProductRepository, Price, Product, ProductCatalog, ProductId, ProductRepository,
};
pub use storefront::Storefront;
