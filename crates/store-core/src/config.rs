//! # Store Configuration
//!
//! Listing settings and the product catalog, read from a single TOML document:
//!
//! ```toml
//! [listing]
//! page_size = 4
//!
//! [[products]]
//! id = 1
//! name = "Kayak"
//! category = "Watersports"
//! price = 27500
//! ```

use crate::error::{StoreError, StoreResult};
use crate::product::{Product, ProductCatalog};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Page size used when none is configured
pub const DEFAULT_PAGE_SIZE: usize = 4;

/// Product listing settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawListingConfig")]
pub struct ListingConfig {
    page_size: usize,
}

#[derive(Deserialize)]
struct RawListingConfig {
    #[serde(default = "default_page_size")]
    page_size: i64,
}

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE as i64
}

impl ListingConfig {
    /// Create a listing config, rejecting non-positive page sizes
    pub fn new(page_size: i64) -> StoreResult<Self> {
        match usize::try_from(page_size) {
            Ok(size) if size > 0 => Ok(Self { page_size: size }),
            _ => Err(StoreError::InvalidArgument(format!(
                "page size must be positive, got {}",
                page_size
            ))),
        }
    }

    /// Products shown per page
    pub fn page_size(&self) -> usize {
        self.page_size
    }
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl TryFrom<RawListingConfig> for ListingConfig {
    type Error = StoreError;

    fn try_from(raw: RawListingConfig) -> StoreResult<Self> {
        ListingConfig::new(raw.page_size)
    }
}

/// Whole store configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub listing: ListingConfig,

    #[serde(default)]
    pub products: Vec<Arc<Product>>,
}

impl StoreConfig {
    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> StoreResult<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Product catalog described by this config
    pub fn catalog(&self) -> ProductCatalog {
        ProductCatalog {
            products: self.products.clone(),
        }
    }
}
