//! # Product Types
//!
//! Product catalog types for sports-store.
//! Products are loaded from the `[[products]]` tables of `config/store.toml`.

use crate::error::{StoreError, StoreResult};
use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::Add;
use std::sync::Arc;

/// Unique product identifier
pub type ProductId = u32;

/// Price with amount in the smallest currency unit (cents).
///
/// Arithmetic saturates at the `i64` bounds. Deserialized prices must be
/// non-negative; negative values only arise from cart arithmetic.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "i64", into = "i64")]
pub struct Price {
    /// Amount in cents
    pub amount: i64,
}

impl Price {
    pub const ZERO: Price = Price { amount: 0 };

    /// Create a new price from decimal amount.
    ///
    /// `amount` must be finite; out-of-range values clamp to the `i64`
    /// bounds and NaN becomes zero.
    pub fn new(amount: f64) -> Self {
        debug_assert!(amount.is_finite(), "price amount must be finite");
        Self {
            amount: (amount * 100.0).round() as i64,
        }
    }

    /// Create a price from smallest unit (cents)
    pub fn from_cents(amount: i64) -> Self {
        Self { amount }
    }

    /// Get the decimal amount
    pub fn as_decimal(&self) -> f64 {
        self.amount as f64 / 100.0
    }

    /// Price of `quantity` units at this unit price
    pub fn times(&self, quantity: i32) -> Price {
        Price {
            amount: self.amount.saturating_mul(i64::from(quantity)),
        }
    }

    /// Format for display (e.g., "$10.00")
    pub fn display(&self) -> String {
        let sign = if self.amount < 0 { "-" } else { "" };
        let cents = self.amount.unsigned_abs();
        format!("{}${}.{:02}", sign, cents / 100, cents % 100)
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price {
            amount: self.amount.saturating_add(rhs.amount),
        }
    }
}

impl TryFrom<i64> for Price {
    type Error = StoreError;

    fn try_from(amount: i64) -> StoreResult<Self> {
        if amount < 0 {
            return Err(StoreError::InvalidArgument(format!(
                "price must not be negative, got {} cents",
                amount
            )));
        }
        Ok(Price { amount })
    }
}

impl From<Price> for i64 {
    fn from(price: Price) -> i64 {
        price.amount
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::ZERO, Add::add)
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display())
    }
}

/// A product in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier, immutable once assigned
    pub id: ProductId,

    /// Display name
    pub name: String,

    /// Short description
    #[serde(default)]
    pub description: String,

    /// Category tag (e.g., "Watersports"), compared verbatim
    #[serde(default)]
    pub category: String,

    /// Unit price
    pub price: Price,
}

impl Product {
    /// Create a new product with no description or category
    pub fn new(id: ProductId, name: impl Into<String>, price: Price) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            category: String::new(),
            price,
        }
    }

    /// Builder: set description
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    /// Builder: set category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }
}

/// Read-only source of products.
///
/// The catalog query and the storefront only ever need the full product
/// set; storage, ordering, and caching are up to the implementation.
pub trait ProductRepository: Send + Sync {
    /// Every product in the store, in no particular order.
    fn products(&self) -> Vec<Arc<Product>>;

    /// Find a product by ID.
    fn find(&self, id: ProductId) -> Option<Arc<Product>> {
        self.products().into_iter().find(|p| p.id == id)
    }
}

/// Type alias for a shared product repository (dynamic dispatch)
pub type BoxedProductRepository = Arc<dyn ProductRepository>;

/// In-memory product catalog (loaded from config)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductCatalog {
    #[serde(default)]
    pub products: Vec<Arc<Product>>,
}

impl ProductCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
        }
    }

    /// Add a product to the catalog
    pub fn add(&mut self, product: Product) {
        self.products.push(Arc::new(product));
    }

    /// Add a product with builder pattern
    pub fn with_product(mut self, product: Product) -> Self {
        self.add(product);
        self
    }

    /// Find a product by ID
    pub fn get(&self, id: ProductId) -> Option<&Arc<Product>> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Get number of products
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if catalog is empty
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Load catalog from TOML string
    pub fn from_toml(toml_str: &str) -> StoreResult<Self> {
        Ok(toml::from_str(toml_str)?)
    }
}

impl FromIterator<Product> for ProductCatalog {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        Self {
            products: iter.into_iter().map(Arc::new).collect(),
        }
    }
}

impl ProductRepository for ProductCatalog {
    fn products(&self) -> Vec<Arc<Product>> {
        self.products.clone()
    }

    fn find(&self, id: ProductId) -> Option<Arc<Product>> {
        self.get(id).cloned()
    }
}
