//! # Commands
//!
//! Each command runs a storefront query and returns the view model as JSON.

use crate::state::AppState;
use serde::Serialize;
use store_core::{Cart, CartLine, ProductId};
use tracing::{info, instrument};

/// Cart view printed by the `cart` command
#[derive(Debug, Serialize)]
pub struct CartSummary<'a> {
    pub lines: &'a [CartLine],
    pub item_count: i64,
    pub total: i64,
    pub total_display: String,
}

impl<'a> CartSummary<'a> {
    pub fn from_cart(cart: &'a Cart) -> Self {
        let total = cart.compute_total_value();
        Self {
            lines: cart.lines(),
            item_count: cart.item_count(),
            total: total.amount,
            total_display: total.display(),
        }
    }
}

/// Parse a `ID[:QTY]` cart argument (quantity defaults to 1)
pub fn parse_cart_item(raw: &str) -> Result<(ProductId, i32), String> {
    let (id, quantity) = match raw.split_once(':') {
        Some((id, quantity)) => (id, quantity),
        None => (raw, "1"),
    };
    let id = id
        .parse::<ProductId>()
        .map_err(|e| format!("invalid product id {:?}: {}", id, e))?;
    let quantity = quantity
        .parse::<i32>()
        .map_err(|e| format!("invalid quantity {:?}: {}", quantity, e))?;
    Ok((id, quantity))
}

/// One page of the product listing
#[instrument(skip(state))]
pub fn list(state: &AppState, category: Option<&str>, page: usize) -> anyhow::Result<String> {
    // An empty category from the command line means "all categories"
    let category = category.filter(|c| !c.is_empty());
    let model = state.storefront.list(category, page)?;
    info!(
        "Page {}/{}: {} products",
        model.paging.current_page,
        model.paging.total_pages,
        model.products.len()
    );
    Ok(serde_json::to_string_pretty(&model)?)
}

/// Category navigation menu
#[instrument(skip(state))]
pub fn categories(state: &AppState, selected: Option<&str>) -> anyhow::Result<String> {
    let menu = state.storefront.menu(selected);
    Ok(serde_json::to_string_pretty(&menu)?)
}

/// Single product by ID
#[instrument(skip(state))]
pub fn product(state: &AppState, id: ProductId) -> anyhow::Result<String> {
    let product = state.storefront.product(id)?;
    Ok(serde_json::to_string_pretty(&product)?)
}

/// Build a cart from `items`, drop the `remove` lines, and print it
#[instrument(skip(state))]
pub fn cart(
    state: &AppState,
    items: &[(ProductId, i32)],
    remove: &[ProductId],
) -> anyhow::Result<String> {
    let mut cart = Cart::new();
    for &(id, quantity) in items {
        cart.add_item(state.storefront.product(id)?, quantity);
    }
    for &id in remove {
        let product = state.storefront.product(id)?;
        cart.remove_line(&product);
    }

    let summary = CartSummary::from_cart(&cart);
    info!(
        "Cart: {} lines, total={}",
        cart.len(),
        summary.total_display
    );
    Ok(serde_json::to_string_pretty(&summary)?)
}
