//! # Shopping Cart
//!
//! Session-scoped cart aggregate. Holds at most one line per product ID,
//! in the order each product was first added.
//!
//! The cart is not internally synchronized. The owning session layer must
//! serialize access if one cart is reachable from concurrent requests.

use crate::product::{Price, Product};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// A line item in a cart
#[derive(Debug, Clone, Serialize)]
pub struct CartLine {
    /// Product shared with the catalog
    pub product: Arc<Product>,

    /// Quantity (not validated, may drop to zero or below; saturates at the `i32` bounds)
    pub quantity: i32,
}

impl CartLine {
    /// Calculate the total price for this line
    pub fn line_total(&self) -> Price {
        self.product.price.times(self.quantity)
    }
}

/// Shopping cart
#[derive(Debug, Clone, Default, Serialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add `quantity` of `product`, merging into an existing line for the
    /// same product ID.
    pub fn add_item(&mut self, product: Arc<Product>, quantity: i32) {
        match self.lines.iter_mut().find(|l| l.product.id == product.id) {
            Some(line) => {
                line.quantity = line.quantity.saturating_add(quantity);
                debug!(
                    product_id = product.id,
                    quantity = line.quantity,
                    "Updated cart line"
                );
            }
            None => {
                debug!(product_id = product.id, quantity, "Added cart line");
                self.lines.push(CartLine { product, quantity });
            }
        }
    }

    /// Remove the line for this product, if any
    pub fn remove_line(&mut self, product: &Product) {
        let before = self.lines.len();
        self.lines.retain(|l| l.product.id != product.id);
        if self.lines.len() != before {
            debug!(product_id = product.id, "Removed cart line");
        }
    }

    /// Calculate cart total
    pub fn compute_total_value(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Remove every line
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Current lines, in first-add order
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Check if cart is empty
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Sum of quantities across lines
    pub fn item_count(&self) -> i64 {
        self.lines.iter().map(|l| i64::from(l.quantity)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u32, name: &str, price: f64) -> Arc<Product> {
        Arc::new(Product::new(id, name, Price::new(price)))
    }

    #[test]
    fn test_add_new_lines() {
        let p1 = product(1, "P1", 100.0);
        let p2 = product(2, "P2", 50.0);

        let mut cart = Cart::new();
        cart.add_item(p1.clone(), 1);
        cart.add_item(p2.clone(), 1);

        let lines = cart.lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].product.id, 1);
        assert_eq!(lines[1].product.id, 2);
    }

    #[test]
    fn test_add_quantity_for_existing_lines() {
        let p1 = product(1, "P1", 100.0);
        let p2 = product(2, "P2", 50.0);

        let mut cart = Cart::new();
        cart.add_item(p1.clone(), 1);
        cart.add_item(p2.clone(), 1);
        cart.add_item(p1.clone(), 10);

        let lines = cart.lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].quantity, 11);
        assert_eq!(lines[1].quantity, 1);
        assert_eq!(cart.item_count(), 12);
    }

    #[test]
    fn test_lines_merge_by_product_id() {
        // A distinct Arc with the same ID still lands on the same line
        let mut cart = Cart::new();
        cart.add_item(product(7, "Original", 10.0), 2);
        cart.add_item(product(7, "Reloaded", 10.0), 3);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].quantity, 5);
        assert_eq!(cart.lines()[0].product.name, "Original");
    }

    #[test]
    fn test_negative_quantity_is_not_validated() {
        let p1 = product(1, "P1", 10.0);
        let mut cart = Cart::new();
        cart.add_item(p1.clone(), 1);
        cart.add_item(p1.clone(), -3);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].quantity, -2);
        assert_eq!(cart.compute_total_value(), Price::new(-20.0));
    }

    #[test]
    fn test_quantity_saturates_at_bounds() {
        let p1 = product(1, "P1", 1.0);
        let mut cart = Cart::new();
        cart.add_item(p1.clone(), i32::MAX);
        cart.add_item(p1.clone(), 1);
        assert_eq!(cart.lines()[0].quantity, i32::MAX);

        cart.add_item(p1.clone(), i32::MIN);
        cart.add_item(p1.clone(), i32::MIN);
        assert_eq!(cart.lines()[0].quantity, i32::MIN);
    }

    #[test]
    fn test_total_saturates_at_bounds() {
        let expensive = Arc::new(Product::new(
            1,
            "Expensive",
            Price::from_cents(i64::MAX / 2),
        ));
        let mut cart = Cart::new();
        cart.add_item(expensive.clone(), 3);
        assert_eq!(cart.compute_total_value(), Price::from_cents(i64::MAX));

        cart.add_item(product(2, "P2", 10.0), 1);
        assert_eq!(cart.compute_total_value(), Price::from_cents(i64::MAX));
    }

    #[test]
    fn test_remove_line() {
        let p1 = product(1, "P1", 100.0);
        let p2 = product(2, "P2", 50.0);
        let p3 = product(3, "P3", 25.0);

        let mut cart = Cart::new();
        cart.add_item(p1.clone(), 1);
        cart.add_item(p2.clone(), 3);
        cart.add_item(p3.clone(), 5);
        cart.add_item(p2.clone(), 1);

        cart.remove_line(&p2);

        assert!(cart.lines().iter().all(|l| l.product.id != 2));
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.lines()[0].product.id, 1);
        assert_eq!(cart.lines()[1].product.id, 3);
    }

    #[test]
    fn test_remove_absent_line_is_noop() {
        let p1 = product(1, "P1", 100.0);
        let mut cart = Cart::new();
        cart.add_item(p1.clone(), 2);

        cart.remove_line(&Product::new(99, "Ghost", Price::ZERO));

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.compute_total_value(), Price::new(200.0));
    }

    #[test]
    fn test_compute_total_value() {
        let p1 = product(1, "P1", 100.0);
        let p2 = product(2, "P2", 50.0);

        let mut cart = Cart::new();
        cart.add_item(p1.clone(), 1);
        cart.add_item(p2.clone(), 1);
        cart.add_item(p1.clone(), 3);

        assert_eq!(cart.compute_total_value(), Price::new(450.0));
        assert_eq!(cart.lines()[0].line_total(), Price::new(400.0));
    }

    #[test]
    fn test_empty_cart_total_is_zero() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.compute_total_value(), Price::ZERO);
    }

    #[test]
    fn test_clear() {
        let p1 = product(1, "P1", 100.0);
        let p2 = product(2, "P2", 50.0);

        let mut cart = Cart::new();
        cart.add_item(p1, 1);
        cart.add_item(p2, 1);
        cart.clear();

        assert!(cart.lines().is_empty());
        assert_eq!(cart.compute_total_value(), Price::ZERO);
        assert_eq!(cart.item_count(), 0);
    }
}
