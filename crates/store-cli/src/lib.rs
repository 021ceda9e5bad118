//! # store-cli
//!
//! Command-line storefront browser for sports-store-rs.
//!
//! | Command | Description |
//! |---------|-------------|
//! | `list [--category C] [--page N]` | One page of products with paging info |
//! | `categories [--selected C]` | Category navigation menu |
//! | `product <ID>` | Single product |
//! | `cart <ID[:QTY]>... [--remove ID]` | Build a cart and print its lines and total |

pub mod commands;
pub mod state;

pub use state::{AppConfig, AppState};
