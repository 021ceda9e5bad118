//! # Sports Store
//!
//! Browse the product catalog from the command line.
//!
//! ## Usage
//!
//! ```bash
//! # Optional overrides
//! export STORE_CONFIG=config/store.toml
//! export PAGE_SIZE=3
//!
//! sports-store list --category Watersports
//! sports-store categories --selected Soccer
//! sports-store cart 1:2 3
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use store_cli::{commands, AppConfig, AppState};
use store_core::ProductId;
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Sports Store - browse the catalog and price a cart
#[derive(Parser)]
#[command(name = "sports-store")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Store config file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Products per page (overrides config and PAGE_SIZE)
    #[arg(long, global = true, allow_negative_numbers = true)]
    page_size: Option<i64>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List one page of products
    List {
        /// Only show this category
        #[arg(short, long)]
        category: Option<String>,

        /// Page number, starting at 1
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },

    /// Show the category navigation menu
    Categories {
        /// Category to mark as selected
        #[arg(short, long)]
        selected: Option<String>,
    },

    /// Show a single product
    Product {
        /// Product ID
        id: ProductId,
    },

    /// Build a cart and print its lines and total
    Cart {
        /// Items as ID or ID:QTY
        #[arg(value_parser = commands::parse_cart_item)]
        items: Vec<(ProductId, i32)>,

        /// Product IDs whose lines are removed afterwards
        #[arg(short, long)]
        remove: Vec<ProductId>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging (stderr, so stdout stays pipeable JSON)
    let filter = EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy();
    tracing_subscriber::registry()
        .with(filter)
        .with(
            cli.json_logs
                .then(|| fmt::layer().json().with_writer(std::io::stderr)),
        )
        .with(
            (!cli.json_logs).then(|| fmt::layer().with_writer(std::io::stderr)),
        )
        .init();

    let config = AppConfig::from_env()?.with_overrides(cli.config, cli.page_size);
    let state = AppState::new(&config)?;

    info!(
        "Catalog: {} products, page size {}",
        state.catalog.len(),
        state.storefront.config().page_size()
    );

    let output = match cli.command {
        Commands::List { category, page } => commands::list(&state, category.as_deref(), page)?,
        Commands::Categories { selected } => commands::categories(&state, selected.as_deref())?,
        Commands::Product { id } => commands::product(&state, id)?,
        Commands::Cart { items, remove } => commands::cart(&state, &items, &remove)?,
    };

    println!("{}", output);
    Ok(())
}
