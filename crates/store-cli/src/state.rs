//! # Application State
//!
//! Resolves configuration (store file, `.env`, flags) and builds the
//! storefront the commands run against.

use anyhow::Context;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use store_core::{ListingConfig, ProductCatalog, StoreConfig, Storefront};

/// Store file locations tried when no path is given
const CONFIG_PATHS: [&str; 3] = [
    "config/store.toml",
    "../config/store.toml",
    "../../config/store.toml",
];

/// Application configuration
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Explicit store file (`--config` or `STORE_CONFIG`)
    pub config_path: Option<PathBuf>,
    /// Page size override (`--page-size` or `PAGE_SIZE`)
    pub page_size: Option<i64>,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            config_path: std::env::var_os("STORE_CONFIG").map(PathBuf::from),
            page_size: parse_page_size(std::env::var("PAGE_SIZE").ok().as_deref())?,
        })
    }

    /// Builder: let command-line values win over the environment
    pub fn with_overrides(mut self, config_path: Option<PathBuf>, page_size: Option<i64>) -> Self {
        if config_path.is_some() {
            self.config_path = config_path;
        }
        if page_size.is_some() {
            self.page_size = page_size;
        }
        self
    }
}

fn parse_page_size(raw: Option<&str>) -> anyhow::Result<Option<i64>> {
    raw.map(|value| {
        value
            .trim()
            .parse::<i64>()
            .with_context(|| format!("PAGE_SIZE is not an integer: {:?}", value))
    })
    .transpose()
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Browsing over the loaded catalog
    pub storefront: Storefront,
    /// Loaded product catalog
    pub catalog: Arc<ProductCatalog>,
    /// Store file the catalog came from, if any
    pub source: Option<PathBuf>,
}

impl AppState {
    /// Load the store file and apply overrides
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let (store_config, source) = load_store_config(config.config_path.as_deref())?;

        let listing = match config.page_size {
            Some(size) => ListingConfig::new(size).context("Invalid page size override")?,
            None => store_config.listing,
        };

        Ok(Self::from_parts(store_config.catalog(), listing, source))
    }

    /// Build state around an already-loaded catalog
    pub fn from_parts(
        catalog: ProductCatalog,
        listing: ListingConfig,
        source: Option<PathBuf>,
    ) -> Self {
        let catalog = Arc::new(catalog);
        Self {
            storefront: Storefront::new(catalog.clone(), listing),
            catalog,
            source,
        }
    }
}

/// Load the store file, searching the default locations when no path is given
fn load_store_config(explicit: Option<&Path>) -> anyhow::Result<(StoreConfig, Option<PathBuf>)> {
    if let Some(path) = explicit {
        let config = read_store_config(path)?;
        return Ok((config, Some(path.to_path_buf())));
    }

    for path in CONFIG_PATHS.iter().map(Path::new) {
        if path.is_file() {
            let config = read_store_config(path)?;
            return Ok((config, Some(path.to_path_buf())));
        }
    }

    // Return empty catalog if no config found
    tracing::warn!("No store config found, using empty catalog");
    Ok((StoreConfig::default(), None))
}

fn read_store_config(path: &Path) -> anyhow::Result<StoreConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config = StoreConfig::from_toml(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    tracing::info!(
        "Loaded {} products from {}",
        config.products.len(),
        path.display()
    );
    Ok(config)
}
