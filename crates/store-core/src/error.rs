//! # Store Error Types
//!
//! Typed error handling for the sports-store core.
//! Fallible catalog operations return `Result<T, StoreError>`.

use thiserror::Error;

/// Core error type for catalog and configuration operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// Caller supplied an argument outside the operation's domain
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Product not found in catalog
    #[error("Product not found: {product_id}")]
    ProductNotFound { product_id: u32 },

    /// Configuration errors (bad page size, unreadable store file)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl StoreError {
    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self {
            StoreError::InvalidArgument(_) => 400,
            StoreError::ProductNotFound { .. } => 404,
            StoreError::Configuration(_) => 500,
            StoreError::Serialization(_) => 500,
        }
    }
}

impl From<toml::de::Error> for StoreError {
    fn from(err: toml::de::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;
