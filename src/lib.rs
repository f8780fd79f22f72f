//! Collection-Scraper: a storefront catalog harvester
//!
//! This crate walks an e-commerce site's category ("collections") listings,
//! extracts product metadata from each product page, downloads the product
//! images and writes a CSV report of everything it found.

pub mod config;
pub mod crawler;
pub mod output;
pub mod state;
pub mod storage;
pub mod url;

use thiserror::Error;

/// Main error type for Collection-Scraper operations
#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP status {status_code} for {url}")]
    HttpStatus { url: String, status_code: u16 },

    #[error("Network error for {url}: {error}")]
    Network { url: String, error: String },

    #[error("URL error: {0}")]
    UrlError(#[from] UrlError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Product entry has no link")]
    MissingProductLink,

    #[error("Cannot derive a SKU from {url}")]
    EmptySku { url: String },

    #[error("Cannot derive a file name from image URL {url}")]
    EmptyFileName { url: String },

    #[error("Storage error: {0}")]
    Storage(#[from] storage::StorageError),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Invalid selector: {0}")]
    InvalidSelector(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Cannot join '{href}' onto '{base}': {reason}")]
    Join {
        base: String,
        href: String,
        reason: String,
    },
}

/// Result type alias for Collection-Scraper operations
pub type Result<T> = std::result::Result<T, ScraperError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::Config;
pub use state::{CrawlSession, ProductRecord, StopReason};
pub use url::{derive_sku, last_path_segment, JoinStrategy};
