//! Storage traits and error types
//!
//! This module defines the trait interface for artifact stores and
//! associated error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid file name: {0:?}")]
    InvalidName(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Trait for places where scraped artifacts end up
///
/// The crawler writes two kinds of artifacts: downloaded product images,
/// grouped by SKU, and raw HTML dumps of the pages it fetched.
pub trait ArtifactStore {
    /// Makes sure the images root exists
    fn prepare(&self) -> StorageResult<()>;

    /// Creates the image directory for one SKU and returns its path
    ///
    /// # Arguments
    ///
    /// * `sku` - The product SKU, used verbatim as the directory name
    fn ensure_product_dir(&self, sku: &str) -> StorageResult<PathBuf>;

    /// Writes one downloaded image into the SKU's directory
    ///
    /// # Arguments
    ///
    /// * `sku` - The product SKU
    /// * `file_name` - Base name of the image
    /// * `bytes` - Image content
    ///
    /// # Returns
    ///
    /// The path the image was written to
    fn save_image(&self, sku: &str, file_name: &str, bytes: &[u8]) -> StorageResult<PathBuf>;

    /// Writes the raw HTML of a fetched page
    ///
    /// Returns `Ok(None)` when dumps are disabled.
    fn save_page_dump(&self, name: &str, html: &str) -> StorageResult<Option<PathBuf>>;
}
