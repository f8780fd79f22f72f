//! Storage module for scraped artifacts
//!
//! This module handles everything the crawler writes besides the report:
//! - Per-SKU image directories and downloaded images
//! - Raw HTML dumps of fetched pages for debugging selectors

mod files;
mod traits;

pub use files::FsArtifactStore;
pub use traits::{ArtifactStore, StorageError, StorageResult};

use crate::config::OutputConfig;

/// Opens the filesystem store described by the output configuration
pub fn open_storage(config: &OutputConfig) -> FsArtifactStore {
    FsArtifactStore::from_config(config)
}
