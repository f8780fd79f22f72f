//! Crawler module for storefront walking
//!
//! This module contains the core scraping logic, including:
//! - HTTP fetching of pages and images
//! - HTML parsing of homepage and listing pages
//! - Product page extraction
//! - Category pagination and per-product isolation
//! - Overall site coordination

mod category;
mod coordinator;
mod extractor;
mod fetcher;
mod parser;

pub use coordinator::{discover_categories, run_scrape, Coordinator, HOMEPAGE_DUMP};
pub use extractor::{extract_product, ProductDetail, DEFAULT_NAME, DEFAULT_PRICE};
pub use fetcher::{build_http_client, fetch_bytes, fetch_url, FetchResult};
pub use parser::{extract_category_links, parse_listing, ListingEntry, Selectors};

use crate::config::Config;
use crate::state::CrawlSession;
use crate::ScraperError;

/// Runs a complete scrape
///
/// This is the main entry point for a run. It will:
/// 1. Build the HTTP client and compile selectors
/// 2. Fetch the homepage and discover categories
/// 3. Walk every category and its products
/// 4. Write the report
///
/// # Arguments
///
/// * `config` - The scraper configuration
///
/// # Returns
///
/// * `Ok(CrawlSession)` - The run finished; individual pages or products may still have failed
/// * `Err(ScraperError)` - The run could not produce its outputs
pub async fn scrape(config: Config) -> Result<CrawlSession, ScraperError> {
    run_scrape(config, None).await
}
