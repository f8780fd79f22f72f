//! URL handling module for Collection-Scraper
//!
//! This module turns the hrefs found on storefront pages into absolute URLs,
//! derives SKUs and category labels from URL paths, and normalizes image
//! sources.

mod join;
mod normalize;
mod segment;

pub use join::{join_category_link, join_product_link, listing_page_url, JoinStrategy};
pub use normalize::normalize_image_url;
pub use segment::{category_label, derive_sku, image_file_name, last_path_segment};
