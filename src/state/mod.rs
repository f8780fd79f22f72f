//! State management for a scraping run
//!
//! This module holds the data produced while walking a site:
//! - `ProductRecord`: one extracted product
//! - `StopReason`: why the pagination of a category ended
//! - `CrawlSession`: the collector every walker reports into

mod pagination;
mod record;
mod session;

pub use pagination::StopReason;
pub use record::ProductRecord;
pub use session::{CategoryCrawl, CategorySummary, CrawlSession, HomepageStatus, ProductFailure};
