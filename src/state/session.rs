//! The collector a scraping run reports into
//!
//! Walkers never share mutable state; each category walk produces a
//! `CategoryCrawl` that is folded into the `CrawlSession` owned by the caller.

use crate::state::{ProductRecord, StopReason};
use chrono::{DateTime, Utc};

/// A product that was skipped because something went wrong while processing it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductFailure {
    /// Category label the product was listed under
    pub category: String,

    /// Product URL, or the raw href when no URL could be built
    pub url: String,

    /// Human-readable failure reason
    pub reason: String,
}

/// Result of walking one category
#[derive(Debug, Clone)]
pub struct CategoryCrawl {
    /// Category label (last path segment of the category URL)
    pub label: String,

    /// Absolute category URL
    pub url: String,

    /// Products extracted, in page-encounter order
    pub records: Vec<ProductRecord>,

    /// Products that were skipped
    pub failures: Vec<ProductFailure>,

    /// Number of listing pages that were fetched successfully
    pub pages_fetched: u32,

    /// Why pagination stopped
    pub stop_reason: StopReason,
}

/// Per-category counts kept after the records have been moved into the session
#[derive(Debug, Clone)]
pub struct CategorySummary {
    pub label: String,
    pub url: String,
    pub pages_fetched: u32,
    pub products: usize,
    pub failures: usize,
    pub stop_reason: StopReason,
}

/// Whether the homepage could be walked
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomepageStatus {
    /// Not fetched yet
    Pending,

    /// Fetched; `categories` category links were discovered
    Reached { categories: usize },

    /// The homepage fetch failed; nothing else was crawled
    Failed { reason: String },
}

/// Accumulated results of one scraping run
#[derive(Debug, Clone)]
pub struct CrawlSession {
    pub root_url: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub homepage: HomepageStatus,
    pub records: Vec<ProductRecord>,
    pub failures: Vec<ProductFailure>,
    pub categories: Vec<CategorySummary>,
}

impl CrawlSession {
    /// Starts a new, empty session
    pub fn new(root_url: impl Into<String>) -> Self {
        Self {
            root_url: root_url.into(),
            started_at: Utc::now(),
            finished_at: None,
            homepage: HomepageStatus::Pending,
            records: Vec::new(),
            failures: Vec::new(),
            categories: Vec::new(),
        }
    }

    /// Folds the outcome of one category walk into the session
    ///
    /// Records are appended in the order they were produced, so the session
    /// stays grouped by category and then by page-encounter order.
    pub fn absorb(&mut self, crawl: CategoryCrawl) {
        self.categories.push(CategorySummary {
            label: crawl.label,
            url: crawl.url,
            pages_fetched: crawl.pages_fetched,
            products: crawl.records.len(),
            failures: crawl.failures.len(),
            stop_reason: crawl.stop_reason,
        });
        self.records.extend(crawl.records);
        self.failures.extend(crawl.failures);
    }

    /// Marks the session as finished
    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    /// Returns true if the homepage was fetched
    pub fn reached_homepage(&self) -> bool {
        matches!(self.homepage, HomepageStatus::Reached { .. })
    }

    /// Run duration in whole seconds, once finished
    pub fn duration_seconds(&self) -> Option<u64> {
        self.finished_at
            .map(|finished| (finished - self.started_at).num_seconds().max(0) as u64)
    }

    /// Total number of listing pages fetched across all categories
    pub fn pages_fetched(&self) -> u64 {
        self.categories.iter().map(|c| c.pages_fetched as u64).sum()
    }

    /// Number of categories whose pagination ended on a fetch failure
    pub fn aborted_categories(&self) -> usize {
        self.categories
            .iter()
            .filter(|c| !c.stop_reason.is_normal())
            .count()
    }
}
