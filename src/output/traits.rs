//! Output types
//!
//! This module defines the output error type and the `CrawlSummary` that
//! the markdown and console renderers share.

use crate::state::{CategorySummary, CrawlSession, HomepageStatus, ProductFailure};
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write CSV report: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Summary statistics for a run
#[derive(Debug, Clone, Default)]
pub struct CrawlSummary {
    // Run metadata
    pub root_url: String,
    pub started_at: String,
    pub finished_at: Option<String>,
    pub duration_seconds: Option<u64>,
    pub homepage: String,
    pub config_hash: Option<String>,

    // Overall statistics
    pub total_categories: usize,
    pub total_pages: u64,
    pub total_products: usize,
    pub total_failures: usize,
    pub aborted_categories: usize,

    // Breakdown
    pub categories: Vec<CategorySummary>,
    pub failures: Vec<ProductFailure>,
}

impl CrawlSummary {
    /// Builds a summary from a session
    pub fn from_session(session: &CrawlSession, config_hash: Option<&str>) -> Self {
        let homepage = match &session.homepage {
            HomepageStatus::Pending => "not fetched".to_string(),
            HomepageStatus::Reached { categories } => {
                format!("reached ({} categories)", categories)
            }
            HomepageStatus::Failed { reason } => format!("failed ({})", reason),
        };

        Self {
            root_url: session.root_url.clone(),
            started_at: session.started_at.to_rfc3339(),
            finished_at: session.finished_at.map(|t| t.to_rfc3339()),
            duration_seconds: session.duration_seconds(),
            homepage,
            config_hash: config_hash.map(str::to_string),
            total_categories: session.categories.len(),
            total_pages: session.pages_fetched(),
            total_products: session.records.len(),
            total_failures: session.failures.len(),
            aborted_categories: session.aborted_categories(),
            categories: session.categories.clone(),
            failures: session.failures.clone(),
        }
    }

    /// Share of attempted products that made it into the report, as a percentage
    pub fn success_rate(&self) -> f64 {
        let attempted = self.total_products + self.total_failures;
        if attempted == 0 {
            return 0.0;
        }
        (self.total_products as f64 / attempted as f64) * 100.0
    }
}
