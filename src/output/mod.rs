//! Output module for reports and summaries
//!
//! This module handles:
//! - Writing the CSV product report
//! - Generating the optional markdown run summary
//! - Printing run statistics to the console

mod csv_report;
mod markdown;
pub mod stats;
mod traits;

pub use csv_report::{write_report, write_report_to};
pub use markdown::{format_markdown_summary, generate_markdown_summary};
pub use stats::print_statistics;
pub use traits::{CrawlSummary, OutputError, OutputResult};

use crate::config::OutputConfig;
use crate::state::CrawlSession;
use std::path::Path;

/// Writes every configured output for a finished session
///
/// The CSV report is always written; the markdown summary only when a
/// summary path is configured.
///
/// # Arguments
///
/// * `config` - Output configuration
/// * `session` - The finished session
/// * `config_hash` - Hash of the configuration file, if one was loaded
pub fn write_outputs(
    config: &OutputConfig,
    session: &CrawlSession,
    config_hash: Option<&str>,
) -> OutputResult<()> {
    let report_path = Path::new(&config.report_path);
    write_report(report_path, &session.records)?;
    tracing::info!(
        "Product data saved to {} ({} rows)",
        report_path.display(),
        session.records.len()
    );

    if let Some(summary_path) = &config.summary_path {
        let summary = CrawlSummary::from_session(session, config_hash);
        generate_markdown_summary(&summary, Path::new(summary_path))?;
        tracing::info!("Run summary saved to {}", summary_path);
    }

    Ok(())
}
