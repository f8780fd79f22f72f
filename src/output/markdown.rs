//! Markdown summary generation
//!
//! This module generates a human-readable markdown summary of a run,
//! including per-category pagination results and skipped products.

use crate::output::traits::{CrawlSummary, OutputResult};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Generates a markdown summary file
///
/// # Arguments
///
/// * `summary` - The run summary data
/// * `output_path` - Path where the markdown file should be written
pub fn generate_markdown_summary(summary: &CrawlSummary, output_path: &Path) -> OutputResult<()> {
    let markdown = format_markdown_summary(summary);

    let mut file = File::create(output_path)?;
    file.write_all(markdown.as_bytes())?;

    Ok(())
}

/// Formats a run summary as markdown
pub fn format_markdown_summary(summary: &CrawlSummary) -> String {
    let mut md = String::new();

    md.push_str("# Collection-Scraper Run Summary\n\n");

    // Run metadata
    md.push_str("## Run Information\n\n");
    md.push_str(&format!("- **Root URL**: {}\n", summary.root_url));
    md.push_str(&format!("- **Started**: {}\n", summary.started_at));
    if let Some(finished) = &summary.finished_at {
        md.push_str(&format!("- **Finished**: {}\n", finished));
    }
    if let Some(duration) = summary.duration_seconds {
        md.push_str(&format!(
            "- **Duration**: {} seconds ({:.2} minutes)\n",
            duration,
            duration as f64 / 60.0
        ));
    }
    md.push_str(&format!("- **Homepage**: {}\n", summary.homepage));
    if let Some(hash) = &summary.config_hash {
        md.push_str(&format!("- **Config Hash**: {}\n", hash));
    }
    md.push('\n');

    // Overall statistics
    md.push_str("## Overall Statistics\n\n");
    md.push_str(&format!("- **Categories**: {}\n", summary.total_categories));
    md.push_str(&format!("- **Listing Pages Fetched**: {}\n", summary.total_pages));
    md.push_str(&format!("- **Products Recorded**: {}\n", summary.total_products));
    md.push_str(&format!("- **Products Skipped**: {}\n", summary.total_failures));
    md.push_str(&format!(
        "- **Categories Cut Short**: {}\n",
        summary.aborted_categories
    ));
    md.push_str(&format!(
        "- **Success Rate**: {:.2}%\n\n",
        summary.success_rate()
    ));

    // Category breakdown
    if !summary.categories.is_empty() {
        md.push_str("## Categories\n\n");
        md.push_str("| Category | Pages | Products | Skipped | Stopped On |\n");
        md.push_str("|----------|-------|----------|---------|------------|\n");
        for category in &summary.categories {
            md.push_str(&format!(
                "| [{}]({}) | {} | {} | {} | {} |\n",
                escape_cell(&category.label),
                category.url,
                category.pages_fetched,
                category.products,
                category.failures,
                escape_cell(&category.stop_reason.to_string())
            ));
        }
        md.push('\n');
    }

    // Skipped products
    if !summary.failures.is_empty() {
        md.push_str("## Skipped Products\n\n");
        md.push_str("| Category | URL | Reason |\n");
        md.push_str("|----------|-----|--------|\n");
        for failure in &summary.failures {
            md.push_str(&format!(
                "| {} | {} | {} |\n",
                escape_cell(&failure.category),
                escape_cell(&failure.url),
                escape_cell(&failure.reason)
            ));
        }
        md.push('\n');
    }

    md
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}
