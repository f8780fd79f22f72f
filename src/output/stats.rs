//! Console statistics for a finished run

use crate::output::traits::CrawlSummary;

/// Prints statistics to stdout in a formatted manner
pub fn print_statistics(summary: &CrawlSummary) {
    println!("=== Scrape Statistics ===\n");

    println!("Overview:");
    println!("  Root URL: {}", summary.root_url);
    println!("  Homepage: {}", summary.homepage);
    println!("  Categories walked: {}", summary.total_categories);
    println!("  Listing pages fetched: {}", summary.total_pages);
    println!("  Products recorded: {}", summary.total_products);
    println!("  Products skipped: {}", summary.total_failures);
    if let Some(duration) = summary.duration_seconds {
        println!("  Duration: {}s", duration);
    }
    println!();

    if !summary.categories.is_empty() {
        println!("Categories:");
        let mut categories: Vec<_> = summary.categories.iter().collect();
        categories.sort_by(|a, b| b.products.cmp(&a.products));

        for category in categories {
            println!(
                "  {}: {} products, {} skipped, {} pages ({})",
                category.label,
                category.products,
                category.failures,
                category.pages_fetched,
                category.stop_reason
            );
        }
        println!();
    }

    if summary.aborted_categories > 0 {
        println!(
            "Categories cut short by fetch failures: {}",
            summary.aborted_categories
        );
        println!();
    }

    println!(
        "Success Rate: {:.1}% ({} / {} products recorded)",
        summary.success_rate(),
        summary.total_products,
        summary.total_products + summary.total_failures
    );
}
