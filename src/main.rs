//! Collection-Scraper main entry point
//!
//! This is the command-line interface for the Collection-Scraper catalog harvester.

use anyhow::Context;
use clap::Parser;
use collection_scraper::config::{load_config_with_hash, validate, Config};
use collection_scraper::crawler::run_scrape;
use collection_scraper::output::{print_statistics, CrawlSummary};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Collection-Scraper: a storefront catalog harvester
///
/// Collection-Scraper walks every category of a storefront, extracts each
/// product's name, price, variants and gallery images, downloads the images
/// and writes a CSV report.
#[derive(Parser, Debug)]
#[command(name = "collection-scraper")]
#[command(version = "1.0.0")]
#[command(about = "A storefront catalog harvester", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in defaults when omitted)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Override the homepage the crawl starts from
    #[arg(long, value_name = "URL")]
    root_url: Option<String>,

    /// Do not write raw HTML dumps of fetched pages
    #[arg(long)]
    no_debug_dumps: bool,

    /// Validate config and show what would be crawled without actually crawling
    #[arg(long)]
    dry_run: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let (mut config, config_hash) = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("failed to load configuration from {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            (config, Some(hash))
        }
        None => {
            tracing::info!("No configuration file given, using built-in defaults");
            (Config::default(), None)
        }
    };

    if let Some(root_url) = cli.root_url {
        config.site.root_url = root_url;
    }
    if cli.no_debug_dumps {
        config.output.dump_html = false;
    }
    validate(&config).context("invalid configuration")?;

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    handle_scrape(config, config_hash, cli.quiet).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("collection_scraper=info,warn"),
            1 => EnvFilter::new("collection_scraper=debug,info"),
            2 => EnvFilter::new("collection_scraper=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: shows the effective configuration
fn handle_dry_run(config: &Config) {
    println!("=== Collection-Scraper Dry Run ===\n");

    println!("Site:");
    println!("  Root URL: {}", config.site.root_url);
    println!("  Product origin: {}", config.site.product_origin());
    println!("  Link join: {:?}", config.site.link_join);
    println!("  Category marker: {}", config.site.category_marker);
    println!("  Image marker: {}", config.site.image_marker);
    match config.site.max_pages {
        Some(max) => println!("  Max pages per category: {}", max),
        None => println!("  Max pages per category: unbounded"),
    }

    println!("\nSelectors:");
    println!("  Product card: {}", config.selectors.product_card);
    println!("  Product link: {}", config.selectors.product_link);
    println!("  Name: {}", config.selectors.name);
    println!("  Price: {}", config.selectors.price);
    println!("  Gallery image: {}", config.selectors.gallery_image);
    println!("  Size swatch: {}", config.selectors.size_swatch);
    println!("  Color swatch: {}", config.selectors.color_swatch);
    println!("  Swatch attribute: {}", config.selectors.swatch_attribute);

    println!("\nOutput:");
    println!("  Report: {}", config.output.report_path);
    println!("  Images: {}", config.output.images_dir);
    if config.output.dump_html {
        println!("  Page dumps: {}", config.output.debug_dir);
    } else {
        println!("  Page dumps: disabled");
    }
    if let Some(summary) = &config.output.summary_path {
        println!("  Summary: {}", summary);
    }

    println!("\n✓ Configuration is valid");
}

/// Handles the main scrape operation
async fn handle_scrape(
    config: Config,
    config_hash: Option<String>,
    quiet: bool,
) -> anyhow::Result<()> {
    tracing::info!("Starting scrape of {}", config.site.root_url);

    let session = run_scrape(config, config_hash.clone())
        .await
        .context("scrape failed")?;

    tracing::info!(
        "Scrape finished: {} products recorded, {} skipped",
        session.records.len(),
        session.failures.len()
    );

    if !quiet {
        let summary = CrawlSummary::from_session(&session, config_hash.as_deref());
        println!();
        print_statistics(&summary);
    }

    Ok(())
}
