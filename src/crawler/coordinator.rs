//! Crawler coordinator - site-level orchestration
//!
//! This module contains the site walk that ties everything together:
//! - Fetching the homepage and discovering category links
//! - Walking every category in discovery order
//! - Folding each category's outcome into the session
//! - Writing the report once the walk is over

use crate::config::Config;
use crate::crawler::parser::{extract_category_links, Selectors};
use crate::crawler::{build_http_client, fetch_url, FetchResult};
use crate::output::write_outputs;
use crate::state::{CrawlSession, HomepageStatus};
use crate::storage::{open_storage, ArtifactStore};
use crate::url::{category_label, join_category_link, JoinStrategy};
use crate::ScraperError;
use reqwest::Client;
use std::collections::HashSet;
use std::sync::Arc;

/// Name of the homepage dump
pub const HOMEPAGE_DUMP: &str = "response_main.html";

/// Main crawler coordinator structure
pub struct Coordinator {
    pub(super) config: Arc<Config>,
    pub(super) client: Client,
    pub(super) selectors: Selectors,
    pub(super) store: Box<dyn ArtifactStore + Send + Sync>,
    pub(super) product_origin: String,
}

impl Coordinator {
    /// Creates a coordinator that writes artifacts to the filesystem
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Successfully created coordinator
    /// * `Err(ScraperError)` - A selector did not compile or the HTTP client could not be built
    pub fn new(config: Config) -> Result<Self, ScraperError> {
        let store = open_storage(&config.output);
        Self::with_store(config, Box::new(store))
    }

    /// Creates a coordinator with a caller-supplied artifact store
    pub fn with_store(
        config: Config,
        store: Box<dyn ArtifactStore + Send + Sync>,
    ) -> Result<Self, ScraperError> {
        let selectors = Selectors::compile(&config.selectors)?;
        let client = build_http_client()?;
        let product_origin = config.site.product_origin();

        Ok(Self {
            config: Arc::new(config),
            client,
            selectors,
            store,
            product_origin,
        })
    }

    /// Walks the whole site
    ///
    /// 1. Fetch the homepage
    /// 2. Collect category links, deduplicated, in first-seen order
    /// 3. Walk every category
    ///
    /// A homepage that cannot be fetched ends the walk early with
    /// [`HomepageStatus::Failed`]; it is not an `Err`. Errors are reserved for
    /// local failures such as an images directory that cannot be created.
    pub async fn walk_site(&self) -> Result<CrawlSession, ScraperError> {
        let root_url = self.config.site.root_url.as_str();
        let mut session = CrawlSession::new(root_url);

        tracing::info!("Fetching homepage {}", root_url);
        let body = match fetch_url(&self.client, root_url).await {
            FetchResult::Success { final_url, body } => {
                if final_url != root_url {
                    tracing::info!("Homepage redirected to {}", final_url);
                }
                body
            }
            failed => {
                let reason = failed.failure_reason().unwrap_or_default();
                tracing::error!("Failed to retrieve the main page: {}", reason);
                session.homepage = HomepageStatus::Failed { reason };
                session.finish();
                return Ok(session);
            }
        };

        self.dump_page(HOMEPAGE_DUMP, &body);

        let hrefs = extract_category_links(&body, &self.selectors, &self.config.site.category_marker);
        let category_urls = discover_categories(root_url, &hrefs, self.config.site.link_join);
        tracing::info!("Found {} collection links", category_urls.len());
        session.homepage = HomepageStatus::Reached {
            categories: category_urls.len(),
        };

        self.store.prepare()?;

        for category_url in &category_urls {
            let label = category_label(category_url);
            tracing::info!("Crawling category: {}", label);

            let crawl = self.walk_category(category_url, label).await;
            tracing::info!(
                "Category {} done: {} products, {} skipped, stopped on {}",
                label,
                crawl.records.len(),
                crawl.failures.len(),
                crawl.stop_reason
            );
            session.absorb(crawl);
        }

        session.finish();
        Ok(session)
    }

    /// Writes a page dump, logging instead of failing
    pub(super) fn dump_page(&self, name: &str, html: &str) {
        match self.store.save_page_dump(name, html) {
            Ok(Some(path)) => tracing::debug!("Saved page dump to {}", path.display()),
            Ok(None) => {}
            Err(e) => tracing::warn!("Could not save page dump {}: {}", name, e),
        }
    }
}

/// Turns raw category hrefs into absolute, deduplicated category URLs
///
/// The result keeps the order in which URLs were first seen. Hrefs that
/// cannot be joined are logged and skipped.
pub fn discover_categories(root_url: &str, hrefs: &[String], strategy: JoinStrategy) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut urls = Vec::new();

    for href in hrefs {
        match join_category_link(root_url, href, strategy) {
            Ok(url) => {
                if seen.insert(url.clone()) {
                    urls.push(url);
                }
            }
            Err(e) => tracing::warn!("Skipping category link {}: {}", href, e),
        }
    }

    urls
}

/// Runs a complete scrape
///
/// This function orchestrates the entire run:
///
/// 1. Build the coordinator (selectors, HTTP client, artifact store)
/// 2. Walk the site
/// 3. Write the CSV report, and the markdown summary when configured
///
/// No report is written when the homepage could not be fetched.
///
/// # Arguments
///
/// * `config` - The scraper configuration
/// * `config_hash` - Hash of the configuration file, recorded in the summary
///
/// # Example
///
/// ```no_run
/// use collection_scraper::config::load_config;
/// use collection_scraper::crawler::run_scrape;
/// use std::path::Path;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = load_config(Path::new("scraper.toml"))?;
/// let session = run_scrape(config, None).await?;
/// println!("{} products", session.records.len());
/// # Ok(())
/// # }
/// ```
pub async fn run_scrape(
    config: Config,
    config_hash: Option<String>,
) -> Result<CrawlSession, ScraperError> {
    let output = config.output.clone();
    let coordinator = Coordinator::new(config)?;
    let session = coordinator.walk_site().await?;

    if session.reached_homepage() {
        write_outputs(&output, &session, config_hash.as_deref())?;
    } else {
        tracing::warn!("Homepage unreachable, no report written");
    }

    Ok(session)
}
