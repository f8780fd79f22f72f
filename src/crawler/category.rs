//! Category walking
//!
//! A category is walked page by page. Each product on a page is processed in
//! isolation: whatever goes wrong with one product is recorded as a
//! `ProductFailure` and the walk moves on to the next one.

use crate::crawler::coordinator::Coordinator;
use crate::crawler::extractor::extract_product;
use crate::crawler::parser::{parse_listing, ListingEntry};
use crate::crawler::{fetch_bytes, fetch_url, FetchResult};
use crate::state::{CategoryCrawl, ProductFailure, ProductRecord, StopReason};
use crate::url::{derive_sku, image_file_name, join_product_link, listing_page_url};
use crate::ScraperError;

impl Coordinator {
    /// Walks every listing page of one category
    ///
    /// Pagination starts at page 1 and stops on the first page that cannot
    /// be fetched, the first page without product entries, or the configured
    /// page cap. Records gathered before the stop are kept.
    ///
    /// # Arguments
    ///
    /// * `category_url` - Absolute URL of the category
    /// * `label` - Category label written into every record
    pub async fn walk_category(&self, category_url: &str, label: &str) -> CategoryCrawl {
        let mut records = Vec::new();
        let mut failures = Vec::new();
        let mut pages_fetched = 0;
        let mut page: u32 = 1;

        let stop_reason = loop {
            if let Some(max_pages) = self.config.site.max_pages {
                if page > max_pages {
                    tracing::info!("Reached page limit of {} for category {}", max_pages, label);
                    break StopReason::PageLimit { max_pages };
                }
            }

            let url = match listing_page_url(category_url, page) {
                Ok(url) => url,
                Err(e) => {
                    tracing::warn!("Cannot build listing URL for {}: {}", category_url, e);
                    break StopReason::FetchFailed {
                        page,
                        reason: e.to_string(),
                    };
                }
            };
            let body = match fetch_url(&self.client, &url).await {
                FetchResult::Success { body, .. } => body,
                failed => {
                    let reason = failed.failure_reason().unwrap_or_default();
                    tracing::warn!("Failed to retrieve the page {}: {}", url, reason);
                    break StopReason::FetchFailed { page, reason };
                }
            };
            pages_fetched += 1;

            self.dump_page(&format!("response_{}_page_{}.html", label, page), &body);

            let entries = parse_listing(&body, &self.selectors);
            tracing::info!(
                "Found {} products on page {} of category {}",
                entries.len(),
                page,
                label
            );

            if entries.is_empty() {
                tracing::info!(
                    "No products found on page {} of category {}. Stopping pagination.",
                    page,
                    label
                );
                break StopReason::EndOfListing;
            }

            for entry in &entries {
                match self.process_product(entry, label).await {
                    Ok(record) => records.push(record),
                    Err(failure) => {
                        tracing::warn!(
                            "Error processing product {}: {}",
                            failure.url,
                            failure.reason
                        );
                        failures.push(failure);
                    }
                }
            }

            page += 1;
        };

        CategoryCrawl {
            label: label.to_string(),
            url: category_url.to_string(),
            records,
            failures,
            pages_fetched,
            stop_reason,
        }
    }

    /// Processes one listing entry into a record, or a failure describing why not
    pub(super) async fn process_product(
        &self,
        entry: &ListingEntry,
        category: &str,
    ) -> Result<ProductRecord, ProductFailure> {
        let failure = |url: &str, error: ScraperError| ProductFailure {
            category: category.to_string(),
            url: url.to_string(),
            reason: error.to_string(),
        };

        let Some(href) = entry.href.as_deref() else {
            return Err(failure("", ScraperError::MissingProductLink));
        };

        let product_url = join_product_link(&self.product_origin, href, self.config.site.link_join)
            .map_err(|e| failure(href, e.into()))?;
        tracing::info!("Product URL: {}", product_url);

        self.scrape_product(&product_url, category)
            .await
            .map_err(|e| failure(&product_url, e))
    }

    /// Fetches a product page, extracts it and downloads its images
    ///
    /// The record is only produced once every image has been saved.
    async fn scrape_product(
        &self,
        product_url: &str,
        category: &str,
    ) -> Result<ProductRecord, ScraperError> {
        let sku = derive_sku(product_url);
        if sku.is_empty() {
            return Err(ScraperError::EmptySku {
                url: product_url.to_string(),
            });
        }
        tracing::info!("SKU: {}", sku);

        let image_dir = self.store.ensure_product_dir(sku)?;
        tracing::debug!("Image directory: {}", image_dir.display());

        let html = fetch_url(&self.client, product_url)
            .await
            .into_body(product_url)?;

        let detail = extract_product(&html, &self.selectors, &self.config.site.image_marker);
        tracing::info!("Product Name: {}", detail.name_or_default());
        tracing::info!("Price: {}", detail.price_or_default());

        for image_url in &detail.image_urls {
            let file_name = image_file_name(image_url).ok_or_else(|| ScraperError::EmptyFileName {
                url: image_url.clone(),
            })?;

            let bytes = fetch_bytes(&self.client, image_url).await?;
            let path = self.store.save_image(sku, file_name, &bytes)?;
            tracing::info!("Image saved as: {}", path.display());
        }

        Ok(detail.into_record(category, sku))
    }
}
