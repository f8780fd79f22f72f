//! HTML parser for storefront pages
//!
//! This module handles parsing HTML content to extract:
//! - Category links from the homepage
//! - Product entries from a category listing page
//!
//! Product pages are handled by the extractor, which shares the compiled
//! selectors defined here.

use crate::config::SelectorConfig;
use crate::ConfigError;
use scraper::{ElementRef, Html, Selector};

/// Selectors compiled once from the configuration
#[derive(Debug, Clone)]
pub struct Selectors {
    pub product_card: Selector,
    pub product_link: Selector,
    pub name: Selector,
    pub price: Selector,
    pub gallery_image: Selector,
    pub size_swatch: Selector,
    pub color_swatch: Selector,
    pub swatch_attribute: String,
    anchor: Selector,
}

impl Selectors {
    /// Compiles every selector in the configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Selectors)` - All selectors are valid
    /// * `Err(ConfigError::InvalidSelector)` - The first selector that failed, by key
    pub fn compile(config: &SelectorConfig) -> Result<Self, ConfigError> {
        if config.swatch_attribute.is_empty() {
            return Err(ConfigError::Validation(
                "swatch-attribute cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            product_card: compile_one("product-card", &config.product_card)?,
            product_link: compile_one("product-link", &config.product_link)?,
            name: compile_one("name", &config.name)?,
            price: compile_one("price", &config.price)?,
            gallery_image: compile_one("gallery-image", &config.gallery_image)?,
            size_swatch: compile_one("size-swatch", &config.size_swatch)?,
            color_swatch: compile_one("color-swatch", &config.color_swatch)?,
            swatch_attribute: config.swatch_attribute.clone(),
            anchor: compile_one("anchor", "a[href]")?,
        })
    }
}

fn compile_one(key: &str, css: &str) -> Result<Selector, ConfigError> {
    Selector::parse(css)
        .map_err(|e| ConfigError::InvalidSelector(format!("{} = '{}': {:?}", key, css, e)))
}

/// One product entry found on a listing page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    /// Raw `href` of the entry's product link, if it has one
    pub href: Option<String>,
}

/// Extracts the product entries of a category listing page
///
/// Every element matching the product-card selector is one entry, whether
/// or not it contains a product link.
///
/// # Example
///
/// ```
/// use collection_scraper::config::SelectorConfig;
/// use collection_scraper::crawler::{parse_listing, Selectors};
///
/// let selectors = Selectors::compile(&SelectorConfig::default()).unwrap();
/// let html = r#"<div class="product-inner"><a class="quickview-product" href="/products/a">A</a></div>"#;
/// let entries = parse_listing(html, &selectors);
/// assert_eq!(entries[0].href.as_deref(), Some("/products/a"));
/// ```
pub fn parse_listing(html: &str, selectors: &Selectors) -> Vec<ListingEntry> {
    let document = Html::parse_document(html);

    document
        .select(&selectors.product_card)
        .map(|card| ListingEntry {
            href: card
                .select(&selectors.product_link)
                .next()
                .and_then(|link| link.value().attr("href"))
                .map(str::to_string),
        })
        .collect()
}

/// Extracts every href on the homepage that contains `marker`
///
/// Hrefs are returned raw and in document order; duplicates are kept.
pub fn extract_category_links(html: &str, selectors: &Selectors, marker: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    document
        .select(&selectors.anchor)
        .filter_map(|element| element.value().attr("href"))
        .filter(|href| href.contains(marker))
        .map(str::to_string)
        .collect()
}

/// Returns the trimmed text of the first element matching `selector`
pub(crate) fn first_text(document: &Html, selector: &Selector) -> Option<String> {
    document
        .select(selector)
        .next()
        .map(|element| element_text(&element))
}

/// Concatenated, trimmed text content of an element
pub(crate) fn element_text(element: &ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
