//! Product page extraction
//!
//! Extraction is lenient: a missing element yields `None` for that field and
//! the field falls back to its default when the record is built. Nothing on a
//! product page can make extraction fail.

use crate::crawler::parser::{first_text, Selectors};
use crate::state::ProductRecord;
use crate::url::normalize_image_url;
use scraper::{Html, Selector};

/// Name used when the page has no name element
pub const DEFAULT_NAME: &str = "No Name";

/// Price used when the page has no price element
pub const DEFAULT_PRICE: &str = "No Price";

/// Fields extracted from one product page, before defaults are applied
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDetail {
    pub name: Option<String>,
    pub price: Option<String>,
    pub image_urls: Vec<String>,
    pub sizes: Vec<String>,
    pub colors: Vec<String>,
}

impl ProductDetail {
    /// Product name, or [`DEFAULT_NAME`]
    pub fn name_or_default(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_NAME)
    }

    /// Product price, or [`DEFAULT_PRICE`]
    pub fn price_or_default(&self) -> &str {
        self.price.as_deref().unwrap_or(DEFAULT_PRICE)
    }

    /// Builds the final record for this product
    pub fn into_record(self, category: &str, sku: &str) -> ProductRecord {
        ProductRecord {
            category: category.to_string(),
            name: self.name_or_default().to_string(),
            sku: sku.to_string(),
            price: self.price_or_default().to_string(),
            image_urls: self.image_urls,
            sizes: self.sizes,
            colors: self.colors,
        }
    }
}

/// Extracts a product's details from its page
///
/// # Arguments
///
/// * `html` - The product page
/// * `selectors` - Compiled selectors
/// * `image_marker` - Substring an image URL must contain to be kept
///
/// # Example
///
/// ```
/// use collection_scraper::config::SelectorConfig;
/// use collection_scraper::crawler::{extract_product, Selectors};
///
/// let selectors = Selectors::compile(&SelectorConfig::default()).unwrap();
/// let detail = extract_product("<h1>Áo MU</h1>", &selectors, "master");
/// assert_eq!(detail.name_or_default(), "Áo MU");
/// assert_eq!(detail.price_or_default(), "No Price");
/// ```
pub fn extract_product(html: &str, selectors: &Selectors, image_marker: &str) -> ProductDetail {
    let document = Html::parse_document(html);

    let name = first_text(&document, &selectors.name);
    let price = first_text(&document, &selectors.price);
    let image_urls = extract_images(&document, &selectors.gallery_image, image_marker);
    let sizes = extract_swatches(&document, &selectors.size_swatch, &selectors.swatch_attribute);
    let colors = extract_swatches(&document, &selectors.color_swatch, &selectors.swatch_attribute);

    tracing::debug!(
        "Extracted name={:?} price={:?} images={} sizes={:?} colors={:?}",
        name,
        price,
        image_urls.len(),
        sizes,
        colors
    );

    ProductDetail {
        name,
        price,
        image_urls,
        sizes,
        colors,
    }
}

/// Gallery image URLs containing `marker`, normalized, in page order
fn extract_images(document: &Html, selector: &Selector, marker: &str) -> Vec<String> {
    document
        .select(selector)
        .filter_map(|img| img.value().attr("src"))
        .filter(|src| src.contains(marker))
        .map(normalize_image_url)
        .collect()
}

/// Values of `attribute` on every swatch element that carries it
fn extract_swatches(document: &Html, selector: &Selector, attribute: &str) -> Vec<String> {
    document
        .select(selector)
        .filter_map(|swatch| swatch.value().attr(attribute))
        .map(str::to_string)
        .collect()
}
