use crate::url::JoinStrategy;
use serde::Deserialize;

/// Main configuration structure for Collection-Scraper
///
/// Every section is optional; an empty file yields the built-in defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub selectors: SelectorConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Which site to walk and how links on it are interpreted
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Homepage the crawl starts from
    #[serde(rename = "root-url")]
    pub root_url: String,

    /// Origin that relative product links are joined onto.
    /// Falls back to `root-url` without its trailing slash.
    #[serde(rename = "product-origin")]
    pub product_origin: Option<String>,

    /// How category and product hrefs are turned into absolute URLs
    #[serde(rename = "link-join")]
    pub link_join: JoinStrategy,

    /// Substring an href must contain to count as a category link
    #[serde(rename = "category-marker")]
    pub category_marker: String,

    /// Substring an image URL must contain to be kept
    #[serde(rename = "image-marker")]
    pub image_marker: String,

    /// Upper bound on listing pages per category (unbounded when absent)
    #[serde(rename = "max-pages")]
    pub max_pages: Option<u32>,
}

impl SiteConfig {
    /// Returns the origin used for product links
    pub fn product_origin(&self) -> String {
        match &self.product_origin {
            Some(origin) => origin.clone(),
            None => self.root_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            root_url: "https://nghienbongda.vn/".to_string(),
            product_origin: None,
            link_join: JoinStrategy::default(),
            category_marker: "collections".to_string(),
            image_marker: "master".to_string(),
            max_pages: None,
        }
    }
}

/// CSS selectors used to pull data out of listing and product pages
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// One product entry on a category listing page
    #[serde(rename = "product-card")]
    pub product_card: String,

    /// Link to the product page, searched inside a product entry
    #[serde(rename = "product-link")]
    pub product_link: String,

    /// Product name on the product page
    pub name: String,

    /// Product price on the product page
    pub price: String,

    /// Gallery images on the product page
    #[serde(rename = "gallery-image")]
    pub gallery_image: String,

    /// Size swatches on the product page
    #[serde(rename = "size-swatch")]
    pub size_swatch: String,

    /// Color swatches on the product page
    #[serde(rename = "color-swatch")]
    pub color_swatch: String,

    /// Attribute holding a swatch's value
    #[serde(rename = "swatch-attribute")]
    pub swatch_attribute: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            product_card: "div.product-inner".to_string(),
            product_link: "a.quickview-product".to_string(),
            name: "h1".to_string(),
            price: "span.pro-price".to_string(),
            gallery_image: "ul.productList-slider li.product-gallery a img".to_string(),
            size_swatch: "div#variant-swatch-0 div.swatch-element".to_string(),
            color_swatch: "div#variant-swatch-1 div.swatch-element".to_string(),
            swatch_attribute: "data-value".to_string(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path to the CSV product report
    #[serde(rename = "report-path")]
    pub report_path: String,

    /// Directory that receives one sub-directory of images per SKU
    #[serde(rename = "images-dir")]
    pub images_dir: String,

    /// Directory for raw HTML dumps of fetched pages
    #[serde(rename = "debug-dir")]
    pub debug_dir: String,

    /// Whether fetched pages are dumped at all
    #[serde(rename = "dump-html")]
    pub dump_html: bool,

    /// Path to the markdown run summary
    #[serde(rename = "summary-path")]
    pub summary_path: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            report_path: "product_data.csv".to_string(),
            images_dir: "images".to_string(),
            debug_dir: ".".to_string(),
            dump_html: true,
            summary_path: None,
        }
    }
}
