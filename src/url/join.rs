use crate::UrlError;
use serde::Deserialize;
use url::Url;

/// How an href found on a page becomes an absolute URL
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JoinStrategy {
    /// RFC 3986 reference resolution against the base URL
    #[default]
    Resolve,

    /// Base with its trailing slashes stripped, followed by the href verbatim
    Concatenate,
}

/// Builds the absolute URL of a category link found on the homepage
///
/// With [`JoinStrategy::Concatenate`] the href is always appended to the
/// root, even when it is already absolute.
///
/// # Examples
///
/// ```
/// use collection_scraper::url::{join_category_link, JoinStrategy};
///
/// let url = join_category_link("https://shop.example/", "/collections/shoes", JoinStrategy::Resolve).unwrap();
/// assert_eq!(url, "https://shop.example/collections/shoes");
///
/// let url = join_category_link("https://shop.example/", "/collections/shoes", JoinStrategy::Concatenate).unwrap();
/// assert_eq!(url, "https://shop.example/collections/shoes");
/// ```
pub fn join_category_link(root: &str, href: &str, strategy: JoinStrategy) -> Result<String, UrlError> {
    match strategy {
        JoinStrategy::Concatenate => Ok(format!("{}{}", root.trim_end_matches('/'), href)),
        JoinStrategy::Resolve => resolve(root, href),
    }
}

/// Builds the absolute URL of a product link found on a listing page
///
/// With [`JoinStrategy::Concatenate`] hrefs starting with `http` are kept
/// as they are and anything else is appended to the origin.
pub fn join_product_link(origin: &str, href: &str, strategy: JoinStrategy) -> Result<String, UrlError> {
    match strategy {
        JoinStrategy::Concatenate => {
            if href.starts_with("http") {
                Ok(href.to_string())
            } else {
                Ok(format!("{}{}", origin.trim_end_matches('/'), href))
            }
        }
        JoinStrategy::Resolve => resolve(origin, href),
    }
}

/// Returns the URL of listing page `page` of a category
///
/// Any fragment is dropped and an existing `page` query parameter is
/// replaced; other query parameters are kept.
///
/// ```
/// use collection_scraper::url::listing_page_url;
///
/// assert_eq!(
///     listing_page_url("https://shop.example/collections/a", 2).unwrap(),
///     "https://shop.example/collections/a?page=2"
/// );
/// assert_eq!(
///     listing_page_url("https://shop.example/collections/a?sort=new#top", 3).unwrap(),
///     "https://shop.example/collections/a?sort=new&page=3"
/// );
/// ```
pub fn listing_page_url(category_url: &str, page: u32) -> Result<String, UrlError> {
    let mut url = Url::parse(category_url)
        .map_err(|e| UrlError::Parse(format!("{}: {}", category_url, e)))?;
    url.set_fragment(None);

    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != "page")
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    url.query_pairs_mut()
        .clear()
        .extend_pairs(kept)
        .append_pair("page", &page.to_string());

    Ok(url.to_string())
}

fn resolve(base: &str, href: &str) -> Result<String, UrlError> {
    let base_url = Url::parse(base).map_err(|e| UrlError::Parse(format!("{}: {}", base, e)))?;

    let mut joined = base_url.join(href.trim()).map_err(|e| UrlError::Join {
        base: base.to_string(),
        href: href.to_string(),
        reason: e.to_string(),
    })?;
    joined.set_fragment(None);

    match joined.scheme() {
        "http" | "https" => Ok(joined.to_string()),
        other => Err(UrlError::InvalidScheme(other.to_string())),
    }
}
