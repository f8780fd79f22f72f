/// Returns everything after the last `/` of `url`
///
/// This is a plain string split; the result is empty when the URL ends in a
/// slash.
///
/// ```
/// use collection_scraper::url::last_path_segment;
///
/// assert_eq!(last_path_segment("https://shop.example/products/ao-mu"), "ao-mu");
/// assert_eq!(last_path_segment("https://shop.example/products/"), "");
/// ```
pub fn last_path_segment(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}

/// Derives the SKU of a product from its URL
pub fn derive_sku(product_url: &str) -> &str {
    last_path_segment(product_url)
}

/// Derives the label of a category from its URL
pub fn category_label(category_url: &str) -> &str {
    last_path_segment(category_url)
}

/// Derives the on-disk file name for a downloaded image
///
/// Query string and fragment are dropped. Returns `None` when nothing is left.
pub fn image_file_name(image_url: &str) -> Option<&str> {
    let segment = last_path_segment(image_url);
    let name = segment
        .split(|c: char| c == '?' || c == '#')
        .next()
        .unwrap_or(segment);

    if name.is_empty() || name == "." || name == ".." {
        None
    } else {
        Some(name)
    }
}
