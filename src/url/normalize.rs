/// Normalizes an image `src` attribute
///
/// Protocol-relative sources (`//host/path`) are pinned to HTTPS; anything
/// else is returned trimmed but otherwise untouched.
///
/// # Examples
///
/// ```
/// use collection_scraper::url::normalize_image_url;
///
/// assert_eq!(
///     normalize_image_url("//cdn.example/master.jpg"),
///     "https://cdn.example/master.jpg"
/// );
/// assert_eq!(
///     normalize_image_url("https://cdn.example/master.jpg"),
///     "https://cdn.example/master.jpg"
/// );
/// ```
pub fn normalize_image_url(src: &str) -> String {
    let src = src.trim();
    if src.starts_with("//") {
        format!("https:{}", src)
    } else {
        src.to_string()
    }
}
