//! Integration tests for the crawler
//!
//! These tests use wiremock to serve a small storefront and run the
//! category and site walkers end-to-end against it.

use collection_scraper::config::Config;
use collection_scraper::crawler::{run_scrape, scrape, Coordinator};
use collection_scraper::state::{HomepageStatus, StopReason};
use std::path::Path;
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration rooted at the mock server, writing into `dir`
fn create_test_config(base_url: &str, dir: &Path) -> Config {
    let mut config = Config::default();
    config.site.root_url = format!("{}/", base_url);
    config.output.report_path = dir.join("product_data.csv").display().to_string();
    config.output.images_dir = dir.join("images").display().to_string();
    config.output.debug_dir = dir.join("debug").display().to_string();
    config.output.dump_html = true;
    config
}

fn listing_page(hrefs: &[&str]) -> String {
    let entries: String = hrefs
        .iter()
        .map(|href| {
            format!(
                r#"<div class="product-inner">
                    <a class="product-image" href="{href}"><img src="/thumb.jpg"></a>
                    <a class="quickview-product" href="{href}">Xem nhanh</a>
                </div>"#
            )
        })
        .collect();
    format!(
        r#"<html><body><div class="collection-grid">{}</div></body></html>"#,
        entries
    )
}

fn empty_listing_page() -> String {
    r#"<html><body><div class="collection-grid"><p>Không có sản phẩm</p></div></body></html>"#
        .to_string()
}

fn product_page(name: &str, price: &str, images: &[String], sizes: &[&str], colors: &[&str]) -> String {
    let gallery: String = images
        .iter()
        .map(|src| {
            format!(
                r#"<li class="product-gallery"><a href="{src}"><img src="{src}"></a></li>"#
            )
        })
        .collect();
    let size_swatches: String = sizes
        .iter()
        .map(|s| format!(r#"<div class="swatch-element" data-value="{s}"></div>"#))
        .collect();
    let color_swatches: String = colors
        .iter()
        .map(|c| format!(r#"<div class="swatch-element" data-value="{c}"></div>"#))
        .collect();

    format!(
        r#"<html><body>
            <h1>{name}</h1>
            <span class="pro-price">{price}</span>
            <ul class="productList-slider">{gallery}</ul>
            <div id="variant-swatch-0">{size_swatches}</div>
            <div id="variant-swatch-1">{color_swatches}</div>
        </body></html>"#
    )
}

async fn mount_html(server: &MockServer, route: &str, page: Option<&str>, body: String) {
    let mock = Mock::given(method("GET")).and(path(route));
    let mock = match page {
        Some(page) => mock.and(query_param("page", page)),
        None => mock,
    };
    mock.respond_with(
        ResponseTemplate::new(200)
            .set_body_string(body)
            .insert_header("content-type", "text/html; charset=utf-8"),
    )
    .mount(server)
    .await;
}

async fn mount_status(server: &MockServer, route: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

async fn mount_image(server: &MockServer, route: &str, bytes: &[u8]) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(bytes.to_vec())
                .insert_header("content-type", "image/jpeg"),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_full_scrape_writes_report_and_images() {
    let server = MockServer::start().await;
    let base_url = server.uri();
    let dir = TempDir::new().unwrap();

    mount_html(
        &server,
        "/",
        None,
        r#"<html><body>
            <nav>
                <a href="/collections/ao-clb">Áo CLB</a>
                <a href="/pages/lien-he">Liên hệ</a>
            </nav>
            <footer><a href="/collections/ao-clb">Áo CLB</a></footer>
        </body></html>"#
            .to_string(),
    )
    .await;

    mount_html(
        &server,
        "/collections/ao-clb",
        Some("1"),
        listing_page(&["/products/ao-mu-2024", "/products/ao-real-2024"]),
    )
    .await;
    mount_html(&server, "/collections/ao-clb", Some("2"), empty_listing_page()).await;

    mount_html(
        &server,
        "/products/ao-mu-2024",
        None,
        product_page(
            "Áo MU 2024",
            "350,000₫",
            &[
                format!("{}/cdn/master_mu_front.jpg", base_url),
                format!("{}/cdn/thumb_mu_front.jpg", base_url),
                format!("{}/cdn/master_mu_back.jpg", base_url),
            ],
            &["S", "M", "L"],
            &["Đỏ"],
        ),
    )
    .await;
    mount_html(
        &server,
        "/products/ao-real-2024",
        None,
        product_page(
            "Áo Real 2024",
            "320,000₫",
            &[format!("{}/cdn/master_real.jpg", base_url)],
            &["M", "XL"],
            &["Trắng", "Tím"],
        ),
    )
    .await;

    mount_image(&server, "/cdn/master_mu_front.jpg", b"mu-front").await;
    mount_image(&server, "/cdn/master_mu_back.jpg", b"mu-back").await;
    mount_image(&server, "/cdn/master_real.jpg", b"real").await;

    let config = create_test_config(&base_url, dir.path());
    let session = scrape(config).await.expect("scrape failed");

    assert_eq!(session.homepage, HomepageStatus::Reached { categories: 1 });
    assert_eq!(session.records.len(), 2);
    assert!(session.failures.is_empty());
    assert_eq!(session.categories[0].stop_reason, StopReason::EndOfListing);
    assert_eq!(session.categories[0].pages_fetched, 2);

    // Report
    let mut reader = csv::Reader::from_path(dir.path().join("product_data.csv")).unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        vec!["Category", "Product Name", "SKU", "Image URLs", "Price", "Sizes", "Colors"]
    );

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 2);

    assert_eq!(&rows[0][0], "ao-clb");
    assert_eq!(&rows[0][1], "Áo MU 2024");
    assert_eq!(&rows[0][2], "ao-mu-2024");
    assert_eq!(
        &rows[0][3],
        format!(
            "{}/cdn/master_mu_front.jpg, {}/cdn/master_mu_back.jpg",
            base_url, base_url
        )
    );
    assert_eq!(&rows[0][4], "350,000₫");
    assert_eq!(&rows[0][5], "S, M, L");
    assert_eq!(&rows[0][6], "Đỏ");

    assert_eq!(&rows[1][0], "ao-clb");
    assert_eq!(&rows[1][1], "Áo Real 2024");
    assert_eq!(&rows[1][2], "ao-real-2024");
    assert_eq!(&rows[1][4], "320,000₫");
    assert_eq!(&rows[1][5], "M, XL");
    assert_eq!(&rows[1][6], "Trắng, Tím");

    // Images
    let images = dir.path().join("images");
    assert_eq!(
        std::fs::read(images.join("ao-mu-2024/master_mu_front.jpg")).unwrap(),
        b"mu-front"
    );
    assert_eq!(
        std::fs::read(images.join("ao-mu-2024/master_mu_back.jpg")).unwrap(),
        b"mu-back"
    );
    assert!(!images.join("ao-mu-2024/thumb_mu_front.jpg").exists());
    assert_eq!(
        std::fs::read(images.join("ao-real-2024/master_real.jpg")).unwrap(),
        b"real"
    );
    let mut product_dirs: Vec<String> = std::fs::read_dir(&images)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    product_dirs.sort();
    assert_eq!(product_dirs, vec!["ao-mu-2024", "ao-real-2024"]);

    // Page dumps
    let debug = dir.path().join("debug");
    assert!(debug.join("response_main.html").is_file());
    assert!(debug.join("response_ao-clb_page_1.html").is_file());
    assert!(debug.join("response_ao-clb_page_2.html").is_file());
}

#[tokio::test]
async fn test_category_not_found_on_first_page() {
    let server = MockServer::start().await;
    let base_url = server.uri();
    let dir = TempDir::new().unwrap();

    mount_status(&server, "/collections/missing", 404).await;

    let coordinator = Coordinator::new(create_test_config(&base_url, dir.path())).unwrap();
    let crawl = coordinator
        .walk_category(&format!("{}/collections/missing", base_url), "missing")
        .await;

    assert!(crawl.records.is_empty());
    assert!(crawl.failures.is_empty());
    assert_eq!(crawl.pages_fetched, 0);
    assert_eq!(
        crawl.stop_reason,
        StopReason::FetchFailed {
            page: 1,
            reason: "HTTP 404".to_string()
        }
    );
}

#[tokio::test]
async fn test_empty_page_stops_pagination_and_keeps_results() {
    let server = MockServer::start().await;
    let base_url = server.uri();
    let dir = TempDir::new().unwrap();

    mount_html(&server, "/collections/giay", Some("1"), listing_page(&["/products/giay-a"])).await;
    mount_html(&server, "/collections/giay", Some("2"), listing_page(&["/products/giay-b"])).await;
    mount_html(&server, "/collections/giay", Some("3"), empty_listing_page()).await;
    mount_html(&server, "/products/giay-a", None, product_page("Giày A", "1,000,000₫", &[], &["40"], &[])).await;
    mount_html(&server, "/products/giay-b", None, product_page("Giày B", "900,000₫", &[], &["41"], &[])).await;

    let coordinator = Coordinator::new(create_test_config(&base_url, dir.path())).unwrap();
    let crawl = coordinator
        .walk_category(&format!("{}/collections/giay", base_url), "giay")
        .await;

    assert_eq!(crawl.stop_reason, StopReason::EndOfListing);
    assert_eq!(crawl.pages_fetched, 3);
    let skus: Vec<&str> = crawl.records.iter().map(|r| r.sku.as_str()).collect();
    assert_eq!(skus, vec!["giay-a", "giay-b"]);
}

#[tokio::test]
async fn test_fetch_failure_mid_category_keeps_partial_results() {
    let server = MockServer::start().await;
    let base_url = server.uri();
    let dir = TempDir::new().unwrap();

    mount_html(&server, "/collections/giay", Some("1"), listing_page(&["/products/giay-a"])).await;
    Mock::given(method("GET"))
        .and(path("/collections/giay"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    mount_html(&server, "/products/giay-a", None, product_page("Giày A", "1,000,000₫", &[], &[], &[])).await;

    let coordinator = Coordinator::new(create_test_config(&base_url, dir.path())).unwrap();
    let crawl = coordinator
        .walk_category(&format!("{}/collections/giay", base_url), "giay")
        .await;

    assert_eq!(crawl.records.len(), 1);
    assert_eq!(
        crawl.stop_reason,
        StopReason::FetchFailed {
            page: 2,
            reason: "HTTP 503".to_string()
        }
    );
}

#[tokio::test]
async fn test_product_failures_do_not_abort_category() {
    let server = MockServer::start().await;
    let base_url = server.uri();
    let dir = TempDir::new().unwrap();

    let listing = r#"<html><body>
            <div class="product-inner"><a class="quickview-product" href="/products/broken">x</a></div>
            <div class="product-inner"><span>no link here</span></div>
            <div class="product-inner"><a class="quickview-product" href="/products/bad-image">x</a></div>
            <div class="product-inner"><a class="quickview-product" href="/products/bare">x</a></div>
        </body></html>"#
        .to_string();
    mount_html(&server, "/collections/mixed", Some("1"), listing).await;
    mount_html(&server, "/collections/mixed", Some("2"), empty_listing_page()).await;

    mount_status(&server, "/products/broken", 500).await;
    mount_html(
        &server,
        "/products/bad-image",
        None,
        product_page(
            "Bad Image",
            "10₫",
            &[format!("{}/cdn/master_gone.jpg", base_url)],
            &[],
            &[],
        ),
    )
    .await;
    mount_status(&server, "/cdn/master_gone.jpg", 404).await;
    mount_html(&server, "/products/bare", None, "<html><body></body></html>".to_string()).await;

    let coordinator = Coordinator::new(create_test_config(&base_url, dir.path())).unwrap();
    let crawl = coordinator
        .walk_category(&format!("{}/collections/mixed", base_url), "mixed")
        .await;

    assert_eq!(crawl.stop_reason, StopReason::EndOfListing);

    assert_eq!(crawl.records.len(), 1);
    let bare = &crawl.records[0];
    assert_eq!(bare.sku, "bare");
    assert_eq!(bare.name, "No Name");
    assert_eq!(bare.price, "No Price");
    assert!(bare.image_urls.is_empty());

    assert_eq!(crawl.failures.len(), 3);
    assert_eq!(crawl.failures[0].url, format!("{}/products/broken", base_url));
    assert!(crawl.failures[0].reason.contains("500"));
    assert_eq!(crawl.failures[1].url, "");
    assert_eq!(crawl.failures[2].url, format!("{}/products/bad-image", base_url));
    assert!(crawl.failures[2].reason.contains("404"));

    // The SKU directory is created before the product page is fetched
    assert!(dir.path().join("images/broken").is_dir());
}

#[tokio::test]
async fn test_page_limit_stops_pagination() {
    let server = MockServer::start().await;
    let base_url = server.uri();
    let dir = TempDir::new().unwrap();

    mount_html(&server, "/collections/all", None, listing_page(&["/products/p1"])).await;
    mount_html(&server, "/products/p1", None, product_page("P1", "1₫", &[], &[], &[])).await;

    let mut config = create_test_config(&base_url, dir.path());
    config.site.max_pages = Some(2);
    let coordinator = Coordinator::new(config).unwrap();
    let crawl = coordinator
        .walk_category(&format!("{}/collections/all", base_url), "all")
        .await;

    assert_eq!(crawl.stop_reason, StopReason::PageLimit { max_pages: 2 });
    assert_eq!(crawl.pages_fetched, 2);
    assert_eq!(crawl.records.len(), 2);
}

#[tokio::test]
async fn test_homepage_failure_writes_no_report() {
    let server = MockServer::start().await;
    let base_url = server.uri();
    let dir = TempDir::new().unwrap();

    mount_status(&server, "/", 500).await;

    let config = create_test_config(&base_url, dir.path());
    let session = run_scrape(config, None).await.expect("scrape should not error");

    assert!(matches!(session.homepage, HomepageStatus::Failed { .. }));
    assert!(session.records.is_empty());
    assert!(!dir.path().join("product_data.csv").exists());
}

#[tokio::test]
async fn test_summary_written_when_configured() {
    let server = MockServer::start().await;
    let base_url = server.uri();
    let dir = TempDir::new().unwrap();

    mount_html(
        &server,
        "/",
        None,
        r#"<a href="/collections/empty">Empty</a>"#.to_string(),
    )
    .await;
    mount_html(&server, "/collections/empty", Some("1"), empty_listing_page()).await;

    let mut config = create_test_config(&base_url, dir.path());
    config.output.dump_html = false;
    config.output.summary_path = Some(dir.path().join("summary.md").display().to_string());

    let session = run_scrape(config, Some("cafebabe".to_string())).await.unwrap();
    assert!(session.records.is_empty());

    let report = std::fs::read_to_string(dir.path().join("product_data.csv")).unwrap();
    assert_eq!(report.lines().count(), 1);

    let summary = std::fs::read_to_string(dir.path().join("summary.md")).unwrap();
    assert!(summary.contains("- **Config Hash**: cafebabe"));
    assert!(summary.contains("[empty]"));
    assert!(!dir.path().join("debug").exists());
}

#[tokio::test]
async fn test_category_url_with_fragment_paginates_and_stops() {
    let server = MockServer::start().await;
    let base_url = server.uri();
    let dir = TempDir::new().unwrap();

    mount_html(&server, "/collections/ao", Some("1"), listing_page(&["/products/ao-a"])).await;
    mount_html(&server, "/collections/ao", Some("2"), empty_listing_page()).await;
    mount_html(&server, "/products/ao-a", None, product_page("Áo A", "1₫", &[], &[], &[])).await;

    let coordinator = Coordinator::new(create_test_config(&base_url, dir.path())).unwrap();
    let crawl = coordinator
        .walk_category(&format!("{}/collections/ao#top", base_url), "ao")
        .await;

    assert_eq!(crawl.stop_reason, StopReason::EndOfListing);
    assert_eq!(crawl.pages_fetched, 2);
    assert_eq!(crawl.records.len(), 1);

    let requests = server.received_requests().await.unwrap();
    let listing_queries: Vec<Option<String>> = requests
        .iter()
        .filter(|r| r.url.path() == "/collections/ao")
        .map(|r| r.url.query().map(str::to_string))
        .collect();
    assert_eq!(
        listing_queries,
        vec![Some("page=1".to_string()), Some("page=2".to_string())]
    );
}
