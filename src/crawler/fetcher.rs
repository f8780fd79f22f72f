//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler:
//! - Building the HTTP client
//! - GET requests for HTML pages
//! - GET requests for image bytes
//! - Error classification
//!
//! There is no retry logic. A failed request is terminal for the call site
//! that issued it.

use crate::ScraperError;
use reqwest::Client;

/// Result of a page fetch
#[derive(Debug)]
pub enum FetchResult {
    /// Successfully fetched the page
    Success {
        /// Final URL after redirects
        final_url: String,
        /// Page body content
        body: String,
    },

    /// The server answered with a non-2xx status
    HttpError {
        /// The HTTP status code
        status_code: u16,
    },

    /// Network error (connection refused, DNS failure, body read failure, ...)
    NetworkError {
        /// Error description
        error: String,
    },
}

impl FetchResult {
    /// Describes why the fetch failed, or `None` on success
    pub fn failure_reason(&self) -> Option<String> {
        match self {
            Self::Success { .. } => None,
            Self::HttpError { status_code } => Some(format!("HTTP {}", status_code)),
            Self::NetworkError { error } => Some(error.clone()),
        }
    }

    /// Converts the result into the page body, or an error naming `url`
    pub fn into_body(self, url: &str) -> Result<String, ScraperError> {
        match self {
            Self::Success { body, .. } => Ok(body),
            Self::HttpError { status_code } => Err(ScraperError::HttpStatus {
                url: url.to_string(),
                status_code,
            }),
            Self::NetworkError { error } => Err(ScraperError::Network {
                url: url.to_string(),
                error,
            }),
        }
    }
}

/// Builds the HTTP client
///
/// Requests carry no custom headers; only the client's defaults (plus
/// transparent gzip/brotli decoding and redirect following) apply.
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client() -> Result<Client, reqwest::Error> {
    Client::builder().gzip(true).brotli(true).build()
}

/// Fetches a page and returns its body as text
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
///
/// # Returns
///
/// A FetchResult indicating success or the type of failure
pub async fn fetch_url(client: &Client, url: &str) -> FetchResult {
    match client.get(url).send().await {
        Ok(response) => {
            let status = response.status();
            let final_url = response.url().to_string();

            if !status.is_success() {
                return FetchResult::HttpError {
                    status_code: status.as_u16(),
                };
            }

            match response.text().await {
                Ok(body) => FetchResult::Success {
                    final_url,
                    body,
                },
                Err(e) => FetchResult::NetworkError {
                    error: e.to_string(),
                },
            }
        }
        Err(e) => FetchResult::NetworkError {
            error: classify_transport_error(&e),
        },
    }
}

/// Downloads a resource and returns its raw bytes
///
/// # Returns
///
/// * `Ok(Vec<u8>)` - Response body
/// * `Err(ScraperError::HttpStatus)` - Non-2xx response
/// * `Err(ScraperError::Http)` - Transport error
pub async fn fetch_bytes(client: &Client, url: &str) -> Result<Vec<u8>, ScraperError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| ScraperError::Http {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScraperError::HttpStatus {
            url: url.to_string(),
            status_code: status.as_u16(),
        });
    }

    let bytes = response.bytes().await.map_err(|source| ScraperError::Http {
        url: url.to_string(),
        source,
    })?;

    Ok(bytes.to_vec())
}

fn classify_transport_error(e: &reqwest::Error) -> String {
    if e.is_connect() {
        format!("Connection failed: {}", e)
    } else if e.is_redirect() {
        format!("Redirect error: {}", e)
    } else {
        e.to_string()
    }
}
