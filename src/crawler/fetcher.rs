//! HTTP fetcher implementation
//!
//! This module handles all page requests for the crawler, including:
//! - Building the HTTP client with the configured identity and timeout
//! - GET requests to fetch page content
//! - Error classification (network failure vs. non-success status)
//!
//! There is no retry: a failed fetch is reported once and abandoned.

use crate::crawler::{PageFetcher, Pacer};
use crate::FetchError;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Builds an HTTP client with proper configuration
///
/// One client is built per run and shared by the page fetcher and the
/// robots.txt checker, so both reuse the same connection pool.
///
/// # Arguments
///
/// * `client_identity` - Value of the `User-Agent` header on every request
/// * `timeout` - Total time allowed for each request
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use site_mirror::crawler::build_http_client;
///
/// let client = build_http_client("SiteMirror/0.1", Duration::from_secs(10)).unwrap();
/// ```
pub fn build_http_client(client_identity: &str, timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(client_identity)
        .timeout(timeout)
        .connect_timeout(timeout.min(Duration::from_secs(10)))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and returns its body text
///
/// # Error Classification
///
/// | Condition | Result |
/// |-----------|--------|
/// | 2xx | `Ok(body)` |
/// | Any other status | `FetchError::Status` |
/// | Timeout, refused connection, TLS or body read failure | `FetchError::Network` |
pub async fn fetch_url(client: &Client, url: &Url) -> Result<String, FetchError> {
    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|source| FetchError::Network {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status,
        });
    }

    response.text().await.map_err(|source| FetchError::Network {
        url: url.to_string(),
        source,
    })
}

/// Page fetcher that paces every request
pub struct HttpFetcher {
    client: Client,
    pacer: Pacer,
}

impl HttpFetcher {
    /// Creates a fetcher over an existing client
    pub fn new(client: Client, pacer: Pacer) -> Self {
        Self { client, pacer }
    }

    /// Returns the pacer, mostly useful for inspecting how many waits happened
    pub fn pacer(&self) -> &Pacer {
        &self.pacer
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch(&mut self, url: &Url) -> Result<String, FetchError> {
        self.pacer.wait().await;
        tracing::debug!("GET {}", url);
        fetch_url(&self.client, url).await
    }
}
