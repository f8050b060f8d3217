//! Crawler module for page fetching and traversal
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching with a fixed pause before every request
//! - HTML parsing and link extraction
//! - The depth-first, visited-set-guarded crawl engine
//! - The per-run crawl report

mod coordinator;
mod fetcher;
mod pacer;
mod parser;
mod report;
mod traits;

pub use coordinator::{CrawlFrame, Crawler, HttpCrawler};
pub use fetcher::{build_http_client, fetch_url, HttpFetcher};
pub use pacer::Pacer;
pub use parser::{extract_links, HtmlLinkExtractor};
pub use report::CrawlReport;
pub use traits::{CrawlPolicy, LinkExtractor, PageFetcher};

use crate::config::{validate, Config};
use url::Url;

/// Runs a complete crawl from a single seed
///
/// This is the main entry point for a crawl. It will:
/// 1. Validate `config`
/// 2. Build the HTTP client, robots checker and file sink from it
/// 3. Traverse from `seed` up to `config.crawler.max_depth`
/// 4. Release the HTTP connection pool
///
/// # Returns
///
/// * `Ok(CrawlReport)` - Crawl ran to completion (individual pages may have failed)
/// * `Err(MirrorError)` - The configuration is invalid or the crawler could not be constructed
pub async fn crawl(config: &Config, seed: Url) -> crate::Result<CrawlReport> {
    validate(config)?;
    let mut crawler = HttpCrawler::from_config(config)?;
    let report = crawler.crawl(seed).await;
    crawler.shutdown();
    Ok(report)
}
