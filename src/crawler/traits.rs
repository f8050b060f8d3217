//! Collaborator traits used by the crawl engine
//!
//! The engine only talks to the network, the robots rules and the HTML
//! parser through these seams, so each can be replaced independently.

use crate::{FetchError, MirrorError};
use url::Url;

/// Retrieves the body of a page
#[allow(async_fn_in_trait)]
pub trait PageFetcher {
    /// Fetches `url` and returns its raw text
    ///
    /// Non-success statuses and network failures are errors.
    async fn fetch(&mut self, url: &Url) -> Result<String, FetchError>;
}

/// Decides whether a URL may be fetched at all
#[allow(async_fn_in_trait)]
pub trait CrawlPolicy {
    /// Returns true if fetching `url` is permitted
    async fn may_fetch(&mut self, url: &Url) -> bool;
}

/// Finds hyperlink targets in page content
pub trait LinkExtractor {
    /// Returns every anchor target in `content`, in document order
    ///
    /// Targets may be absolute or relative to `base_url`; the engine resolves
    /// them against the page before filtering.
    fn extract_links(&self, content: &str, base_url: &Url) -> Result<Vec<String>, MirrorError>;
}
