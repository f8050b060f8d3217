//! URL handling module for Site-Mirror
//!
//! This module provides authority extraction and the filters that decide
//! which discovered links the crawl may follow.
//!
//! URLs are compared exactly as the `url` crate serializes them. No further
//! normalization is applied, so `http://example.com/a` and
//! `http://example.com/a/` are two distinct pages.

mod domain;

pub use domain::{extract_authority, origin_key};

use url::Url;

/// Returns true if the URL uses a scheme the crawler can fetch (`http` or `https`)
pub fn is_crawlable_scheme(url: &Url) -> bool {
    matches!(url.scheme(), "http" | "https")
}

/// Returns true if `candidate` shares the authority of `current`
///
/// Only host and port are compared; `http` and `https` links to the same
/// authority both count as same-origin.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use site_mirror::url::is_same_origin;
///
/// let page = Url::parse("http://same.example/").unwrap();
/// assert!(is_same_origin(&page, &Url::parse("https://same.example/b").unwrap()));
/// assert!(!is_same_origin(&page, &Url::parse("http://other.example/c").unwrap()));
/// ```
pub fn is_same_origin(current: &Url, candidate: &Url) -> bool {
    match (extract_authority(current), extract_authority(candidate)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Returns true if the crawler should recurse from `current` into `candidate`
///
/// A link is followed when it stays on the same authority and uses a
/// crawlable scheme.
pub fn should_follow(current: &Url, candidate: &Url) -> bool {
    is_crawlable_scheme(candidate) && is_same_origin(current, candidate)
}
