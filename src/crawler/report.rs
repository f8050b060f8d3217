//! Per-run crawl counters

use std::fmt;

/// Counters collected while traversing
///
/// Every URL popped from the traversal lands in exactly one of
/// `pages_visited`, `duplicates_skipped` or `depth_exhausted`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlReport {
    /// URLs that entered the `Visiting` state
    pub pages_visited: u64,

    /// Requests actually sent for pages (robots.txt excluded)
    pub fetch_attempts: u64,

    /// Pages written to storage
    pub pages_saved: u64,

    /// Pages skipped because robots.txt disallowed them
    pub policy_skips: u64,

    /// Fetches that ended in a network error or non-success status
    pub fetch_failures: u64,

    /// Pages fetched but not written
    pub save_failures: u64,

    /// Pages whose content could not be scanned for links
    pub parse_failures: u64,

    /// Same-origin http(s) links scheduled for traversal
    pub links_followed: u64,

    /// Frames dropped because their URL was already submitted
    pub duplicates_skipped: u64,

    /// Frames dropped because the depth budget was spent
    pub depth_exhausted: u64,
}

impl CrawlReport {
    /// Total number of per-page failures of any kind
    pub fn total_failures(&self) -> u64 {
        self.fetch_failures + self.save_failures + self.parse_failures
    }
}

impl fmt::Display for CrawlReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} pages visited, {} fetched, {} saved, {} disallowed, {} failed ({} fetch, {} save, {} parse), {} links followed",
            self.pages_visited,
            self.fetch_attempts,
            self.pages_saved,
            self.policy_skips,
            self.total_failures(),
            self.fetch_failures,
            self.save_failures,
            self.parse_failures,
            self.links_followed
        )
    }
}
