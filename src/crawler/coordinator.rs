//! Crawler coordinator - main crawl orchestration logic
//!
//! This module contains the traversal that coordinates all aspects of a
//! crawl:
//! - Guarding against revisits with the visited set
//! - Enforcing the depth budget
//! - Consulting robots.txt before every fetch
//! - Persisting fetched pages and following same-origin links
//!
//! The traversal is depth-first. Instead of recursing, it keeps an explicit
//! stack of frames; a page's children are pushed in reverse document order
//! so they are popped, and fully explored, in document order. That is the
//! exact visitation order of the recursive formulation, without tying stack
//! usage to site depth.
//!
//! Failures are contained per URL. A page that cannot be fetched, saved or
//! parsed is logged and its remaining work skipped; the rest of the crawl
//! carries on.

use crate::config::Config;
use crate::crawler::{
    build_http_client, CrawlPolicy, CrawlReport, HtmlLinkExtractor, HttpFetcher, LinkExtractor,
    Pacer, PageFetcher,
};
use crate::robots::DirectiveChecker;
use crate::state::VisitedSet;
use crate::storage::{FileSink, PageSink};
use crate::url::should_follow;
use crate::FetchError;
use url::Url;

/// One traversal step: a URL and the depth budget left when reaching it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlFrame {
    pub url: Url,
    pub remaining_depth: i64,
}

impl CrawlFrame {
    pub fn new(url: Url, remaining_depth: i64) -> Self {
        Self {
            url,
            remaining_depth,
        }
    }
}

/// Main crawl engine
///
/// Owns its collaborators and the visited set for the run. Calling
/// [`Crawler::traverse`] more than once on the same crawler shares the
/// visited set, so a URL is never fetched twice by one crawler.
pub struct Crawler<F, P, S, L> {
    fetcher: F,
    policy: P,
    sink: S,
    extractor: L,
    visited: VisitedSet,
    max_depth: u32,
}

/// The production crawler: reqwest fetcher, robots.txt policy, file sink, scraper extractor
pub type HttpCrawler = Crawler<HttpFetcher, DirectiveChecker, FileSink, HtmlLinkExtractor>;

impl HttpCrawler {
    /// Creates a crawler from configuration
    ///
    /// # Returns
    ///
    /// * `Ok(HttpCrawler)` - Ready to crawl
    /// * `Err(MirrorError)` - The HTTP client or output directory could not be set up
    pub fn from_config(config: &Config) -> crate::Result<Self> {
        let identity = &config.user_agent.client_identity;
        let client = build_http_client(identity, config.crawler.timeout())?;

        let fetcher = HttpFetcher::new(client.clone(), Pacer::new(config.crawler.delay()));
        let policy = DirectiveChecker::new(client, identity);
        let sink = FileSink::new(&config.output.base_directory)?;

        tracing::debug!(
            "Crawler ready: identity {:?}, output {}",
            identity,
            sink.base_dir().display()
        );

        Ok(Crawler::new(
            fetcher,
            policy,
            sink,
            HtmlLinkExtractor,
            config.crawler.max_depth,
        ))
    }

    /// Consumes the crawler and releases its HTTP connection pool
    ///
    /// Pages already written stay on disk.
    pub fn shutdown(self) {
        tracing::info!(
            "Releasing HTTP connections ({} URLs visited)",
            self.visited.len()
        );
        drop(self);
    }
}

impl<F, P, S, L> Crawler<F, P, S, L>
where
    F: PageFetcher,
    P: CrawlPolicy,
    S: PageSink,
    L: LinkExtractor,
{
    /// Creates a crawler from its collaborators
    pub fn new(fetcher: F, policy: P, sink: S, extractor: L, max_depth: u32) -> Self {
        Self {
            fetcher,
            policy,
            sink,
            extractor,
            visited: VisitedSet::new(),
            max_depth,
        }
    }

    /// Crawls from `seed` with the configured depth budget
    pub async fn crawl(&mut self, seed: Url) -> CrawlReport {
        let depth = i64::from(self.max_depth);
        self.traverse(seed, depth).await
    }

    /// Traverses from `url` with `remaining_depth` levels of links left
    ///
    /// # Behavior
    ///
    /// For every frame, in depth-first order:
    ///
    /// | Condition | Action |
    /// |-----------|--------|
    /// | `remaining_depth < 0` | Nothing |
    /// | URL already submitted | Nothing |
    /// | Disallowed by robots.txt | Mark visited, log, stop |
    /// | Fetch fails | Mark visited, log, stop |
    /// | Fetch succeeds | Save, extract links, push same-origin http(s) links with `remaining_depth - 1` |
    ///
    /// Never fails: per-page errors are logged and counted in the report.
    pub async fn traverse(&mut self, url: Url, remaining_depth: i64) -> CrawlReport {
        let mut report = CrawlReport::default();
        let mut stack = vec![CrawlFrame::new(url, remaining_depth)];

        while let Some(frame) = stack.pop() {
            let children = self.visit(frame, &mut report).await;
            stack.extend(children.into_iter().rev());
        }

        tracing::info!("Crawl finished: {}", report);
        report
    }

    /// Runs one frame and returns the frames to explore next, in document order
    async fn visit(&mut self, frame: CrawlFrame, report: &mut CrawlReport) -> Vec<CrawlFrame> {
        if frame.remaining_depth < 0 {
            report.depth_exhausted += 1;
            return Vec::new();
        }

        // Recorded before any network activity
        if !self.visited.begin(&frame.url) {
            tracing::trace!("Already visited: {}", frame.url);
            report.duplicates_skipped += 1;
            return Vec::new();
        }

        report.pages_visited += 1;
        tracing::info!("Scraping (depth {}): {}", frame.remaining_depth, frame.url);

        let children = self.process(&frame, report).await;

        if let Err(e) = self.visited.finish(&frame.url) {
            tracing::error!("{}", e);
        }

        children
    }

    async fn process(&mut self, frame: &CrawlFrame, report: &mut CrawlReport) -> Vec<CrawlFrame> {
        let url = &frame.url;

        let content = match self.fetch_page(url, report).await {
            Some(content) => content,
            None => return Vec::new(),
        };

        match self.sink.persist(url, &content).await {
            Ok(path) => {
                report.pages_saved += 1;
                tracing::info!("Saved: {} -> {}", url, path.display());
            }
            Err(e) => {
                report.save_failures += 1;
                tracing::error!("Failed to save {}: {}", url, e);
            }
        }

        let candidates = match self.extractor.extract_links(&content, url) {
            Ok(links) => links,
            Err(e) => {
                report.parse_failures += 1;
                tracing::error!("Error parsing {}: {}", url, e);
                return Vec::new();
            }
        };

        let mut children = Vec::new();
        for candidate in candidates {
            // No-op for absolute targets
            let next = match url.join(&candidate) {
                Ok(next) => next,
                Err(e) => {
                    tracing::debug!("Skipping unresolvable link {:?} on {}: {}", candidate, url, e);
                    continue;
                }
            };

            if should_follow(url, &next) {
                children.push(CrawlFrame::new(next, frame.remaining_depth - 1));
            } else {
                tracing::trace!("Not following {} from {}", next, url);
            }
        }

        report.links_followed += children.len() as u64;
        children
    }

    /// Checks policy, then fetches; any failure is logged here and becomes `None`
    async fn fetch_page(&mut self, url: &Url, report: &mut CrawlReport) -> Option<String> {
        let result = if self.policy.may_fetch(url).await {
            report.fetch_attempts += 1;
            self.fetcher.fetch(url).await
        } else {
            Err(FetchError::PolicyDenied {
                url: url.to_string(),
            })
        };

        match result {
            Ok(content) => Some(content),
            Err(e) if e.is_policy_denied() => {
                report.policy_skips += 1;
                tracing::warn!("robots.txt disallows scraping: {}", e.url());
                None
            }
            Err(e) => {
                report.fetch_failures += 1;
                tracing::error!("Failed to download {}: {}", url, e);
                None
            }
        }
    }

    /// Returns the visited set of this run
    pub fn visited(&self) -> &VisitedSet {
        &self.visited
    }

    /// Returns the depth budget used by [`Crawler::crawl`]
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}
