//! Robots.txt handling module
//!
//! This module provides functionality for fetching, parsing, and caching robots.txt files.
//! Rules are fetched once per origin and kept for the rest of the run.
//!
//! Checking is fail-open: when robots.txt cannot be retrieved, every path on
//! that origin is allowed and a warning is logged.

mod parser;

pub use parser::{product_token, ParsedRobots};

use crate::crawler::CrawlPolicy;
use crate::url::origin_key;
use crate::MirrorError;
use reqwest::{Client, StatusCode};
use std::collections::HashMap;
use url::Url;

/// Fetches robots.txt from the given location
///
/// A 404 means the site publishes no rules and yields an allow-all result.
///
/// # Returns
///
/// * `Ok(ParsedRobots)` - Successfully fetched and parsed robots.txt
/// * `Err(MirrorError::Robots)` - Network failure or any other non-success status
pub async fn fetch_robots(client: &Client, robots_url: &str) -> Result<ParsedRobots, MirrorError> {
    let robots_error = |message: String| MirrorError::Robots {
        url: robots_url.to_string(),
        message,
    };

    let response = client
        .get(robots_url)
        .send()
        .await
        .map_err(|e| robots_error(e.to_string()))?;

    let status = response.status();
    if status == StatusCode::NOT_FOUND {
        tracing::debug!("No robots.txt at {}", robots_url);
        return Ok(ParsedRobots::allow_all());
    }

    if !status.is_success() {
        return Err(robots_error(format!("HTTP {}", status)));
    }

    let body = response
        .text()
        .await
        .map_err(|e| robots_error(e.to_string()))?;

    Ok(ParsedRobots::from_content(&body))
}

/// Answers "may this URL be fetched?" for the crawler's identity
///
/// Holds one parsed rule set per `scheme://authority`, fetched lazily on the
/// first query for that origin and never invalidated.
pub struct DirectiveChecker {
    client: Client,
    user_agent: String,
    cache: HashMap<String, ParsedRobots>,
}

impl DirectiveChecker {
    /// Creates a checker that fetches with `client` and matches rules for `client_identity`
    pub fn new(client: Client, client_identity: &str) -> Self {
        Self {
            client,
            user_agent: product_token(client_identity).to_string(),
            cache: HashMap::new(),
        }
    }

    /// Returns the product token used for rule matching
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Number of origins whose rules are cached
    pub fn cached_origins(&self) -> usize {
        self.cache.len()
    }

    async fn load_rules(&mut self, origin: &str) {
        if self.cache.contains_key(origin) {
            tracing::trace!("Using cached robots.txt for {}", origin);
            return;
        }

        let robots_url = format!("{}/robots.txt", origin);
        tracing::debug!("Fetching robots.txt: {}", robots_url);

        let robots = match fetch_robots(&self.client, &robots_url).await {
            Ok(robots) => robots,
            Err(e) => {
                tracing::warn!("Error checking robots.txt for {}: {}", origin, e);
                ParsedRobots::allow_all()
            }
        };

        self.cache.insert(origin.to_string(), robots);
    }
}

impl CrawlPolicy for DirectiveChecker {
    async fn may_fetch(&mut self, url: &Url) -> bool {
        let Some(origin) = origin_key(url) else {
            return true;
        };

        self.load_rules(&origin).await;

        self.cache
            .get(&origin)
            .map(|robots| robots.is_allowed(url.as_str(), &self.user_agent))
            .unwrap_or(true)
    }
}
