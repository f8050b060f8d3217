//! Robots.txt parser implementation
//!
//! This module provides functionality for parsing robots.txt content using the robotstxt crate.

use robotstxt::DefaultMatcher;

/// Parsed robots.txt data
///
/// This is a wrapper around the robotstxt crate's types, providing a simplified
/// interface for checking if URLs are allowed.
#[derive(Debug, Clone)]
pub struct ParsedRobots {
    /// Raw robots.txt content (empty string means allow all)
    content: String,
    /// Whether to allow all (true = allow all, false = parse content)
    allow_all: bool,
}

impl ParsedRobots {
    /// Creates a new ParsedRobots from raw robots.txt content
    pub fn from_content(content: &str) -> Self {
        Self {
            content: content.to_string(),
            allow_all: false,
        }
    }

    /// Creates a permissive ParsedRobots that allows everything
    ///
    /// This is used as the default when robots.txt cannot be fetched or parsed.
    pub fn allow_all() -> Self {
        Self {
            content: String::new(),
            allow_all: true,
        }
    }

    /// Checks if a URL is allowed for the given user agent
    ///
    /// # Arguments
    ///
    /// * `url` - The URL or URL path to check (e.g., "/page.html")
    /// * `user_agent` - The product token the rules are matched against
    ///
    /// # Returns
    ///
    /// * `true` - If the URL is allowed
    /// * `false` - If the URL is disallowed
    pub fn is_allowed(&self, url: &str, user_agent: &str) -> bool {
        if self.allow_all || self.content.is_empty() {
            return true;
        }

        // Parse and check on-demand
        let mut matcher = DefaultMatcher::default();
        matcher.one_agent_allowed_by_robots(&self.content, user_agent, url)
    }
}

/// Extracts the product token robots.txt groups are matched against
///
/// `SiteMirror/0.1 (+https://example.com)` yields `SiteMirror`;
/// `Mozilla/5.0 (Windows NT 10.0)` yields `Mozilla`.
///
/// # Examples
///
/// ```
/// use site_mirror::robots::product_token;
///
/// assert_eq!(product_token("SiteMirror/0.1"), "SiteMirror");
/// assert_eq!(product_token("plainbot"), "plainbot");
/// ```
pub fn product_token(client_identity: &str) -> &str {
    let identity = client_identity.trim();
    let end = identity
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-' || c == '_'))
        .unwrap_or(identity.len());
    if end == 0 {
        identity
    } else {
        &identity[..end]
    }
}
