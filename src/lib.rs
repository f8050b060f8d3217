//! Site-Mirror: a polite same-site page mirror
//!
//! This crate implements a depth-bounded crawler that follows same-authority
//! links from a seed URL, respects robots.txt, paces its requests, and writes
//! every retrieved page into a deterministic directory layout.

pub mod config;
pub mod crawler;
pub mod robots;
pub mod state;
pub mod storage;
pub mod url;

use thiserror::Error;

/// Main error type for Site-Mirror operations
#[derive(Debug, Error)]
pub enum MirrorError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Storage error: {0}")]
    Storage(#[from] storage::StorageError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("HTML parse error for {url}: {message}")]
    HtmlParse { url: String, message: String },

    #[error("Robots.txt unavailable for {url}: {message}")]
    Robots { url: String, message: String },

    #[error("Invalid visit transition for {url}: {from:?} -> {to:?}")]
    InvalidTransition {
        url: String,
        from: Option<state::VisitState>,
        to: state::VisitState,
    },
}

/// Reasons a single page could not be retrieved
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("URL disallowed by robots.txt: {url}")]
    PolicyDenied { url: String },

    #[error("Network error for {url}: {source}")]
    Network { url: String, source: reqwest::Error },

    #[error("HTTP {status} for {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
}

impl FetchError {
    /// Returns the URL the failed fetch was aimed at
    pub fn url(&self) -> &str {
        match self {
            Self::PolicyDenied { url } | Self::Network { url, .. } | Self::Status { url, .. } => {
                url
            }
        }
    }

    /// Returns true if the failure came from the crawl policy rather than the network
    pub fn is_policy_denied(&self) -> bool {
        matches!(self, Self::PolicyDenied { .. })
    }
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Site-Mirror operations
pub type Result<T> = std::result::Result<T, MirrorError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use crate::config::Config;
pub use crate::crawler::{CrawlReport, Crawler, HttpCrawler};
pub use crate::state::{VisitState, VisitedSet};
pub use crate::storage::map_to_path;
pub use crate::url::{extract_authority, is_same_origin};
