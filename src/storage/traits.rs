//! Storage traits and error types
//!
//! This module defines the trait interface for page sinks and
//! associated error types.

use std::path::PathBuf;
use thiserror::Error;
use url::Url;

/// Errors that can occur during storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot derive a storage path from URL: {0}")]
    InvalidUrl(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Destination for retrieved page content
///
/// The crawler hands every successfully fetched page to a sink. A failed
/// write is reported back so the crawler can log it; it never stops link
/// discovery for that page.
#[allow(async_fn_in_trait)]
pub trait PageSink {
    /// Stores `content` for `url`, replacing anything previously stored there
    ///
    /// # Returns
    ///
    /// The location the page was written to
    async fn persist(&mut self, url: &Url, content: &str) -> StorageResult<PathBuf>;
}
