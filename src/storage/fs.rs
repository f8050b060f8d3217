//! Filesystem page sink

use crate::storage::{map_to_path, PageSink, StorageError, StorageResult};
use std::path::{Path, PathBuf};
use url::Url;

/// Writes pages under a base directory using the `map_to_path` layout
#[derive(Debug, Clone)]
pub struct FileSink {
    base_dir: PathBuf,
}

impl FileSink {
    /// Creates a sink rooted at `base_dir`
    ///
    /// A relative directory is resolved against the current working directory
    /// once, here, so later changes of directory do not move the output.
    pub fn new(base_dir: impl AsRef<Path>) -> StorageResult<Self> {
        let base_dir = base_dir.as_ref();
        let base_dir = if base_dir.is_absolute() {
            base_dir.to_path_buf()
        } else {
            std::env::current_dir()
                .map_err(|source| StorageError::Io {
                    path: base_dir.to_path_buf(),
                    source,
                })?
                .join(base_dir)
        };

        Ok(Self { base_dir })
    }

    /// Returns the absolute root of the mirror
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Returns the file a URL would be written to
    pub fn path_for(&self, url: &Url) -> StorageResult<PathBuf> {
        map_to_path(&self.base_dir, url)
    }
}

impl PageSink for FileSink {
    async fn persist(&mut self, url: &Url, content: &str) -> StorageResult<PathBuf> {
        let path = self.path_for(url)?;

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| StorageError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }

        tokio::fs::write(&path, content)
            .await
            .map_err(|source| StorageError::Io {
                path: path.clone(),
                source,
            })?;

        Ok(path)
    }
}
