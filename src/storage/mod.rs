//! Storage module for persisting mirrored pages
//!
//! This module handles everything that touches the output directory:
//! - Mapping a URL to a deterministic file path
//! - Writing page content to that path, creating directories on demand
//! - The `PageSink` trait the crawler persists through

mod fs;
mod path;
mod traits;

pub use fs::FileSink;
pub use path::{map_to_path, sanitize_authority, sanitize_path};
pub use traits::{PageSink, StorageError, StorageResult};
