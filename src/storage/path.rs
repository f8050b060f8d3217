//! URL to file path mapping
//!
//! The layout is `<base>/<authority>/<path>`, with a handful of characters
//! flattened to `_` so ports and query strings survive as file names. The
//! mapping is deterministic but not injective: `/page?x=1` and `/page_x_1`
//! land on the same file.

use crate::storage::{StorageError, StorageResult};
use crate::url::extract_authority;
use std::path::{Path, PathBuf};
use url::Url;

/// Maps a URL to the file its content is stored in
///
/// # Path Rules
///
/// Chosen from the URL's path alone:
///
/// 1. Empty or `/` becomes `/index.html`
/// 2. A trailing `/` gets `index.html` appended
/// 3. A final segment with no extension gets `.html` appended
///
/// A `?query` is inserted before any suffix added above, so `/?x=1` maps to
/// `/index_x_1.html` and `/page.php?id=1` to `/page.php_id_1`. Then `:` in the
/// authority and `?`, `&`, `=` in the path become `_`.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use url::Url;
/// use site_mirror::map_to_path;
///
/// let base = Path::new("/srv/mirror");
/// let url = Url::parse("https://ex.com/page?x=1").unwrap();
/// assert_eq!(
///     map_to_path(base, &url).unwrap(),
///     Path::new("/srv/mirror/ex.com/page_x_1.html")
/// );
/// ```
pub fn map_to_path(base_dir: &Path, url: &Url) -> StorageResult<PathBuf> {
    let authority =
        extract_authority(url).ok_or_else(|| StorageError::InvalidUrl(url.to_string()))?;

    let path = page_name(url.path(), url.query());

    let mut full = base_dir.join(sanitize_authority(&authority));
    for segment in sanitize_path(&path).split('/').filter(|s| !s.is_empty()) {
        full.push(segment);
    }
    Ok(full)
}

/// Applies the index/extension rules to `path`, splicing in `?query`
fn page_name(path: &str, query: Option<&str>) -> String {
    let (stem, suffix) = if path.is_empty() || path == "/" {
        ("/index".to_string(), ".html")
    } else if path.ends_with('/') {
        (format!("{}index", path), ".html")
    } else if !has_extension(last_segment(path)) {
        (path.to_string(), ".html")
    } else {
        (path.to_string(), "")
    };

    match query {
        Some(query) => format!("{}?{}{}", stem, query, suffix),
        None => format!("{}{}", stem, suffix),
    }
}

fn last_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Leading dots do not count, so `.profile` has no extension but `page.` does
fn has_extension(segment: &str) -> bool {
    segment.trim_start_matches('.').contains('.')
}

/// Replaces `:` so a port becomes part of a directory name
pub fn sanitize_authority(authority: &str) -> String {
    authority.replace(':', "_")
}

/// Replaces the query-string characters `?`, `&` and `=`
pub fn sanitize_path(path: &str) -> String {
    path.replace(['?', '&', '='], "_")
}
