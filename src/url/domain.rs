use url::Url;

/// Extracts the authority (`host[:port]`) from a URL
///
/// The port is only present when the URL carries a non-default one, since
/// the `url` crate drops `:80` for http and `:443` for https at parse time.
///
/// # Returns
///
/// * `Some(String)` - The authority
/// * `None` - If the URL has no host
///
/// # Examples
///
/// ```
/// use url::Url;
/// use site_mirror::url::extract_authority;
///
/// let url = Url::parse("https://example.com/path").unwrap();
/// assert_eq!(extract_authority(&url), Some("example.com".to_string()));
///
/// let url = Url::parse("http://EXAMPLE.com:8080/path").unwrap();
/// assert_eq!(extract_authority(&url), Some("example.com:8080".to_string()));
/// ```
pub fn extract_authority(url: &Url) -> Option<String> {
    let host = url.host_str()?;
    match url.port() {
        Some(port) => Some(format!("{}:{}", host, port)),
        None => Some(host.to_string()),
    }
}

/// Returns the `scheme://authority` key used to cache per-site robots.txt rules
pub fn origin_key(url: &Url) -> Option<String> {
    extract_authority(url).map(|authority| format!("{}://{}", url.scheme(), authority))
}
