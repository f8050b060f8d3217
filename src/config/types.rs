use serde::Deserialize;
use std::time::Duration;

/// Main configuration structure for Site-Mirror
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub crawler: CrawlerConfig,
    #[serde(rename = "user-agent", default)]
    pub user_agent: UserAgentConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Recursion budget for the seed URL
    #[serde(rename = "max-depth")]
    pub max_depth: u32,

    /// Pause before every page fetch (seconds)
    #[serde(rename = "delay-seconds")]
    pub delay_seconds: f64,

    /// Per-request timeout (seconds)
    #[serde(rename = "timeout-seconds")]
    pub timeout_seconds: f64,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            max_depth: 3,
            delay_seconds: 1.0,
            timeout_seconds: 10.0,
        }
    }
}

impl CrawlerConfig {
    /// Pause applied before each fetch
    ///
    /// Only meaningful on a validated config; invalid values collapse to zero.
    pub fn delay(&self) -> Duration {
        Duration::try_from_secs_f64(self.delay_seconds).unwrap_or_default()
    }

    /// Timeout applied to every HTTP request
    ///
    /// Only meaningful on a validated config; invalid values fall back to ten seconds.
    pub fn timeout(&self) -> Duration {
        Duration::try_from_secs_f64(self.timeout_seconds).unwrap_or(Duration::from_secs(10))
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Identity sent as the User-Agent header and matched against robots.txt groups
    #[serde(rename = "client-identity")]
    pub client_identity: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            client_identity: default_client_identity(),
        }
    }
}

/// Returns the identity used when none is configured, e.g. `SiteMirror/0.1.0`
pub fn default_client_identity() -> String {
    format!("SiteMirror/{}", env!("CARGO_PKG_VERSION"))
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Root directory for mirrored pages
    #[serde(rename = "base-directory")]
    pub base_directory: String,

    /// File that receives a copy of every log line
    #[serde(rename = "log-file")]
    pub log_file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            base_directory: "./scraped_pages".to_string(),
            log_file: "scraper.log".to_string(),
        }
    }
}
