use crate::config::types::{Config, CrawlerConfig, OutputConfig, UserAgentConfig};
use crate::{ConfigError, ConfigResult};
use std::time::Duration;
use url::Url;

/// Validates the entire configuration
///
/// Called by the loader, and again by the binary after command-line
/// overrides have been applied.
pub fn validate(config: &Config) -> ConfigResult<()> {
    validate_crawler_config(&config.crawler)?;
    validate_user_agent_config(&config.user_agent)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Parses and checks the seed URL given on the command line
///
/// The seed must be absolute and use `http` or `https`; its authority becomes
/// the only one the crawl will follow.
pub fn validate_seed_url(seed: &str) -> ConfigResult<Url> {
    let url = Url::parse(seed)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid seed URL '{}': {}", seed, e)))?;

    if !crate::url::is_crawlable_scheme(&url) {
        return Err(ConfigError::InvalidUrl(format!(
            "Seed URL '{}' must use http or https",
            seed
        )));
    }

    if url.host_str().is_none() {
        return Err(ConfigError::InvalidUrl(format!(
            "Seed URL '{}' has no host",
            seed
        )));
    }

    Ok(url)
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> ConfigResult<()> {
    // max_depth >= 0 is always true for u32, so no check needed

    if !config.delay_seconds.is_finite() || config.delay_seconds < 0.0 {
        return Err(ConfigError::Validation(format!(
            "delay_seconds must be a finite value >= 0, got {}",
            config.delay_seconds
        )));
    }

    if !config.timeout_seconds.is_finite() || config.timeout_seconds <= 0.0 {
        return Err(ConfigError::Validation(format!(
            "timeout_seconds must be a finite value > 0, got {}",
            config.timeout_seconds
        )));
    }

    for (name, seconds) in [
        ("delay_seconds", config.delay_seconds),
        ("timeout_seconds", config.timeout_seconds),
    ] {
        if Duration::try_from_secs_f64(seconds).is_err() {
            return Err(ConfigError::Validation(format!(
                "{} is too large to represent as a duration, got {}",
                name, seconds
            )));
        }
    }

    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> ConfigResult<()> {
    if config.client_identity.trim().is_empty() {
        return Err(ConfigError::Validation(
            "client_identity cannot be empty".to_string(),
        ));
    }

    // Must be usable as an HTTP header value
    if config.client_identity.chars().any(|c| c.is_control()) {
        return Err(ConfigError::Validation(format!(
            "client_identity must not contain control characters, got {:?}",
            config.client_identity
        )));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> ConfigResult<()> {
    if config.base_directory.is_empty() {
        return Err(ConfigError::Validation(
            "base_directory cannot be empty".to_string(),
        ));
    }

    if config.log_file.is_empty() {
        return Err(ConfigError::Validation(
            "log_file cannot be empty".to_string(),
        ));
    }

    Ok(())
}
