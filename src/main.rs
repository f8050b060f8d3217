//! Site-Mirror main entry point
//!
//! This is the command-line interface for the Site-Mirror page mirror.

use anyhow::Context;
use clap::Parser;
use site_mirror::config::{load_config_with_hash, validate, validate_seed_url, Config};
use site_mirror::crawler::HttpCrawler;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::Dispatch;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, EnvFilter};
use url::Url;

/// Site-Mirror: a polite same-site page mirror
///
/// Site-Mirror starts from a seed URL, follows links that stay on the same
/// host, and saves every page it retrieves under an output directory. It
/// respects robots.txt and waits between requests.
#[derive(Parser, Debug)]
#[command(name = "site-mirror")]
#[command(version)]
#[command(about = "A polite same-site page mirror", long_about = None)]
struct Cli {
    /// URL to start crawling from
    #[arg(value_name = "SEED_URL")]
    seed: String,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Maximum link depth from the seed
    #[arg(long)]
    max_depth: Option<u32>,

    /// Seconds to wait before every request
    #[arg(long, value_name = "SECONDS")]
    delay: Option<f64>,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECONDS")]
    timeout: Option<f64>,

    /// Directory mirrored pages are written under
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<String>,

    /// User-Agent string, also matched against robots.txt
    #[arg(long, value_name = "IDENTITY")]
    user_agent: Option<String>,

    /// File that receives a copy of the log
    #[arg(long, value_name = "FILE")]
    log_file: Option<String>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be crawled without actually crawling
    #[arg(long)]
    dry_run: bool,
}

impl Cli {
    /// Applies command-line overrides on top of file or default configuration
    fn apply_overrides(&self, config: &mut Config) {
        if let Some(max_depth) = self.max_depth {
            config.crawler.max_depth = max_depth;
        }
        if let Some(delay) = self.delay {
            config.crawler.delay_seconds = delay;
        }
        if let Some(timeout) = self.timeout {
            config.crawler.timeout_seconds = timeout;
        }
        if let Some(dir) = &self.output_dir {
            config.output.base_directory = dir.clone();
        }
        if let Some(identity) = &self.user_agent {
            config.user_agent.client_identity = identity.clone();
        }
        if let Some(log_file) = &self.log_file {
            config.output.log_file = log_file.clone();
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (mut config, config_hash) = match &cli.config {
        Some(path) => {
            let (config, hash) = load_config_with_hash(path).with_context(|| {
                format!("Failed to load configuration from {}", path.display())
            })?;
            (config, Some(hash))
        }
        None => (Config::default(), None),
    };
    cli.apply_overrides(&mut config);
    validate(&config).context("Invalid configuration")?;

    let seed = validate_seed_url(&cli.seed)?;

    if cli.dry_run {
        handle_dry_run(&config, &seed);
        return Ok(());
    }

    // Installed on this thread only; the runtime is single-threaded
    let dispatch = setup_logging(cli.verbose, cli.quiet, Path::new(&config.output.log_file))?;
    let _logging = tracing::dispatcher::set_default(&dispatch);

    match (&cli.config, &config_hash) {
        (Some(path), Some(hash)) => tracing::info!(
            "Configuration loaded from {} (hash: {})",
            path.display(),
            hash
        ),
        _ => tracing::info!("Using default configuration"),
    }

    handle_crawl(&config, seed).await
}

/// Builds the logging dispatcher: console plus an append-mode log file
fn setup_logging(verbose: u8, quiet: bool, log_file: &Path) -> anyhow::Result<Dispatch> {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("site_mirror=info,warn"),
            1 => EnvFilter::new("site_mirror=debug,info"),
            2 => EnvFilter::new("site_mirror=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .with_context(|| format!("Failed to open log file {}", log_file.display()))?;

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        );

    Ok(Dispatch::new(subscriber))
}

/// Handles the --dry-run mode: shows the effective configuration
fn handle_dry_run(config: &Config, seed: &Url) {
    println!("=== Site-Mirror Dry Run ===\n");

    println!("Seed: {}", seed);

    println!("\nCrawler Configuration:");
    println!("  Max depth: {}", config.crawler.max_depth);
    println!("  Delay: {}s", config.crawler.delay_seconds);
    println!("  Timeout: {}s", config.crawler.timeout_seconds);

    println!("\nUser Agent:");
    println!("  Identity: {}", config.user_agent.client_identity);

    println!("\nOutput:");
    println!("  Base directory: {}", config.output.base_directory);
    println!("  Log file: {}", config.output.log_file);

    println!("\n✓ Configuration is valid");
}

/// Handles the main crawl operation
///
/// The crawl runs until it finishes or Ctrl-C arrives. Either way the
/// crawler is shut down afterwards, releasing its connections; pages already
/// written are left in place.
async fn handle_crawl(config: &Config, seed: Url) -> anyhow::Result<()> {
    let mut crawler = HttpCrawler::from_config(config).context("Failed to initialize crawler")?;

    tracing::info!(
        "Starting crawl of {} (max depth {}, delay {}s)",
        seed,
        config.crawler.max_depth,
        config.crawler.delay_seconds
    );

    tokio::select! {
        report = crawler.crawl(seed) => {
            tracing::info!("Crawl completed: {} pages saved", report.pages_saved);
        }
        // An Err from the signal listener disables this branch instead of ending the crawl
        Ok(()) = tokio::signal::ctrl_c() => {
            tracing::info!("Scraping interrupted by user");
        }
    }

    crawler.shutdown();
    Ok(())
}
