//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and test
//! the full crawl cycle end-to-end, including the files left on disk.

use site_mirror::config::Config;
use site_mirror::crawler::{crawl, HttpCrawler};
use site_mirror::MirrorError;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tempfile::TempDir;
use url::Url;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration writing under `output_dir`, with no delay
fn create_test_config(output_dir: &Path, max_depth: u32) -> Config {
    let mut config = Config::default();
    config.crawler.max_depth = max_depth;
    config.crawler.delay_seconds = 0.0;
    config.crawler.timeout_seconds = 5.0;
    config.user_agent.client_identity = "TestBot/1.0".to_string();
    config.output.base_directory = output_dir.display().to_string();
    config
}

/// Directory the mock server's pages are mirrored into
fn site_dir(output_dir: &Path, server: &MockServer) -> PathBuf {
    let url = Url::parse(&server.uri()).expect("Failed to parse mock server URI");
    let host = url.host_str().expect("Mock server has no host");
    let port = url.port().expect("Mock server has no port");
    output_dir.join(format!("{}_{}", host, port))
}

fn seed(server: &MockServer) -> Url {
    Url::parse(&format!("{}/", server.uri())).expect("Failed to build seed URL")
}

fn html_page(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(format!("<html><body>{}</body></html>", body))
        .insert_header("content-type", "text/html")
}

#[tokio::test]
async fn test_same_origin_crawl_end_to_end() {
    let site = MockServer::start().await;
    let elsewhere = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_page(&format!(
            r#"<a href="/p1">Page 1</a><a href="{}/">Elsewhere</a>"#,
            elsewhere.uri()
        )))
        .expect(1)
        .mount(&site)
        .await;

    Mock::given(method("GET"))
        .and(path("/p1"))
        .respond_with(html_page(r#"<a href="/p2">Too deep</a>"#))
        .expect(1)
        .mount(&site)
        .await;

    // Out of the depth budget
    Mock::given(method("GET"))
        .and(path("/p2"))
        .respond_with(html_page("deep"))
        .expect(0)
        .mount(&site)
        .await;

    // A different authority is never contacted, not even for robots.txt
    Mock::given(method("GET"))
        .respond_with(html_page("other site"))
        .expect(0)
        .mount(&elsewhere)
        .await;

    let output = TempDir::new().expect("Failed to create temp dir");
    let config = create_test_config(output.path(), 1);

    let report = crawl(&config, seed(&site)).await.expect("Crawl failed");

    assert_eq!(report.fetch_attempts, 2);
    assert_eq!(report.pages_saved, 2);

    let dir = site_dir(output.path(), &site);
    let index = std::fs::read_to_string(dir.join("index.html")).expect("index.html missing");
    assert!(index.contains("Page 1"));
    assert!(dir.join("p1.html").exists());
    assert!(!dir.join("p2.html").exists());

    let entries = std::fs::read_dir(output.path())
        .expect("Failed to list output")
        .count();
    assert_eq!(entries, 1, "only the seed's authority should be mirrored");
}

#[tokio::test]
async fn test_robots_txt_respect() {
    let site = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string("User-agent: *\nDisallow: /admin"))
        .expect(1)
        .mount(&site)
        .await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_page(
            r#"<a href="/allowed">Allowed</a><a href="/admin">Admin</a>"#,
        ))
        .mount(&site)
        .await;

    Mock::given(method("GET"))
        .and(path("/allowed"))
        .respond_with(html_page("Allowed content"))
        .expect(1)
        .mount(&site)
        .await;

    Mock::given(method("GET"))
        .and(path("/admin"))
        .respond_with(html_page("Admin content"))
        .expect(0) // Should never be called
        .mount(&site)
        .await;

    let output = TempDir::new().expect("Failed to create temp dir");
    let config = create_test_config(output.path(), 2);

    let report = crawl(&config, seed(&site)).await.expect("Crawl failed");

    assert_eq!(report.policy_skips, 1);
    assert_eq!(report.pages_saved, 2);

    let dir = site_dir(output.path(), &site);
    assert!(dir.join("allowed.html").exists());
    assert!(!dir.join("admin.html").exists());
}

#[tokio::test]
async fn test_robots_txt_failure_is_fail_open() {
    let site = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&site)
        .await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_page(r#"<a href="/next">Next</a>"#))
        .expect(1)
        .mount(&site)
        .await;

    Mock::given(method("GET"))
        .and(path("/next"))
        .respond_with(html_page("next"))
        .expect(1)
        .mount(&site)
        .await;

    let output = TempDir::new().expect("Failed to create temp dir");
    let config = create_test_config(output.path(), 3);

    let report = crawl(&config, seed(&site)).await.expect("Crawl failed");

    assert_eq!(report.policy_skips, 0);
    assert_eq!(report.pages_saved, 2);
}

#[tokio::test]
async fn test_crawl_with_depth_limit() {
    let site = MockServer::start().await;

    // Create a chain: / -> level1 -> level2 -> level3
    for (from, to) in [("/", "/level1"), ("/level1", "/level2"), ("/level2", "/level3")] {
        Mock::given(method("GET"))
            .and(path(from))
            .respond_with(html_page(&format!(r#"<a href="{}">next</a>"#, to)))
            .expect(1)
            .mount(&site)
            .await;
    }

    // Level3 should not be crawled with max_depth=2
    Mock::given(method("GET"))
        .and(path("/level3"))
        .respond_with(html_page("Level 3"))
        .expect(0)
        .mount(&site)
        .await;

    let output = TempDir::new().expect("Failed to create temp dir");
    let config = create_test_config(output.path(), 2);

    let report = crawl(&config, seed(&site)).await.expect("Crawl failed");

    assert_eq!(report.pages_saved, 3);
    assert_eq!(report.depth_exhausted, 1);
}

#[tokio::test]
async fn test_failed_pages_are_contained() {
    let site = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_page(
            r#"<a href="/gone">Gone</a><a href="/error">Error</a><a href="/fine">Fine</a>"#,
        ))
        .mount(&site)
        .await;

    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&site)
        .await;

    Mock::given(method("GET"))
        .and(path("/error"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1) // No retry
        .mount(&site)
        .await;

    Mock::given(method("GET"))
        .and(path("/fine"))
        .respond_with(html_page("fine"))
        .expect(1)
        .mount(&site)
        .await;

    let output = TempDir::new().expect("Failed to create temp dir");
    let config = create_test_config(output.path(), 1);

    let report = crawl(&config, seed(&site)).await.expect("Crawl failed");

    assert_eq!(report.fetch_attempts, 4);
    assert_eq!(report.fetch_failures, 2);
    assert_eq!(report.pages_saved, 2);

    let dir = site_dir(output.path(), &site);
    assert!(dir.join("fine.html").exists());
    assert!(!dir.join("gone.html").exists());
    assert!(!dir.join("error.html").exists());
}

#[tokio::test]
async fn test_query_strings_map_to_flat_files() {
    let site = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_page(
            r#"<a href="/list?page=2&amp;sort=asc">Page 2</a><a href="/docs/">Docs</a>"#,
        ))
        .mount(&site)
        .await;

    Mock::given(method("GET"))
        .and(path("/list"))
        .respond_with(html_page("list"))
        .mount(&site)
        .await;

    Mock::given(method("GET"))
        .and(path("/docs/"))
        .respond_with(html_page("docs"))
        .mount(&site)
        .await;

    let output = TempDir::new().expect("Failed to create temp dir");
    let config = create_test_config(output.path(), 1);

    crawl(&config, seed(&site)).await.expect("Crawl failed");

    let dir = site_dir(output.path(), &site);
    assert!(dir.join("list_page_2_sort_asc.html").exists());
    assert!(dir.join("docs").join("index.html").exists());
}

#[tokio::test]
async fn test_identity_and_delay_apply_to_every_page() {
    let site = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(header("user-agent", "TestBot/1.0"))
        .respond_with(html_page(r#"<a href="/a">A</a><a href="/b">B</a>"#))
        .expect(1)
        .mount(&site)
        .await;

    for p in ["/a", "/b"] {
        Mock::given(method("GET"))
            .and(path(p))
            .and(header("user-agent", "TestBot/1.0"))
            .respond_with(html_page(p))
            .expect(1)
            .mount(&site)
            .await;
    }

    let output = TempDir::new().expect("Failed to create temp dir");
    let mut config = create_test_config(output.path(), 1);
    config.crawler.delay_seconds = 0.1;

    let start = Instant::now();
    let report = crawl(&config, seed(&site)).await.expect("Crawl failed");

    assert_eq!(report.pages_saved, 3);
    assert!(start.elapsed() >= Duration::from_millis(300));
}

#[tokio::test]
async fn test_crawler_reuse_skips_visited_seed() {
    let site = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_page("home"))
        .expect(1)
        .mount(&site)
        .await;

    let output = TempDir::new().expect("Failed to create temp dir");
    let config = create_test_config(output.path(), 1);

    let mut crawler = HttpCrawler::from_config(&config).expect("Failed to create crawler");
    let first = crawler.crawl(seed(&site)).await;
    let second = crawler.crawl(seed(&site)).await;
    crawler.shutdown();

    assert_eq!(first.pages_saved, 1);
    assert_eq!(second.fetch_attempts, 0);
    assert_eq!(second.duplicates_skipped, 1);
}

#[tokio::test]
async fn test_invalid_config_is_rejected_before_crawling() {
    let site = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(html_page("home"))
        .expect(0)
        .mount(&site)
        .await;

    let output = TempDir::new().expect("Failed to create temp dir");
    let mut config = create_test_config(output.path(), 1);
    config.crawler.timeout_seconds = 0.0;

    let result = crawl(&config, seed(&site)).await;

    assert!(matches!(result, Err(MirrorError::Config(_))));
}
