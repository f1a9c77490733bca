//! Configuration and client tests.
//!
//! Tests actual behavior, not constants.

use std::time::Duration;

use iclr_papers::client::OpenReviewClient;
use iclr_papers::config::Config;

// =============================================================================
// Config Behavior Tests
// =============================================================================

#[test]
fn test_config_defaults_do_not_retry() {
    let config = Config::default();
    assert_eq!(config.max_retries, 0);
    assert!(config.page_delay.is_zero());
    assert_eq!(config.page_size, 100);
}

#[test]
fn test_config_for_testing_trims_slash() {
    let config = Config::for_testing("http://127.0.0.1:9999/");
    assert_eq!(config.notes_url(), "http://127.0.0.1:9999/notes");
}

#[test]
fn test_config_clone_preserves_overrides() {
    let mut config = Config::default();
    config.page_delay = Duration::from_millis(250);
    config.max_retries = 3;
    let cloned = config.clone();
    assert_eq!(cloned.page_delay, Duration::from_millis(250));
    assert_eq!(cloned.max_retries, 3);
}

// =============================================================================
// Client Behavior Tests
// =============================================================================

#[test]
fn test_client_creation_succeeds() {
    let client = OpenReviewClient::new(&Config::default());
    assert!(client.is_ok());
}

#[test]
fn test_client_reports_venue() {
    let client = OpenReviewClient::new(&Config::default()).unwrap();
    assert_eq!(client.venue(), "ICLR 2026");
}

#[test]
fn test_client_debug_shows_endpoint() {
    let client = OpenReviewClient::new(&Config::for_testing("http://localhost:1234")).unwrap();
    let debug = format!("{client:?}");
    assert!(debug.contains("http://localhost:1234/notes"));
    assert!(debug.contains("ICLR 2026"));
}

#[tokio::test]
async fn test_client_page_delay_is_applied() {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/notes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"notes": []})))
        .mount(&mock_server)
        .await;

    let mut config = Config::for_testing(&mock_server.uri());
    config.page_delay = Duration::from_millis(50);
    let client = OpenReviewClient::new(&config).unwrap();

    let start = std::time::Instant::now();
    let page = client.fetch_page(0, 10).await.unwrap();
    assert!(page.is_empty());
    assert!(start.elapsed() >= Duration::from_millis(50));
}
