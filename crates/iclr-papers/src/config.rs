//! Configuration for the fetcher and analyzer.

use std::time::Duration;

/// OpenReview API constants.
pub mod api {
    use std::time::Duration;

    /// Base URL for the OpenReview v2 API.
    pub const BASE_URL: &str = "https://api2.openreview.net";

    /// Notes listing endpoint (relative to the base URL).
    pub const NOTES_PATH: &str = "/notes";

    /// Venue label attached to accepted papers.
    pub const VENUE: &str = "ICLR 2026";

    /// Conference domain.
    pub const DOMAIN: &str = "ICLR.cc/2026/Conference";

    /// Submission invitation id.
    pub const INVITATION: &str = "ICLR.cc/2026/Conference/-/Submission";

    /// Details requested alongside each note.
    pub const DETAILS: &str = "replyCount,presentation,writable";

    /// Papers per page.
    pub const PAGE_SIZE: u32 = 100;

    /// Request timeout.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Delay slept before each page request.
    pub const PAGE_DELAY: Duration = Duration::from_millis(0);

    /// Accept header sent with every request.
    pub const ACCEPT: &str = "application/json,text/*;q=0.99";

    /// The public API rejects requests that do not look like they come from the site.
    pub const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
                                  AppleWebKit/537.36 (KHTML, like Gecko) Chrome/142.0.0.0 Safari/537.36";

    /// Referer header.
    pub const REFERER: &str = "https://openreview.net/";

    /// Origin header.
    pub const ORIGIN: &str = "https://openreview.net";

    /// Forum page prefix used to build `openreview_url`.
    pub const FORUM_URL: &str = "https://openreview.net/forum?id=";

    /// Attachment prefix used to build `pdf_url`.
    pub const ATTACHMENT_URL: &str = "https://openreview.net/attachment?id=";
}

/// Output locations. These are fixed; only the API endpoint can be overridden.
pub mod output {
    /// JSON list of paper records.
    pub const JSON_PATH: &str = "iclr26_all_papers.json";

    /// CSV table of paper records.
    pub const CSV_PATH: &str = "iclr26_all_papers.csv";

    /// Directory receiving chart images.
    pub const IMAGES_DIR: &str = "images";

    /// Text analysis chart group.
    pub const TEXT_CHART: &str = "deep_analysis_1_text.png";

    /// Keyword analysis chart group.
    pub const KEYWORD_CHART: &str = "deep_analysis_2_keywords.png";

    /// Area analysis chart group.
    pub const AREA_CHART: &str = "deep_analysis_3_areas.png";

    /// Correlation analysis chart group.
    pub const CORRELATION_CHART: &str = "deep_analysis_4_correlation.png";

    /// Overview chart group.
    pub const OVERVIEW_CHART: &str = "iclr26_analysis.png";
}

/// Fetcher configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the OpenReview API (for testing with mock servers).
    pub api_base_url: String,

    /// Venue whose accepted papers are listed.
    pub venue: String,

    /// Papers requested per page.
    pub page_size: u32,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Delay slept before each page request.
    pub page_delay: Duration,

    /// Transient-failure retries per request. Zero aborts on the first failure.
    pub max_retries: u32,
}

impl Config {
    /// Create the production configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            api_base_url: api::BASE_URL.to_string(),
            venue: api::VENUE.to_string(),
            page_size: api::PAGE_SIZE,
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
            page_delay: api::PAGE_DELAY,
            max_retries: 0,
        }
    }

    /// Create a test configuration pointing at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            api_base_url: base_url.trim_end_matches('/').to_string(),
            venue: api::VENUE.to_string(),
            page_size: api::PAGE_SIZE,
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            page_delay: Duration::from_millis(0),
            max_retries: 0,
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Honors `OPENREVIEW_API_URL` for the endpoint and `OPENREVIEW_PAGE_DELAY_MS`
    /// for request pacing.
    ///
    /// # Errors
    ///
    /// Returns error if environment variables are invalid.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns error if `OPENREVIEW_PAGE_DELAY_MS` is not an integer.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = Self::new();
        if let Some(url) = lookup("OPENREVIEW_API_URL") {
            config.api_base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(delay) = lookup("OPENREVIEW_PAGE_DELAY_MS") {
            let millis: u64 = delay
                .parse()
                .map_err(|e| anyhow::anyhow!("OPENREVIEW_PAGE_DELAY_MS must be an integer: {e}"))?;
            config.page_delay = Duration::from_millis(millis);
        }
        Ok(config)
    }

    /// Full URL of the notes listing endpoint.
    #[must_use]
    pub fn notes_url(&self) -> String {
        format!("{}{}", self.api_base_url, api::NOTES_PATH)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.api_base_url, api::BASE_URL);
        assert_eq!(config.page_size, 100);
        assert_eq!(config.max_retries, 0);
    }

    #[test]
    fn test_notes_url() {
        let config = Config::for_testing("http://127.0.0.1:9999/");
        assert_eq!(config.notes_url(), "http://127.0.0.1:9999/notes");
    }

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let pairs: Vec<(String, String)> =
            pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
        move |key| pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
    }

    #[test]
    fn test_from_lookup_without_vars_matches_default() {
        let config = Config::from_lookup(vars(&[])).unwrap();
        assert_eq!(config.api_base_url, api::BASE_URL);
        assert_eq!(config.page_delay, api::PAGE_DELAY);
    }

    #[test]
    fn test_from_lookup_reads_url_and_delay() {
        let config = Config::from_lookup(vars(&[
            ("OPENREVIEW_API_URL", "http://localhost:3000/"),
            ("OPENREVIEW_PAGE_DELAY_MS", "250"),
        ]))
        .unwrap();
        assert_eq!(config.api_base_url, "http://localhost:3000");
        assert_eq!(config.page_delay, Duration::from_millis(250));
    }

    #[test]
    fn test_from_lookup_rejects_bad_delay() {
        let err = Config::from_lookup(vars(&[("OPENREVIEW_PAGE_DELAY_MS", "soon")])).unwrap_err();
        assert!(err.to_string().contains("OPENREVIEW_PAGE_DELAY_MS"));
    }

    #[test]
    fn test_chart_names_are_png() {
        for name in [
            output::TEXT_CHART,
            output::KEYWORD_CHART,
            output::AREA_CHART,
            output::CORRELATION_CHART,
            output::OVERVIEW_CHART,
        ] {
            assert!(name.ends_with(".png"));
        }
    }

    #[test]
    fn test_overview_chart_name() {
        assert_eq!(output::OVERVIEW_CHART, "iclr26_analysis.png");
    }
}
