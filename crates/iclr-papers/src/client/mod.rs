//! OpenReview API client.
//!
//! Provides an async HTTP client with:
//! - Browser-like default headers (the public API expects them)
//! - Optional retry middleware with exponential backoff (disabled by default)
//! - Fixed pacing delay before each request

use std::time::Duration;

use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, ORIGIN, REFERER, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};

use crate::config::{Config, api};
use crate::error::{ClientError, ClientResult};
use crate::models::NotesPage;

/// OpenReview API client.
#[derive(Clone)]
pub struct OpenReviewClient {
    /// HTTP client with middleware.
    client: ClientWithMiddleware,

    /// Notes listing URL.
    notes_url: String,

    /// Venue filter.
    venue: String,

    /// Delay slept before each request.
    page_delay: Duration,
}

impl OpenReviewClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(api::ACCEPT));
        headers.insert(USER_AGENT, HeaderValue::from_static(api::USER_AGENT));
        headers.insert(REFERER, HeaderValue::from_static(api::REFERER));
        headers.insert(ORIGIN, HeaderValue::from_static(api::ORIGIN));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .gzip(true)
            .build()?;

        let retry_policy = ExponentialBackoff::builder()
            .retry_bounds(Duration::from_secs(1), Duration::from_secs(30))
            .build_with_max_retries(config.max_retries);

        let client = ClientBuilder::new(client)
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        Ok(Self {
            client,
            notes_url: config.notes_url(),
            venue: config.venue.clone(),
            page_delay: config.page_delay,
        })
    }

    /// Venue this client lists papers for.
    #[must_use]
    pub fn venue(&self) -> &str {
        &self.venue
    }

    /// Fetch one page of accepted-paper notes.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, non-success status or an undecodable body.
    pub async fn fetch_page(&self, offset: u64, limit: u32) -> ClientResult<NotesPage> {
        let params = vec![
            ("content.venue".to_string(), self.venue.clone()),
            ("details".to_string(), api::DETAILS.to_string()),
            ("domain".to_string(), api::DOMAIN.to_string()),
            ("invitation".to_string(), api::INVITATION.to_string()),
            ("limit".to_string(), limit.to_string()),
            ("offset".to_string(), offset.to_string()),
        ];

        self.get(&self.notes_url, &params).await
    }

    /// Make a GET request.
    async fn get<T>(&self, url: &str, params: &[(String, String)]) -> ClientResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        if !self.page_delay.is_zero() {
            tokio::time::sleep(self.page_delay).await;
        }

        tracing::debug!(url, ?params, "GET");
        let response = self.client.get(url).query(params).send().await?;

        let response = self.handle_response(response).await?;
        let body = response.text().await?;

        serde_json::from_str(&body).map_err(ClientError::from)
    }

    /// Handle API response status codes.
    async fn handle_response(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<reqwest::Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        match status.as_u16() {
            429 => {
                let retry_after = response
                    .headers()
                    .get("Retry-After")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(60);

                Err(ClientError::rate_limited(retry_after))
            }
            404 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::not_found(text))
            }
            400 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::bad_request(text))
            }
            500..=599 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::server(status.as_u16(), text))
            }
            _ => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::UnexpectedStatus { status: status.as_u16(), message: text })
            }
        }
    }
}

impl std::fmt::Debug for OpenReviewClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenReviewClient")
            .field("notes_url", &self.notes_url)
            .field("venue", &self.venue)
            .finish()
    }
}
