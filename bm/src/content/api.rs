//! Twilio Content API client implementation
//!
//! Implements the ContentSource trait against `GET /v1/Content` with
//! basic-auth credentials (API key / API secret).

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use tracing::{debug, warn};

use super::{ContentListResponse, ContentSource, Template};
use crate::config::ContentConfig;
use crate::error::MessageError;

/// Content API client
pub struct ContentApiClient {
    base_url: String,
    username: String,
    password: String,
    http: Client,
}

impl ContentApiClient {
    /// Create a client with explicit credentials and no request timeout
    pub fn new(base_url: impl Into<String>, username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            username: username.into(),
            password: password.into(),
            http: Client::new(),
        }
    }

    /// Create a client from configuration, reading credentials from the environment
    pub fn from_config(config: &ContentConfig) -> Result<Self, MessageError> {
        debug!(base_url = %config.base_url, timeout_ms = ?config.timeout_ms, "from_config: called");
        let (username, password) = config.credentials()?;

        let mut builder = Client::builder();
        if let Some(timeout_ms) = config.timeout_ms {
            builder = builder.timeout(Duration::from_millis(timeout_ms));
        }
        let http = builder
            .build()
            .map_err(|e| MessageError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: config.base_url.clone(),
            username,
            password,
            http,
        })
    }

    fn listing_url(&self) -> String {
        format!("{}/v1/Content", self.base_url.trim_end_matches('/'))
    }

    async fn fetch_listing(&self) -> Result<ContentListResponse, reqwest::Error> {
        self.http
            .get(self.listing_url())
            .header(CONTENT_TYPE, "application/json")
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await?
            .error_for_status()?
            .json::<ContentListResponse>()
            .await
    }
}

#[async_trait]
impl ContentSource for ContentApiClient {
    async fn list_templates(&self) -> Result<Vec<Template>, MessageError> {
        debug!(url = %self.listing_url(), "list_templates: called");
        match self.fetch_listing().await {
            Ok(listing) => {
                debug!(count = listing.contents.len(), "list_templates: success");
                Ok(listing.contents)
            }
            Err(e) => {
                warn!(error = %e, status = ?e.status(), "list_templates: fetch failed");
                Err(MessageError::FetchFailed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_url() {
        let client = ContentApiClient::new("https://content.twilio.com", "SK1", "secret");
        assert_eq!(client.listing_url(), "https://content.twilio.com/v1/Content");
    }

    #[test]
    fn test_listing_url_trims_trailing_slash() {
        let client = ContentApiClient::new("http://127.0.0.1:9000/", "SK1", "secret");
        assert_eq!(client.listing_url(), "http://127.0.0.1:9000/v1/Content");
    }

    #[tokio::test]
    async fn test_unreachable_host_is_fetch_failed() {
        // Port 9 (discard) on localhost refuses connections
        let client = ContentApiClient::new("http://127.0.0.1:9", "SK1", "secret");
        let err = client.list_templates().await.unwrap_err();
        assert!(matches!(err, MessageError::FetchFailed));
    }
}
