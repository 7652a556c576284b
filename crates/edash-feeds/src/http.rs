//! Single-attempt outbound fetches with a fixed identity and timeout.

use std::time::Duration;

use reqwest::header::ACCEPT;
use reqwest::{Client, Url};

use crate::error::FeedError;

/// Thin wrapper over `reqwest` shared by both pipelines.
///
/// Each call issues exactly one request. Timeouts and non-2xx statuses come
/// back as [`FeedError::Http`]; nothing is retried.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// # Errors
    ///
    /// Returns [`FeedError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(user_agent: &str, timeout_secs: u64) -> Result<Self, FeedError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(timeout_secs.min(10)))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Fetches `url` and returns the body decoded as UTF-8 (invalid bytes replaced).
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Http`] on network failure, timeout, or a non-2xx status.
    pub async fn fetch_text(&self, url: &Url, accept: &str) -> Result<String, FeedError> {
        let response = self
            .client
            .get(url.clone())
            .header(ACCEPT, accept)
            .send()
            .await?
            .error_for_status()?;
        let bytes = response.bytes().await?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Fetches `url` with `Accept: application/json` and parses the body.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Http`] on network failure, timeout, or a non-2xx
    /// status, and [`FeedError::Deserialize`] if the body is not valid JSON.
    pub async fn fetch_json(&self, url: &Url) -> Result<serde_json::Value, FeedError> {
        let body = self.fetch_text(url, "application/json").await?;
        serde_json::from_str(&body).map_err(|e| FeedError::Deserialize {
            context: url.to_string(),
            source: e,
        })
    }
}

/// Parses a configured endpoint into a [`Url`].
///
/// # Errors
///
/// Returns [`FeedError::InvalidUrl`] when `raw` is not an absolute URL.
pub fn parse_endpoint(raw: &str) -> Result<Url, FeedError> {
    Url::parse(raw).map_err(|e| FeedError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_endpoint_accepts_absolute_url() {
        let url = parse_endpoint("https://feeds.example.nl/documenten.rss").expect("valid url");
        assert_eq!(url.host_str(), Some("feeds.example.nl"));
    }

    #[test]
    fn parse_endpoint_rejects_relative_path() {
        let err = parse_endpoint("/documenten.rss").unwrap_err();
        assert!(matches!(err, FeedError::InvalidUrl { .. }));
    }
}
