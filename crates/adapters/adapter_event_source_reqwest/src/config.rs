//! Event source configuration.

use std::time::Duration;

use serde::Deserialize;

use crate::error::SourceError;
use crate::source::HttpEventSource;

/// Public mock API serving the event catalog.
pub const DEFAULT_BASE_URL: &str = "https://68148b33225ff1af16292eee.mockapi.io/api/v1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for the HTTP event source.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HttpSourceConfig {
    /// Base URL of the API; events live under `{base_url}/events`.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for HttpSourceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl HttpSourceConfig {
    /// Build an [`HttpEventSource`] from this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::InvalidBaseUrl`] when the base URL is not an
    /// http(s) URL, or [`SourceError::Request`] if the HTTP client cannot be
    /// created.
    pub fn build(self) -> Result<HttpEventSource, SourceError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(SourceError::InvalidBaseUrl(self.base_url));
        }
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(self.timeout_secs))
            .build()?;
        Ok(HttpEventSource::new(client, self.base_url))
    }
}
