//! Remote URL blocklist loader.
//!
//! Fetches line-oriented blocklists over HTTP(S). There is no retry and no
//! offline cache: a failed request is reported to the caller as is.

use std::time::Duration;

use reqwest::Client;

use crate::config::HttpSettings;

/// Error type for remote blocklist loading operations.
#[derive(Debug, thiserror::Error)]
pub enum RemoteLoadError {
    /// HTTP request failed with a non-success status code.
    #[error("HTTP request failed for {url}: status {status}")]
    HttpStatus {
        /// URL that was requested.
        url: String,
        /// HTTP status code returned.
        status: u16,
    },

    /// Network error during HTTP request.
    #[error("network error fetching {url}: {source}")]
    Network {
        /// URL that was requested.
        url: String,
        /// Underlying reqwest error.
        #[source]
        source: reqwest::Error,
    },

    /// Timeout fetching the remote URL.
    #[error("timeout fetching {url}")]
    Timeout {
        /// URL that timed out.
        url: String,
    },

    /// Failed to create HTTP client.
    #[error("failed to create HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

/// Loads blocklists from remote URLs.
#[derive(Debug, Clone)]
pub struct RemoteLoader {
    client: Client,
}

impl RemoteLoader {
    /// Create a loader with the timeout and user agent from `settings`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(settings: &HttpSettings) -> Result<Self, RemoteLoadError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .user_agent(settings.user_agent.as_str())
            .gzip(true)
            .build()
            .map_err(RemoteLoadError::ClientBuild)?;

        Ok(Self { client })
    }

    /// Fetch the body of `url` as text.
    ///
    /// # Errors
    ///
    /// Returns a [`RemoteLoadError`] if:
    /// - The HTTP request fails ([`RemoteLoadError::Network`])
    /// - The server returns a non-success status ([`RemoteLoadError::HttpStatus`])
    /// - The request times out ([`RemoteLoadError::Timeout`])
    pub async fn fetch(&self, url: &str) -> Result<String, RemoteLoadError> {
        let response = self.client.get(url).send().await.map_err(|err| {
            if err.is_timeout() {
                RemoteLoadError::Timeout {
                    url: url.to_string(),
                }
            } else {
                RemoteLoadError::Network {
                    url: url.to_string(),
                    source: err,
                }
            }
        })?;

        if !response.status().is_success() {
            return Err(RemoteLoadError::HttpStatus {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        let content = response
            .text()
            .await
            .map_err(|err| RemoteLoadError::Network {
                url: url.to_string(),
                source: err,
            })?;

        tracing::debug!(url = %url, bytes = content.len(), "fetched remote resource");
        Ok(content)
    }

    /// Fetch a blocklist and split it into raw lines.
    ///
    /// # Errors
    ///
    /// Same as [`fetch`](Self::fetch).
    pub async fn load(&self, url: &str) -> Result<Vec<String>, RemoteLoadError> {
        let content = self.fetch(url).await?;
        Ok(content.lines().map(str::to_owned).collect())
    }
}
