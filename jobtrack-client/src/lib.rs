//! Jobtrack HTTP Client
//!
//! A small, type-safe HTTP client for the remote job store: the REST service
//! of record for tracked job applications.
//!
//! The store exposes four endpoints under `/jobs` (list, create, update,
//! delete). [`JobStoreClient`] wraps them, and the [`JobStore`] trait lets the
//! controller run against this client or any other implementation.
//!
//! # Example
//!
//! ```no_run
//! use jobtrack_client::JobStoreClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = JobStoreClient::new("http://localhost:8080");
//!
//!     for job in client.list_jobs().await? {
//!         println!("{} at {}", job.title, job.company);
//!     }
//!     Ok(())
//! }
//! ```

pub mod error;
mod jobs;
mod store;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use store::JobStore;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

/// HTTP client for the remote job store API
#[derive(Debug, Clone)]
pub struct JobStoreClient {
    /// Base URL of the store (e.g., "http://localhost:8080")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl JobStoreClient {
    /// Create a new job store client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the job store (e.g., "http://localhost:8080")
    ///
    /// # Example
    /// ```
    /// use jobtrack_client::JobStoreClient;
    ///
    /// let client = JobStoreClient::new("http://localhost:8080");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a new job store client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Example
    /// ```
    /// use jobtrack_client::JobStoreClient;
    /// use reqwest::{Client, Url};
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = JobStoreClient::with_client("http://localhost:8080", http_client);
    /// ```
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Get the base URL of the job store
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of `segments` under the base URL, each segment percent-encoded
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", self.base_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Check the status code and deserialize the JSON body of a 2xx response
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let response = Self::check_status(response).await?;
        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| ClientError::ParseError(e.to_string()))
    }

    /// Check the status code of a response whose body is ignored
    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<()> {
        Self::check_status(response).await.map(|_| ())
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::debug!("Job store returned {}: {}", status, error_text);
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        Ok(response)
    }
}
