//! Configuration module
//!
//! Handles CLI configuration: where the job store lives and how to reach it.

use std::time::Duration;

use anyhow::{Context, Result};
use jobtrack_client::JobStoreClient;

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the job store
    pub store_url: String,

    /// Per-request timeout; `None` waits indefinitely
    pub request_timeout: Option<Duration>,
}

impl Config {
    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        if self.store_url.is_empty() {
            anyhow::bail!("store_url cannot be empty");
        }

        if !self.store_url.starts_with("http://") && !self.store_url.starts_with("https://") {
            anyhow::bail!("store_url must start with http:// or https://");
        }

        if self.request_timeout.is_some_and(|timeout| timeout.is_zero()) {
            anyhow::bail!("timeout must be greater than 0");
        }

        Ok(())
    }

    /// Build a job store client from this configuration
    pub fn client(&self) -> Result<JobStoreClient> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("Failed to build HTTP client")?;

        Ok(JobStoreClient::with_client(&self.store_url, http))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_url: "http://localhost:8080".to_string(),
            request_timeout: None,
        }
    }
}
