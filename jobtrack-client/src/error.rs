//! Error types for the job store client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the remote job store
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never got a response (connection refused, DNS, timeout...)
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// The store answered with a non-2xx status
    #[error("HTTP error! status: {status}{}", format_body(.message))]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Response body, if any
        message: String,
    },

    /// A 2xx response whose body was not the expected JSON
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// The configured base URL cannot carry a path
    #[error("Invalid store URL: {0}")]
    InvalidUrl(String),
}

fn format_body(message: &str) -> String {
    let message = message.trim();
    if message.is_empty() {
        String::new()
    } else {
        format!(" ({})", message)
    }
}

impl ClientError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// HTTP status of the failed call, when the store answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            Self::RequestFailed(err) => err.status().map(|s| s.as_u16()),
            Self::ParseError(_) | Self::InvalidUrl(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = ClientError::api_error(500, "");
        assert_eq!(err.to_string(), "HTTP error! status: 500");

        let err = ClientError::api_error(404, "{\"error\":\"Job not found\"}\n");
        assert_eq!(
            err.to_string(),
            "HTTP error! status: 404 ({\"error\":\"Job not found\"})"
        );
    }

    #[test]
    fn test_status() {
        let err = ClientError::api_error(503, "down");
        assert_eq!(err.status(), Some(503));

        let err = ClientError::ParseError("bad json".to_string());
        assert_eq!(err.status(), None);
    }
}
