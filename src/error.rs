//! Error types for upstream API calls

use thiserror::Error;

/// Failure modes of a single upstream request. None of these are retried or
/// recovered locally; they propagate to the tool boundary unmodified.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx HTTP response, carrying the status and raw body text
    #[error("API Error: {status} - {body}")]
    Upstream { status: u16, body: String },

    /// Connection, DNS, or timeout failure below the HTTP layer
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Success status but the body is not valid JSON
    #[error("Invalid JSON in response: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_error_mentions_status_and_body() {
        let err = ApiError::Upstream {
            status: 500,
            body: "rate limited".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("500"));
        assert!(msg.contains("rate limited"));
    }
}
