//! TMap error types

use thiserror::Error;

/// Errors that can occur during TMap operations
#[derive(Debug, Error)]
pub enum TmapError {
    /// Connection to the TMap service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request to TMap failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse a TMap response
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded, retry after {retry_after_secs:?} seconds")]
    RateLimitExceeded {
        /// Seconds to wait before retrying (if provided by API)
        retry_after_secs: Option<u64>,
    },

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl TmapError {
    /// Returns true if this error is retryable
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_)
                | Self::RequestFailed(_)
                | Self::Timeout { .. }
                | Self::RateLimitExceeded { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_errors() {
        assert!(TmapError::ConnectionFailed("test".to_string()).is_retryable());
        assert!(TmapError::RequestFailed("test".to_string()).is_retryable());
        assert!(TmapError::Timeout { timeout_secs: 10 }.is_retryable());
        assert!(
            TmapError::RateLimitExceeded {
                retry_after_secs: Some(30)
            }
            .is_retryable()
        );
    }

    #[test]
    fn test_non_retryable_errors() {
        assert!(!TmapError::ParseError("test".to_string()).is_retryable());
        assert!(!TmapError::ConfigurationError("test".to_string()).is_retryable());
    }

    #[test]
    fn test_error_display() {
        let err = TmapError::RateLimitExceeded {
            retry_after_secs: Some(30),
        };
        assert!(err.to_string().contains("30"));

        let err = TmapError::Timeout { timeout_secs: 10 };
        assert!(err.to_string().contains("10"));
    }
}
