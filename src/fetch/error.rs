//! Error types for HTTP transports

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Classified reason a fetch never received a response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorType {
    /// Connection refused, DNS failure, reset and similar
    NetworkError,
    /// The attempt exceeded its timeout
    Timeout,
    /// The request could not be built
    RequestError,
}

impl ErrorType {
    /// Wire code, e.g. `NETWORK_ERROR`
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::NetworkError => "NETWORK_ERROR",
            ErrorType::Timeout => "TIMEOUT",
            ErrorType::RequestError => "REQUEST_ERROR",
        }
    }
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure of a single attempt before any response was received
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// Could not reach the server
    #[error("Connection failed: {0}")]
    Connection(String),

    /// Attempt timed out
    #[error("Request timed out after {0} ms")]
    Timeout(u64),

    /// Request could not be constructed (bad URL, invalid header)
    #[error("Invalid request: {0}")]
    Request(String),
}

impl TransportError {
    /// Classified error code
    pub fn error_type(&self) -> ErrorType {
        match self {
            TransportError::Connection(_) => ErrorType::NetworkError,
            TransportError::Timeout(_) => ErrorType::Timeout,
            TransportError::Request(_) => ErrorType::RequestError,
        }
    }

    /// Check if another attempt could succeed
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            TransportError::Connection(_) | TransportError::Timeout(_)
        )
    }
}
