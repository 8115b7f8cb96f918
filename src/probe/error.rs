//! Probe failure taxonomy

use thiserror::Error;

use crate::fetch::ErrorType;
use crate::inference::InferenceError;

/// Why a probe produced no schema.
///
/// Every variant is an expected outcome that the caller renders, together
/// with [`ProbeError::hint`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProbeError {
    /// Bad URL or empty sample; never retried
    #[error("Validation error: {0}")]
    Validation(String),

    /// No response was ever received, after all retries
    #[error("Network error ({error_type}) after {attempts} attempt(s): {message}")]
    Network {
        error_type: ErrorType,
        message: String,
        attempts: u32,
    },

    /// A response arrived with a non-2xx status; never retried
    #[error("HTTP error: {status}")]
    Http {
        status: u16,
        status_text: Option<String>,
    },

    /// Response body or pasted sample is not JSON
    #[error("Invalid JSON: {0}")]
    Parse(String),

    /// Valid JSON, but no non-empty record array was found
    #[error("Could not infer schema: no non-empty array of records found")]
    SchemaInference,
}

impl ProbeError {
    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            ProbeError::Validation(_) => "VALIDATION_ERROR",
            ProbeError::Network { error_type, .. } => error_type.as_str(),
            ProbeError::Http { .. } => "HTTP_ERROR",
            ProbeError::Parse(_) => "PARSE_ERROR",
            ProbeError::SchemaInference => "SCHEMA_INFERENCE_FAILED",
        }
    }

    /// Received HTTP status, `0` for network failures
    pub fn status(&self) -> Option<u16> {
        match self {
            ProbeError::Http { status, .. } => Some(*status),
            ProbeError::Network { .. } => Some(0),
            _ => None,
        }
    }

    /// Human-readable suggestion for the user
    pub fn hint(&self) -> &'static str {
        match self {
            ProbeError::Validation(_) => {
                "Provide an absolute http(s) URL, or paste a non-empty JSON sample."
            }
            ProbeError::Network {
                error_type: ErrorType::Timeout,
                ..
            } => "The server did not respond in time. Try again later or increase the timeout.",
            ProbeError::Network { .. } => {
                "The host could not be reached. Check the URL and your network connection."
            }
            ProbeError::Http { status, .. } => http_hint(*status),
            ProbeError::Parse(_) => {
                "The response is not valid JSON. Paste a sample response manually instead."
            }
            ProbeError::SchemaInference => {
                "No array of records was found. Point the URL at a list endpoint or paste a sample containing an array."
            }
        }
    }
}

/// Hint for a received non-2xx status
pub fn http_hint(status: u16) -> &'static str {
    match status {
        401 => "Authentication failed. Check the Authorization header or API key.",
        403 => "Access denied. The credentials do not have permission for this resource.",
        404 => "Endpoint not found. Check the URL path.",
        429 => "Rate limit exceeded. Wait before trying again.",
        500..=599 => "The server encountered an error. Try again later.",
        _ => "The API returned an unexpected status. Check the request and try again.",
    }
}

impl From<InferenceError> for ProbeError {
    fn from(e: InferenceError) -> Self {
        match e {
            InferenceError::EmptySample => ProbeError::Validation(e.to_string()),
            InferenceError::JsonParse(msg) => ProbeError::Parse(msg),
            InferenceError::UnknownType(_) => ProbeError::Validation(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_hints_by_band() {
        assert!(http_hint(401).contains("Authentication"));
        assert!(http_hint(403).contains("permission"));
        assert!(http_hint(404).contains("not found"));
        assert!(http_hint(429).contains("Rate limit"));
        assert!(http_hint(503).contains("server encountered an error"));
        assert!(http_hint(418).contains("unexpected status"));
    }

    #[test]
    fn test_codes() {
        let err = ProbeError::Network {
            error_type: ErrorType::NetworkError,
            message: "refused".to_string(),
            attempts: 3,
        };
        assert_eq!(err.code(), "NETWORK_ERROR");
        assert_eq!(err.status(), Some(0));
        assert_eq!(ProbeError::SchemaInference.code(), "SCHEMA_INFERENCE_FAILED");
        assert_eq!(ProbeError::Http { status: 500, status_text: None }.status(), Some(500));
    }

    #[test]
    fn test_from_inference_error() {
        assert!(matches!(
            ProbeError::from(InferenceError::EmptySample),
            ProbeError::Validation(_)
        ));
        assert!(matches!(
            ProbeError::from(InferenceError::JsonParse("eof".to_string())),
            ProbeError::Parse(_)
        ));
    }
}
