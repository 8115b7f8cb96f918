//! Error types for schema inference

use thiserror::Error;

/// Errors that can occur before inference runs.
///
/// Failing to find a record array is not an error; `infer_schema` reports it
/// as `None`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InferenceError {
    /// Sample text was empty or whitespace
    #[error("Sample is empty")]
    EmptySample,

    /// Sample text is not valid JSON
    #[error("JSON parsing error: {0}")]
    JsonParse(String),

    /// A type string contained an unknown tag
    #[error("Unknown type tag: {0}")]
    UnknownType(String),
}

impl From<serde_json::Error> for InferenceError {
    fn from(e: serde_json::Error) -> Self {
        InferenceError::JsonParse(e.to_string())
    }
}
