//! CLI error types

use std::path::PathBuf;

use thiserror::Error;

use crate::probe::ProbeError;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to read {0:?}: {1}")]
    FileReadError(PathBuf, String),

    #[error("Failed to write {0:?}: {1}")]
    FileWriteError(PathBuf, String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error(transparent)]
    Probe(#[from] ProbeError),
}

impl CliError {
    /// Message for stderr, with a hint for probe failures
    pub fn user_message(&self) -> String {
        match self {
            CliError::Probe(e) => format!("{}\n\nHint: {}", e, e.hint()),
            other => other.to_string(),
        }
    }
}
