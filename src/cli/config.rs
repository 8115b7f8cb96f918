//! CLI configuration: optional TOML file plus flag parsing helpers

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::CliError;
use crate::fetch::FetchConfig;
use crate::inference::InferenceConfig;

/// Contents of a `--config` file
///
/// ```toml
/// [fetch]
/// maxRetries = 2
/// initialDelayMs = 500
/// timeoutMs = 5000
///
/// [inference]
/// sampleSize = 10
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    pub fetch: FetchConfig,
    pub inference: InferenceConfig,
}

impl ProbeConfig {
    /// Parse a TOML document
    pub fn from_toml(content: &str) -> Result<Self, CliError> {
        toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()))
    }

    /// Load from a file, or defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self, CliError> {
        match path {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .map_err(|e| CliError::FileReadError(path.to_path_buf(), e.to_string()))?;
                Self::from_toml(&content)
            }
            None => Ok(Self::default()),
        }
    }
}

/// Parse `Name: value` header flags
pub fn parse_headers(raw: &[String]) -> Result<BTreeMap<String, String>, CliError> {
    raw.iter()
        .map(|h| {
            let (name, value) = h.split_once(':').ok_or_else(|| {
                CliError::InvalidArgument(format!("Header '{}' must look like 'Name: value'", h))
            })?;
            let name = name.trim();
            if name.is_empty() {
                return Err(CliError::InvalidArgument(format!(
                    "Header '{}' has an empty name",
                    h
                )));
            }
            Ok((name.to_string(), value.trim().to_string()))
        })
        .collect()
}

/// Parse `key=value` query parameter flags
pub fn parse_query_params(raw: &[String]) -> Result<BTreeMap<String, String>, CliError> {
    raw.iter()
        .map(|q| {
            let (key, value) = q.split_once('=').ok_or_else(|| {
                CliError::InvalidArgument(format!("Query parameter '{}' must look like 'key=value'", q))
            })?;
            Ok((key.to_string(), value.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[fetch]\nmaxRetries = 1\ntimeoutMs = 2500\n\n[inference]\nsampleSize = 3").unwrap();

        let config = ProbeConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.fetch.max_retries, 1);
        assert_eq!(config.fetch.timeout_ms, 2500);
        assert_eq!(config.fetch.initial_delay_ms, 1000);
        assert_eq!(config.inference.sample_size, 3);
    }

    #[test]
    fn test_load_defaults() {
        assert_eq!(ProbeConfig::load(None).unwrap(), ProbeConfig::default());
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            ProbeConfig::from_toml("[fetch\n"),
            Err(CliError::ConfigError(_))
        ));
    }

    #[test]
    fn test_parse_headers() {
        let headers = parse_headers(&[
            "Authorization: Bearer abc".to_string(),
            "X-Trace:1".to_string(),
        ])
        .unwrap();
        assert_eq!(headers["Authorization"], "Bearer abc");
        assert_eq!(headers["X-Trace"], "1");
        assert!(parse_headers(&["nocolon".to_string()]).is_err());
        assert!(parse_headers(&[": value".to_string()]).is_err());
    }

    #[test]
    fn test_parse_query_params() {
        let params = parse_query_params(&["page=2".to_string(), "filter=a=b".to_string()]).unwrap();
        assert_eq!(params["page"], "2");
        assert_eq!(params["filter"], "a=b");
        assert!(parse_query_params(&["page".to_string()]).is_err());
    }
}
