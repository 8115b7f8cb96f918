//! Configuration for schema inference

use serde::{Deserialize, Serialize};

/// Number of records sampled from the located array by default
pub const DEFAULT_SAMPLE_SIZE: usize = 5;

/// Configuration for schema inference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InferenceConfig {
    /// Maximum number of records to sample from the record array
    pub sample_size: usize,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
        }
    }
}

impl InferenceConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for custom configuration
    pub fn builder() -> InferenceConfigBuilder {
        InferenceConfigBuilder::default()
    }
}

/// Builder for InferenceConfig
#[derive(Debug, Default)]
pub struct InferenceConfigBuilder {
    config: InferenceConfig,
}

impl InferenceConfigBuilder {
    /// Set the sample size (at least one record is always sampled)
    pub fn sample_size(mut self, size: usize) -> Self {
        self.config.sample_size = size.max(1);
        self
    }

    /// Build the configuration
    pub fn build(self) -> InferenceConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = InferenceConfig::default();
        assert_eq!(config.sample_size, 5);
    }

    #[test]
    fn test_sample_size_clamping() {
        let config = InferenceConfig::builder().sample_size(0).build();
        assert_eq!(config.sample_size, 1);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: InferenceConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, InferenceConfig::default());
    }
}
