//! Configuration for fetching with retries

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Retry and timeout settings for one logical fetch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FetchConfig {
    /// Additional attempts after the first one fails without a response
    pub max_retries: u32,
    /// Backoff before the first retry; doubled for each further retry
    pub initial_delay_ms: u64,
    /// Upper bound for a single attempt
    pub timeout_ms: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay_ms: 1000,
            timeout_ms: 10_000,
        }
    }
}

impl FetchConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for custom configuration
    pub fn builder() -> FetchConfigBuilder {
        FetchConfigBuilder::default()
    }

    /// Per-attempt timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Total number of attempts, including the first
    pub fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }

    /// Backoff before retry number `retry` (1-based):
    /// `initial_delay_ms * 2^(retry - 1)`.
    pub fn backoff_delay(&self, retry: u32) -> Duration {
        let exponent = retry.saturating_sub(1).min(31);
        Duration::from_millis(self.initial_delay_ms.saturating_mul(1u64 << exponent))
    }
}

/// Builder for FetchConfig
#[derive(Debug, Default)]
pub struct FetchConfigBuilder {
    config: FetchConfig,
}

impl FetchConfigBuilder {
    /// Set the number of retries after the first attempt
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.config.max_retries = retries;
        self
    }

    /// Set the initial backoff delay in milliseconds
    pub fn initial_delay_ms(mut self, delay: u64) -> Self {
        self.config.initial_delay_ms = delay;
        self
    }

    /// Set the per-attempt timeout in milliseconds
    pub fn timeout_ms(mut self, timeout: u64) -> Self {
        self.config.timeout_ms = timeout;
        self
    }

    /// Build the configuration
    pub fn build(self) -> FetchConfig {
        self.config
    }
}
