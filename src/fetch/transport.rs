//! HTTP transport abstraction
//!
//! The fetcher never talks to the network directly; it is handed an
//! `HttpTransport`. `ReqwestTransport` is the real implementation, tests use
//! scripted ones.

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::error::TransportError;

/// A GET request against an API endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchRequest {
    pub url: String,
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    #[serde(default)]
    pub query_params: BTreeMap<String, String>,
}

impl FetchRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Add a request header
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Add a query parameter
    pub fn with_query_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.insert(name.into(), value.into());
        self
    }
}

/// A response as received, with any status code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub status_text: Option<String>,
    /// Header names are lowercase
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

/// Performs a single GET attempt.
///
/// Implementations must return `Ok` for every received response regardless
/// of status, and `Err` only when no response was received. The attempt is
/// bounded by `timeout`; running out of it before the status line arrives is
/// `TransportError::Timeout`, running out while reading the body is not.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(
        &self,
        request: &FetchRequest,
        timeout: Duration,
    ) -> Result<RawResponse, TransportError>;
}

/// Transport backed by a `reqwest::Client`
#[cfg(feature = "api-backend")]
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

#[cfg(feature = "api-backend")]
impl ReqwestTransport {
    /// Create a transport with a default client
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transport reusing an existing client
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    fn classify(err: reqwest::Error, timeout: Duration) -> TransportError {
        if err.is_timeout() {
            TransportError::Timeout(timeout.as_millis() as u64)
        } else if err.is_builder() {
            TransportError::Request(error_chain(&err))
        } else {
            TransportError::Connection(error_chain(&err))
        }
    }
}

/// Render an error with its sources, e.g.
/// `error sending request: client error (Connect): Connection refused`
#[cfg(feature = "api-backend")]
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[cfg(feature = "api-backend")]
#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(
        &self,
        request: &FetchRequest,
        timeout: Duration,
    ) -> Result<RawResponse, TransportError> {
        let mut builder = self.client.get(&request.url).timeout(timeout);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if !request.query_params.is_empty() {
            builder = builder.query(&request.query_params);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| Self::classify(e, timeout))?;

        let status = response.status();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();

        // The status is already known at this point, so a body read failure
        // is reported as an empty body rather than a network failure.
        let body = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(url = %request.url, error = %e, "Failed to read response body");
                String::new()
            }
        };

        Ok(RawResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().map(str::to_string),
            headers,
            body,
        })
    }
}
