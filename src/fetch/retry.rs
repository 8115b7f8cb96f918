//! Fetching with bounded retries and exponential backoff

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::config::FetchConfig;
use super::error::{ErrorType, TransportError};
use super::transport::{FetchRequest, HttpTransport, RawResponse};

/// Body of a received response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseBody {
    /// Body parsed as JSON
    Json(Value),
    /// Body that is not JSON (HTML error pages, plain text, empty)
    Text(String),
}

impl ResponseBody {
    /// Decode a raw body, keeping it as text when it is not JSON
    pub fn decode(raw: String) -> Self {
        match serde_json::from_str::<Value>(&raw) {
            Ok(value) => ResponseBody::Json(value),
            Err(_) => ResponseBody::Text(raw),
        }
    }

    /// The decoded JSON value, if the body was JSON
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ResponseBody::Json(value) => Some(value),
            ResponseBody::Text(_) => None,
        }
    }
}

impl Default for ResponseBody {
    fn default() -> Self {
        ResponseBody::Text(String::new())
    }
}

/// Uniform outcome of one logical fetch.
///
/// `status == 0` means no response was ever received. Any received status,
/// 4xx and 5xx included, is reported as-is with `success` set only for 2xx.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchResult {
    pub success: bool,
    pub status: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_text: Option<String>,
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    #[serde(default)]
    pub body: ResponseBody,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_type: Option<ErrorType>,
    /// Attempts made, including the first
    pub attempts: u32,
}

impl FetchResult {
    /// Build a result from a received response
    pub fn from_response(response: RawResponse, attempts: u32) -> Self {
        Self {
            success: (200..300).contains(&response.status),
            status: response.status,
            status_text: response.status_text,
            headers: response.headers,
            body: ResponseBody::decode(response.body),
            error: None,
            error_type: None,
            attempts,
        }
    }

    /// Build a result for a fetch that never received a response
    pub fn network_failure(error: &TransportError, attempts: u32) -> Self {
        Self {
            success: false,
            status: 0,
            status_text: None,
            headers: BTreeMap::new(),
            body: ResponseBody::default(),
            error: Some(error.to_string()),
            error_type: Some(error.error_type()),
            attempts,
        }
    }

    /// Whether no response was ever received
    pub fn is_network_error(&self) -> bool {
        self.status == 0
    }
}

/// Fetch a URL, retrying only while no response has been received.
///
/// Each attempt is bounded by `config.timeout_ms`, enforced by the
/// transport so that a response whose body stalls is still a response. After
/// a failed attempt the loop sleeps `initial_delay_ms * 2^(retry - 1)` and
/// tries again, for at most `max_retries` retries. A received response ends the loop at once,
/// whatever its status.
pub async fn fetch_with_retry<T>(
    transport: &T,
    request: &FetchRequest,
    config: &FetchConfig,
) -> FetchResult
where
    T: HttpTransport + ?Sized,
{
    let timeout = config.timeout();
    let max_attempts = config.max_attempts();
    let mut attempt: u32 = 1;

    loop {
        let error = match transport.get(request, timeout).await {
            Ok(response) => {
                tracing::debug!(
                    url = %request.url,
                    status = response.status,
                    attempt,
                    "Received response"
                );
                return FetchResult::from_response(response, attempt);
            }
            Err(error) => error,
        };

        if !error.is_retryable() || attempt >= max_attempts {
            tracing::warn!(
                url = %request.url,
                attempts = attempt,
                error_type = %error.error_type(),
                error = %error,
                "Giving up on fetch"
            );
            return FetchResult::network_failure(&error, attempt);
        }

        let delay = config.backoff_delay(attempt);
        tracing::warn!(
            url = %request.url,
            attempt,
            delay_ms = delay.as_millis() as u64,
            error_type = %error.error_type(),
            error = %error,
            "Fetch attempt failed, retrying"
        );
        tokio::time::sleep(delay).await;
        attempt += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_body() {
        assert_eq!(
            ResponseBody::decode(r#"{"a": 1}"#.to_string()),
            ResponseBody::Json(json!({"a": 1}))
        );
        assert_eq!(
            ResponseBody::decode("<html>".to_string()),
            ResponseBody::Text("<html>".to_string())
        );
        assert_eq!(
            ResponseBody::decode(String::new()),
            ResponseBody::Text(String::new())
        );
    }

    #[test]
    fn test_from_response_success_band() {
        let response = |status| RawResponse {
            status,
            status_text: None,
            headers: BTreeMap::new(),
            body: "[]".to_string(),
        };
        assert!(FetchResult::from_response(response(200), 1).success);
        assert!(FetchResult::from_response(response(204), 1).success);
        assert!(!FetchResult::from_response(response(301), 1).success);
        assert!(!FetchResult::from_response(response(500), 1).success);
        assert!(!FetchResult::from_response(response(500), 1).is_network_error());
    }

    #[test]
    fn test_network_failure_serialization() {
        let result =
            FetchResult::network_failure(&TransportError::Connection("refused".to_string()), 3);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["success"], json!(false));
        assert_eq!(json["status"], json!(0));
        assert_eq!(json["errorType"], json!("NETWORK_ERROR"));
        assert_eq!(json["error"], json!("Connection failed: refused"));
        assert_eq!(json["attempts"], json!(3));
    }
}
