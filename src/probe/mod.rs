//! Probing an endpoint or a pasted sample
//!
//! Chains the fetcher and the inference engine, classifying every way the
//! chain can stop into a [`ProbeError`] with a user-facing hint.

mod error;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::export::ConfigSource;
use crate::fetch::{
    ErrorType, FetchConfig, FetchRequest, FetchResult, HttpTransport, ResponseBody, fetch_with_retry,
};
use crate::inference::{InferenceConfig, Schema, infer_schema_from_str, infer_schema_with};

pub use error::{ProbeError, http_hint};

/// The endpoint to probe
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProbeTarget {
    pub url: String,
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    #[serde(default)]
    pub query_params: BTreeMap<String, String>,
}

impl ProbeTarget {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Check that the URL is an absolute http(s) URL
    pub fn validate(&self) -> Result<url::Url, ProbeError> {
        let trimmed = self.url.trim();
        if trimmed.is_empty() {
            return Err(ProbeError::Validation("URL is required".to_string()));
        }
        let parsed = url::Url::parse(trimmed)
            .map_err(|e| ProbeError::Validation(format!("Invalid URL '{}': {}", trimmed, e)))?;
        match parsed.scheme() {
            "http" | "https" => Ok(parsed),
            other => Err(ProbeError::Validation(format!(
                "Unsupported URL scheme '{}', expected http or https",
                other
            ))),
        }
    }

    /// Request for the fetcher
    pub fn to_request(&self) -> FetchRequest {
        FetchRequest {
            url: self.url.trim().to_string(),
            headers: self.headers.clone(),
            query_params: self.query_params.clone(),
        }
    }

    /// Generator input combining this target with an inferred schema
    pub fn config_source(&self, schema: &Schema) -> ConfigSource {
        ConfigSource::from_schema(
            self.url.trim(),
            self.headers.clone(),
            self.query_params.clone(),
            schema,
        )
    }
}

/// Successful probe of a live endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbeReport {
    pub schema: Schema,
    pub fetch: FetchResult,
}

/// Structured probe result for rendering or serialization.
///
/// Either `ok` with a schema, or not ok with the error message, code,
/// status (when relevant) and a hint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProbeOutcome {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ProbeOutcome {
    pub fn success(schema: Schema) -> Self {
        Self {
            ok: true,
            schema: Some(schema),
            error: None,
            error_type: None,
            status: None,
            hint: None,
        }
    }

    pub fn failure(error: &ProbeError) -> Self {
        Self {
            ok: false,
            schema: None,
            error: Some(error.to_string()),
            error_type: Some(error.code().to_string()),
            status: error.status(),
            hint: Some(error.hint().to_string()),
        }
    }
}

impl From<Result<Schema, ProbeError>> for ProbeOutcome {
    fn from(result: Result<Schema, ProbeError>) -> Self {
        match result {
            Ok(schema) => ProbeOutcome::success(schema),
            Err(e) => ProbeOutcome::failure(&e),
        }
    }
}

impl From<Result<ProbeReport, ProbeError>> for ProbeOutcome {
    fn from(result: Result<ProbeReport, ProbeError>) -> Self {
        result.map(|report| report.schema).into()
    }
}

/// Classify a finished fetch and infer its schema
pub fn classify_fetch(fetch: &FetchResult, config: &InferenceConfig) -> Result<Schema, ProbeError> {
    if fetch.is_network_error() {
        return Err(ProbeError::Network {
            error_type: fetch.error_type.unwrap_or(ErrorType::NetworkError),
            message: fetch.error.clone().unwrap_or_default(),
            attempts: fetch.attempts,
        });
    }
    if !fetch.success {
        return Err(ProbeError::Http {
            status: fetch.status,
            status_text: fetch.status_text.clone(),
        });
    }

    let body = match &fetch.body {
        ResponseBody::Json(value) => value,
        ResponseBody::Text(text) => {
            let message = serde_json::from_str::<Value>(text)
                .err()
                .map(|e| e.to_string())
                .unwrap_or_default();
            return Err(ProbeError::Parse(message));
        }
    };

    infer_schema_with(body, config).ok_or(ProbeError::SchemaInference)
}

/// Fetch an endpoint and infer the schema of its response
pub async fn probe_url<T>(
    transport: &T,
    target: &ProbeTarget,
    fetch_config: &FetchConfig,
    inference_config: &InferenceConfig,
) -> Result<ProbeReport, ProbeError>
where
    T: HttpTransport + ?Sized,
{
    target.validate()?;

    let request = target.to_request();
    let fetch = fetch_with_retry(transport, &request, fetch_config).await;
    tracing::info!(
        url = %request.url,
        status = fetch.status,
        attempts = fetch.attempts,
        "Fetched endpoint"
    );

    let schema = classify_fetch(&fetch, inference_config)?;
    tracing::info!(
        sample_path = %schema.sample_path,
        fields = schema.fields.len(),
        paginated = schema.pagination.is_some(),
        "Inferred schema"
    );

    Ok(ProbeReport { schema, fetch })
}

/// Infer the schema of a pasted response sample
pub fn probe_sample(raw: &str, config: &InferenceConfig) -> Result<Schema, ProbeError> {
    infer_schema_from_str(raw, config)?.ok_or(ProbeError::SchemaInference)
}
