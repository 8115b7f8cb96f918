//! REST API datasource descriptor generation

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::masking::mask_sensitive_headers;
use crate::inference::{Field, Pagination, Schema};

/// Datasource type understood by the import target
pub const DATASOURCE_TYPE: &str = "restapi";

/// Name used when the URL has no host
pub const FALLBACK_DATASOURCE_NAME: &str = "REST API";

/// Everything the generators need: the probed endpoint plus what was
/// inferred from it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigSource {
    pub url: String,
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    #[serde(default)]
    pub query_params: BTreeMap<String, String>,
    #[serde(default)]
    pub sample_path: Option<String>,
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

impl ConfigSource {
    /// Combine an endpoint description with its inferred schema
    pub fn from_schema(
        url: impl Into<String>,
        headers: BTreeMap<String, String>,
        query_params: BTreeMap<String, String>,
        schema: &Schema,
    ) -> Self {
        Self {
            url: url.into(),
            headers,
            query_params,
            sample_path: Some(schema.sample_path.clone()),
            fields: schema.fields.clone(),
            pagination: schema.pagination.clone(),
        }
    }

    /// Sample path, defaulting to the document root
    pub fn sample_path(&self) -> &str {
        self.sample_path.as_deref().unwrap_or("$")
    }
}

/// Datasource descriptor for the import target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasourceConfig {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
    pub method: String,
    /// Sensitive values are masked
    pub headers: BTreeMap<String, String>,
    pub query_params: BTreeMap<String, String>,
}

/// Datasource descriptor together with the inferred structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasourceJson {
    #[serde(flatten)]
    pub datasource: DatasourceConfig,
    pub fields: Vec<Field>,
    pub sample_path: String,
    pub pagination: Option<Pagination>,
}

/// Datasource name derived from the URL host
pub fn datasource_name(url: &str) -> String {
    url::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_else(|| FALLBACK_DATASOURCE_NAME.to_string())
}

/// Build the datasource descriptor (always `GET`, headers masked)
pub fn datasource_config(source: &ConfigSource) -> DatasourceConfig {
    DatasourceConfig {
        name: datasource_name(&source.url),
        kind: DATASOURCE_TYPE.to_string(),
        url: source.url.clone(),
        method: "GET".to_string(),
        headers: mask_sensitive_headers(&source.headers),
        query_params: source.query_params.clone(),
    }
}

/// Build the datasource descriptor with fields, sample path and pagination
pub fn generate_datasource_json(source: &ConfigSource) -> DatasourceJson {
    DatasourceJson {
        datasource: datasource_config(source),
        fields: source.fields.clone(),
        sample_path: source.sample_path().to_string(),
        pagination: source.pagination.clone(),
    }
}
