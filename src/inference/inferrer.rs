//! Schema inference engine

use serde_json::Value;

use super::config::InferenceConfig;
use super::error::InferenceError;
use super::merge::merge_field_types;
use super::pagination::detect_pagination;
use super::types::{Field, JsonType, Schema};

/// Location of the record array inside a response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayPath<'a> {
    /// The response itself is the record array
    Root,
    /// The record array is a direct property of the wrapping object
    Key(&'a str),
}

impl ArrayPath<'_> {
    /// JSON-path-like pointer: `$` or `$.<key>`
    pub fn sample_path(&self) -> String {
        match self {
            ArrayPath::Root => "$".to_string(),
            ArrayPath::Key(key) => format!("$.{}", key),
        }
    }
}

/// Infer the type tag of a single JSON value
pub fn infer_type(value: &Value) -> JsonType {
    match value {
        Value::Null => JsonType::Null,
        Value::Bool(_) => JsonType::Boolean,
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                JsonType::Integer
            } else {
                match n.as_f64() {
                    Some(f) if f.is_finite() && f.fract() == 0.0 => JsonType::Integer,
                    _ => JsonType::Number,
                }
            }
        }
        Value::String(_) => JsonType::String,
        Value::Array(_) => JsonType::Array,
        Value::Object(_) => JsonType::Object,
    }
}

/// Find the record array in a response.
///
/// A non-empty top-level array is the root. For an object, the first property
/// (in document order) holding a non-empty array is returned. Anything else
/// has no discoverable record array.
pub fn find_array_path(data: &Value) -> Option<ArrayPath<'_>> {
    match data {
        Value::Array(items) if !items.is_empty() => Some(ArrayPath::Root),
        Value::Object(obj) => obj
            .iter()
            .find(|(_, v)| v.as_array().is_some_and(|a| !a.is_empty()))
            .map(|(k, _)| ArrayPath::Key(k.as_str())),
        _ => None,
    }
}

/// Infer the fields of one sampled record.
///
/// Records that are not objects contribute no fields.
pub fn infer_fields(record: &Value) -> Vec<Field> {
    match record {
        Value::Object(obj) => obj
            .iter()
            .map(|(name, value)| Field::new(name.clone(), infer_type(value), value.clone()))
            .collect(),
        _ => Vec::new(),
    }
}

fn records_at<'a>(data: &'a Value, path: ArrayPath<'_>) -> Option<&'a Vec<Value>> {
    match path {
        ArrayPath::Root => data.as_array(),
        ArrayPath::Key(key) => data.get(key).and_then(Value::as_array),
    }
}

/// Infer a schema from a decoded response using the default configuration.
///
/// Returns `None` when no non-empty record array can be found.
pub fn infer_schema(data: &Value) -> Option<Schema> {
    infer_schema_with(data, &InferenceConfig::default())
}

/// Infer a schema from a decoded response
pub fn infer_schema_with(data: &Value, config: &InferenceConfig) -> Option<Schema> {
    let path = find_array_path(data)?;
    let records = records_at(data, path)?;

    let sample_size = config.sample_size.max(1).min(records.len());
    let samples: Vec<Vec<Field>> = records[..sample_size].iter().map(infer_fields).collect();
    let fields = merge_field_types(&samples);

    let sample_path = path.sample_path();
    tracing::debug!(
        sample_path = %sample_path,
        records = records.len(),
        sampled = sample_size,
        fields = fields.len(),
        "Located record array"
    );

    let pagination = match path {
        ArrayPath::Root => None,
        ArrayPath::Key(_) => detect_pagination(data),
    };
    if let Some(ref p) = pagination {
        tracing::debug!(kind = p.kind(), "Detected pagination");
    }

    Some(Schema {
        sample_path,
        fields,
        pagination,
    })
}

/// Parse a pasted sample and infer its schema.
///
/// Blank input and invalid JSON are errors; a valid document without a
/// record array is `Ok(None)`.
pub fn infer_schema_from_str(
    raw: &str,
    config: &InferenceConfig,
) -> Result<Option<Schema>, InferenceError> {
    if raw.trim().is_empty() {
        return Err(InferenceError::EmptySample);
    }
    let value: Value = serde_json::from_str(raw)?;
    Ok(infer_schema_with(&value, config))
}
