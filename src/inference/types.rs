//! Type tags, fields and schemas produced by inference

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::error::InferenceError;

/// A single JSON type tag.
///
/// Variants are declared in alphabetical order of their tag names, so the
/// derived `Ord` sorts unions the same way the rendered strings sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonType {
    Array,
    Boolean,
    Integer,
    Null,
    Number,
    Object,
    String,
}

impl JsonType {
    /// Get the tag name
    pub fn as_str(&self) -> &'static str {
        match self {
            JsonType::Array => "array",
            JsonType::Boolean => "boolean",
            JsonType::Integer => "integer",
            JsonType::Null => "null",
            JsonType::Number => "number",
            JsonType::Object => "object",
            JsonType::String => "string",
        }
    }
}

impl fmt::Display for JsonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JsonType {
    type Err = InferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "array" => Ok(JsonType::Array),
            "boolean" => Ok(JsonType::Boolean),
            "integer" => Ok(JsonType::Integer),
            "null" => Ok(JsonType::Null),
            "number" => Ok(JsonType::Number),
            "object" => Ok(JsonType::Object),
            "string" => Ok(JsonType::String),
            other => Err(InferenceError::UnknownType(other.to_string())),
        }
    }
}

/// The inferred type of a field: one tag, or the union of every tag observed
/// across the sampled records.
///
/// Always holds at least one tag. Renders as `integer` or as a sorted,
/// `|`-joined union such as `boolean|number|string`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldType {
    tags: BTreeSet<JsonType>,
}

impl FieldType {
    /// Create a single-tag type
    pub fn single(tag: JsonType) -> Self {
        let mut tags = BTreeSet::new();
        tags.insert(tag);
        Self { tags }
    }

    /// Add another observed tag
    pub fn observe(&mut self, tag: JsonType) {
        self.tags.insert(tag);
    }

    /// Merge another type into this one
    pub fn merge(&mut self, other: &FieldType) {
        self.tags.extend(other.tags.iter().copied());
    }

    /// Whether more than one tag was observed
    pub fn is_union(&self) -> bool {
        self.tags.len() > 1
    }

    /// The single tag, if this is not a union
    pub fn as_single(&self) -> Option<JsonType> {
        if self.is_union() {
            None
        } else {
            self.tags.iter().next().copied()
        }
    }

    /// Observed tags in sorted order
    pub fn tags(&self) -> impl Iterator<Item = JsonType> + '_ {
        self.tags.iter().copied()
    }
}

impl From<JsonType> for FieldType {
    fn from(tag: JsonType) -> Self {
        FieldType::single(tag)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for tag in &self.tags {
            if !first {
                f.write_str("|")?;
            }
            f.write_str(tag.as_str())?;
            first = false;
        }
        Ok(())
    }
}

impl FromStr for FieldType {
    type Err = InferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tags = s
            .split('|')
            .map(|part| part.trim().parse::<JsonType>())
            .collect::<Result<BTreeSet<_>, _>>()?;
        if tags.is_empty() {
            return Err(InferenceError::UnknownType(s.to_string()));
        }
        Ok(Self { tags })
    }
}

impl Serialize for FieldType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for FieldType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A field discovered in the sampled records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Value taken from the first sample that contained the field
    pub sample: Value,
}

impl Field {
    pub fn new(name: impl Into<String>, field_type: impl Into<FieldType>, sample: Value) -> Self {
        Self {
            name: name.into(),
            field_type: field_type.into(),
            sample,
        }
    }
}

/// Meta paths for page-based pagination.
///
/// Paths point into the original response and use the key names actually
/// found there (`meta.per_page`, `pagination.pageSize`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetaPaths {
    pub current_page: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_page: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<String>,
}

/// Meta paths for offset-based pagination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OffsetMetaPaths {
    pub offset: String,
    pub limit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<String>,
}

/// Detected pagination convention
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Pagination {
    #[serde(rename_all = "camelCase")]
    Page {
        page_param: String,
        limit_param: String,
        meta_paths: PageMetaPaths,
    },
    #[serde(rename_all = "camelCase")]
    Offset {
        offset_param: String,
        limit_param: String,
        meta_paths: OffsetMetaPaths,
    },
}

impl Pagination {
    /// Canonical page-based pagination
    pub fn page(meta_paths: PageMetaPaths) -> Self {
        Pagination::Page {
            page_param: "page".to_string(),
            limit_param: "limit".to_string(),
            meta_paths,
        }
    }

    /// Canonical offset-based pagination
    pub fn offset(meta_paths: OffsetMetaPaths) -> Self {
        Pagination::Offset {
            offset_param: "offset".to_string(),
            limit_param: "limit".to_string(),
            meta_paths,
        }
    }

    /// `page` or `offset`
    pub fn kind(&self) -> &'static str {
        match self {
            Pagination::Page { .. } => "page",
            Pagination::Offset { .. } => "offset",
        }
    }
}

/// Structural schema of the record array found in a response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    /// `$` for a top-level array, `$.<key>` for an array under a wrapping object
    pub sample_path: String,
    pub fields: Vec<Field>,
    pub pagination: Option<Pagination>,
}

impl Schema {
    /// Look up a field by name
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}
