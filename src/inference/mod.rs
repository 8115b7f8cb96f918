//! Schema inference engine for JSON API responses
//!
//! Locates the record array inside an arbitrary JSON response, infers the
//! type of every field seen in a small sample of records and detects the
//! pagination convention the API uses.
//!
//! ## Example
//!
//! ```rust
//! use api_schema_probe::inference::infer_schema;
//! use serde_json::json;
//!
//! let body = json!({
//!     "orders": [{"id": 1, "total": 9.5}],
//!     "meta": {"page": 1, "per_page": 10, "total": 100}
//! });
//!
//! let schema = infer_schema(&body).unwrap();
//! assert_eq!(schema.sample_path, "$.orders");
//! assert_eq!(schema.fields[1].field_type.to_string(), "number");
//! assert!(schema.pagination.is_some());
//! ```

mod config;
mod error;
mod inferrer;
mod merge;
mod pagination;
mod types;

pub use config::{DEFAULT_SAMPLE_SIZE, InferenceConfig, InferenceConfigBuilder};
pub use error::InferenceError;
pub use inferrer::{
    ArrayPath, find_array_path, infer_fields, infer_schema, infer_schema_from_str,
    infer_schema_with, infer_type,
};
pub use merge::merge_field_types;
pub use pagination::{CONTAINER_NAMES, PAGE_KEYS, PER_PAGE_KEYS, TOTAL_KEYS, detect_pagination};
pub use types::{
    Field, FieldType, JsonType, OffsetMetaPaths, PageMetaPaths, Pagination, Schema,
};
