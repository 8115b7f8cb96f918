//! API Schema Probe - infer record schemas from JSON APIs
//!
//! Provides:
//! - A retrying HTTP fetch layer that turns any server behaviour into a
//!   uniform [`FetchResult`]
//! - Schema inference over decoded JSON: record array discovery, per-field
//!   types with unions, pagination detection
//! - Generation of a REST API datasource and a ToolJet import bundle from an
//!   inferred schema, with sensitive headers masked
//! - Probe helpers classifying every failure into a structured result

#[cfg(feature = "cli")]
pub mod cli;
pub mod export;
pub mod fetch;
pub mod inference;
pub mod probe;

// Re-export commonly used types
#[cfg(feature = "api-backend")]
pub use fetch::ReqwestTransport;
pub use fetch::{
    ErrorType, FetchConfig, FetchRequest, FetchResult, HttpTransport, ResponseBody,
    TransportError, fetch_with_retry,
};

pub use inference::{
    Field, FieldType, InferenceConfig, InferenceError, JsonType, Pagination, Schema,
    detect_pagination, find_array_path, infer_schema, infer_schema_from_str, infer_type,
    merge_field_types,
};

pub use export::{
    ConfigSource, DatasourceConfig, ImportWrapper, MASKED_VALUE, UiType,
    generate_datasource_json, generate_filename, generate_import_wrapper, map_field_type,
    mask_sensitive_headers,
};

pub use probe::{ProbeError, ProbeOutcome, ProbeReport, ProbeTarget, probe_sample, probe_url};
