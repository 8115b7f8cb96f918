//! Config generation
//!
//! Turns an inferred [`Schema`](crate::inference::Schema) into artifacts for
//! the low-code platform:
//! - REST API datasource descriptor (sensitive headers masked)
//! - Full import wrapper with table and pagination components
//! - Download filename

mod datasource;
mod filename;
mod masking;
mod tooljet;

pub use datasource::{
    ConfigSource, DATASOURCE_TYPE, DatasourceConfig, DatasourceJson, FALLBACK_DATASOURCE_NAME,
    datasource_config, datasource_name, generate_datasource_json,
};
pub use filename::{MAX_SLUG_LENGTH, generate_filename, generate_filename_on, url_slug};
pub use masking::{
    MASKED_VALUE, SENSITIVE_HEADER_PATTERNS, is_sensitive_header, mask_sensitive_headers,
};
pub use tooljet::{
    Column, Components, IMPORT_VERSION, ImportWrapper, MetaPaths, PaginationComponent,
    QUERY_NAME, TableComponent, UiType, WrapperMetadata, generate_import_wrapper,
    map_field_type,
};
