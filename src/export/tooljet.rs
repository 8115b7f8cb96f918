//! ToolJet import wrapper generation
//!
//! Maps an inferred schema onto a table component bound to the datasource
//! output, plus an optional pagination component.

use serde::{Deserialize, Serialize};

use super::datasource::{ConfigSource, DatasourceConfig, datasource_config};
use crate::inference::{FieldType, JsonType, OffsetMetaPaths, PageMetaPaths, Pagination};

/// Format version of the generated import
pub const IMPORT_VERSION: &str = "1.0.0";

/// Query the table component is bound to
pub const QUERY_NAME: &str = "restapi1";

/// Column type understood by the table component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UiType {
    Number,
    Text,
    Boolean,
}

/// Map an inferred field type to a column type.
///
/// Unions have no single column type and always degrade to text.
pub fn map_field_type(field_type: &FieldType) -> UiType {
    match field_type.as_single() {
        Some(JsonType::Integer | JsonType::Number) => UiType::Number,
        Some(JsonType::Boolean) => UiType::Boolean,
        Some(JsonType::String | JsonType::Object | JsonType::Array | JsonType::Null) | None => {
            UiType::Text
        }
    }
}

/// A table column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Field name in the record
    pub name: String,
    pub key: String,
    #[serde(rename = "type")]
    pub ui_type: UiType,
    /// `<samplePath>[].<name>`
    pub selector: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableComponent {
    pub data_binding: String,
    pub columns: Vec<Column>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetaPaths {
    Page(PageMetaPaths),
    Offset(OffsetMetaPaths),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationComponent {
    #[serde(rename = "type")]
    pub kind: String,
    pub page_param: String,
    pub limit_param: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset_param: Option<String>,
    pub meta_paths: MetaPaths,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Components {
    pub table: TableComponent,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationComponent>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WrapperMetadata {
    pub sample_path: String,
    pub field_count: usize,
    pub has_pagination: bool,
}

/// Complete import bundle: datasource, UI components and metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportWrapper {
    pub version: String,
    pub datasource: DatasourceConfig,
    pub components: Components,
    pub metadata: WrapperMetadata,
}

fn pagination_component(pagination: &Pagination) -> PaginationComponent {
    match pagination {
        Pagination::Page {
            page_param,
            limit_param,
            meta_paths,
        } => PaginationComponent {
            kind: pagination.kind().to_string(),
            page_param: page_param.clone(),
            limit_param: limit_param.clone(),
            offset_param: None,
            meta_paths: MetaPaths::Page(meta_paths.clone()),
        },
        Pagination::Offset {
            offset_param,
            limit_param,
            meta_paths,
        } => PaginationComponent {
            kind: pagination.kind().to_string(),
            page_param: "page".to_string(),
            limit_param: limit_param.clone(),
            offset_param: Some(offset_param.clone()),
            meta_paths: MetaPaths::Offset(meta_paths.clone()),
        },
    }
}

/// Build the full import bundle.
///
/// One column per field, in field order. The table binds to the query
/// output at the sample path.
pub fn generate_import_wrapper(source: &ConfigSource) -> ImportWrapper {
    let sample_path = source.sample_path();

    let columns = source
        .fields
        .iter()
        .map(|field| Column {
            name: field.name.clone(),
            key: field.name.clone(),
            ui_type: map_field_type(&field.field_type),
            selector: format!("{}[].{}", sample_path, field.name),
        })
        .collect();

    let binding_path = sample_path.strip_prefix('$').unwrap_or(sample_path);
    let data_binding = format!("{{{{queries.{}.data{}}}}}", QUERY_NAME, binding_path);

    ImportWrapper {
        version: IMPORT_VERSION.to_string(),
        datasource: datasource_config(source),
        components: Components {
            table: TableComponent {
                data_binding,
                columns,
            },
            pagination: source.pagination.as_ref().map(pagination_component),
        },
        metadata: WrapperMetadata {
            sample_path: sample_path.to_string(),
            field_count: source.fields.len(),
            has_pagination: source.pagination.is_some(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_field_type() {
        let t = |s: &str| s.parse::<FieldType>().unwrap();
        assert_eq!(map_field_type(&t("integer")), UiType::Number);
        assert_eq!(map_field_type(&t("number")), UiType::Number);
        assert_eq!(map_field_type(&t("string")), UiType::Text);
        assert_eq!(map_field_type(&t("object")), UiType::Text);
        assert_eq!(map_field_type(&t("array")), UiType::Text);
        assert_eq!(map_field_type(&t("null")), UiType::Text);
        assert_eq!(map_field_type(&t("boolean")), UiType::Boolean);
        assert_eq!(map_field_type(&t("boolean|number|string")), UiType::Text);
        assert_eq!(map_field_type(&t("integer|number")), UiType::Text);
    }

    #[test]
    fn test_columns_use_raw_field_names() {
        use crate::inference::Field;

        let source = ConfigSource {
            url: "https://api.example.com".to_string(),
            fields: vec![
                Field::new("created_at", JsonType::String, serde_json::json!("2024-01-01")),
                Field::new("userId", JsonType::Integer, serde_json::json!(7)),
            ],
            ..Default::default()
        };
        let columns = generate_import_wrapper(&source).components.table.columns;
        assert_eq!(columns[0].name, "created_at");
        assert_eq!(columns[0].selector, "$[].created_at");
        assert_eq!(columns[1].name, "userId");
        assert_eq!(columns[1].selector, "$[].userId");
    }

    #[test]
    fn test_data_binding() {
        let source = ConfigSource {
            url: "https://api.example.com".to_string(),
            sample_path: Some("$.orders".to_string()),
            ..Default::default()
        };
        let wrapper = generate_import_wrapper(&source);
        assert_eq!(
            wrapper.components.table.data_binding,
            "{{queries.restapi1.data.orders}}"
        );

        let root = ConfigSource {
            url: "https://api.example.com".to_string(),
            ..Default::default()
        };
        assert_eq!(
            generate_import_wrapper(&root).components.table.data_binding,
            "{{queries.restapi1.data}}"
        );
    }

    #[test]
    fn test_offset_pagination_component_defaults_page_param() {
        let pagination = Pagination::offset(OffsetMetaPaths {
            offset: "paging.offset".to_string(),
            limit: "paging.limit".to_string(),
            total: None,
        });
        let component = pagination_component(&pagination);
        assert_eq!(component.kind, "offset");
        assert_eq!(component.page_param, "page");
        assert_eq!(component.limit_param, "limit");
        assert_eq!(component.offset_param.as_deref(), Some("offset"));
    }
}
