//! Config generation tests

use std::collections::BTreeMap;

use api_schema_probe::export::{
    ConfigSource, MASKED_VALUE, UiType, generate_datasource_json, generate_filename,
    generate_filename_on, generate_import_wrapper, map_field_type, mask_sensitive_headers,
};
use api_schema_probe::inference::{FieldType, infer_schema};
use chrono::NaiveDate;
use serde_json::json;

fn headers(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn source_for(url: &str, body: serde_json::Value) -> ConfigSource {
    let schema = infer_schema(&body).unwrap();
    ConfigSource::from_schema(url, BTreeMap::new(), BTreeMap::new(), &schema)
}

mod masking_tests {
    use super::*;

    #[test]
    fn test_authorization_is_masked_in_datasource() {
        let source = ConfigSource {
            url: "https://api.example.com/users".to_string(),
            headers: headers(&[("Authorization", "Bearer xyz")]),
            ..Default::default()
        };
        let json = generate_datasource_json(&source);

        assert_eq!(json.datasource.headers["Authorization"], MASKED_VALUE);
        assert_eq!(MASKED_VALUE, "<masked>");
    }

    #[test]
    fn test_masking_is_case_insensitive_and_selective() {
        let masked = mask_sensitive_headers(&headers(&[
            ("X-API-KEY", "k"),
            ("x-auth-token", "t"),
            ("X-Client-Secret", "c"),
            ("Accept", "application/json"),
        ]));

        assert_eq!(masked["X-API-KEY"], MASKED_VALUE);
        assert_eq!(masked["x-auth-token"], MASKED_VALUE);
        assert_eq!(masked["X-Client-Secret"], MASKED_VALUE);
        assert_eq!(masked["Accept"], "application/json");
        assert_eq!(masked.len(), 4);
    }

    #[test]
    fn test_wrapper_never_leaks_secrets() {
        let mut source = source_for("https://api.example.com/users", json!([{"id": 1}]));
        source.headers = headers(&[("Authorization", "Bearer xyz")]);

        let rendered = serde_json::to_string(&generate_import_wrapper(&source)).unwrap();
        assert!(!rendered.contains("Bearer xyz"));
        assert!(rendered.contains(MASKED_VALUE));
    }
}

mod field_mapping_tests {
    use super::*;

    #[test]
    fn test_mixed_type_column_maps_to_text() {
        let tag: FieldType = "boolean|number|string".parse().unwrap();
        assert_eq!(map_field_type(&tag), UiType::Text);
    }

    #[test]
    fn test_columns_follow_field_order() {
        let source = source_for(
            "https://api.example.com/orders",
            json!({
                "orders": [{"order_id": 1, "amount": 9.5, "paid": true, "customer": {"id": 3}}],
                "meta": {"page": 1}
            }),
        );
        let wrapper = generate_import_wrapper(&source);
        let columns = &wrapper.components.table.columns;

        let keys: Vec<&str> = columns.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, vec!["order_id", "amount", "paid", "customer"]);
        for column in columns {
            assert_eq!(column.name, column.key);
            assert_eq!(column.selector, format!("{}[].{}", source.sample_path(), column.name));
        }
        assert_eq!(columns[0].selector, "$.orders[].order_id");
        assert_eq!(columns[1].ui_type, UiType::Number);
        assert_eq!(columns[2].ui_type, UiType::Boolean);
        assert_eq!(columns[3].ui_type, UiType::Text);
    }
}

mod wrapper_tests {
    use super::*;

    #[test]
    fn test_paginated_wrapper_shape() {
        let source = source_for(
            "https://api.example.com/orders",
            json!({
                "orders": [{"id": 1}],
                "meta": {"page": 1, "per_page": 10, "total": 100}
            }),
        );
        let value = serde_json::to_value(generate_import_wrapper(&source)).unwrap();

        assert_eq!(value["version"], json!("1.0.0"));
        assert_eq!(value["datasource"]["name"], json!("api.example.com"));
        assert_eq!(value["datasource"]["type"], json!("restapi"));
        assert_eq!(value["datasource"]["method"], json!("GET"));
        assert_eq!(
            value["components"]["table"]["dataBinding"],
            json!("{{queries.restapi1.data.orders}}")
        );
        assert_eq!(value["components"]["pagination"]["type"], json!("page"));
        assert_eq!(
            value["components"]["pagination"]["metaPaths"]["currentPage"],
            json!("meta.page")
        );
        assert_eq!(
            value["metadata"],
            json!({"samplePath": "$.orders", "fieldCount": 1, "hasPagination": true})
        );
    }

    #[test]
    fn test_unpaginated_wrapper_omits_component() {
        let source = source_for("https://api.example.com/users", json!([{"id": 1}]));
        let value = serde_json::to_value(generate_import_wrapper(&source)).unwrap();

        assert!(value["components"].get("pagination").is_none());
        assert_eq!(
            value["components"]["table"]["dataBinding"],
            json!("{{queries.restapi1.data}}")
        );
        assert_eq!(value["metadata"]["hasPagination"], json!(false));
    }
}

mod filename_tests {
    use super::*;

    #[test]
    fn test_filename_for_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(
            generate_filename_on("https://api.example.com/v1/users?page=2", date),
            "tooljet-api-example-com-v1-users-page-2-2024-03-07.json"
        );
    }

    #[test]
    fn test_long_urls_are_cut() {
        let url = format!("https://example.com/{}", "a".repeat(200));
        let name = generate_filename(&url);

        let slug = name
            .strip_prefix("tooljet-")
            .and_then(|rest| rest.strip_suffix(".json"))
            .unwrap();
        // slug plus "-YYYY-MM-DD"
        assert_eq!(slug.len(), 50 + 11);
    }
}
