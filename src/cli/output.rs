//! Output formatting for CLI

use std::path::{Path, PathBuf};

use super::error::CliError;
use crate::export::{ImportWrapper, generate_filename};
use crate::inference::Schema;

/// Rendering of the generated import
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

impl std::str::FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            other => Err(CliError::InvalidArgument(format!(
                "Unknown format: {}",
                other
            ))),
        }
    }
}

/// Render an import wrapper
pub fn render_wrapper(wrapper: &ImportWrapper, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(wrapper)
            .map_err(|e| CliError::SerializationError(e.to_string())),
        OutputFormat::Yaml => {
            serde_yaml::to_string(wrapper).map_err(|e| CliError::SerializationError(e.to_string()))
        }
    }
}

/// Write the import as JSON into `dir` under its generated filename
pub fn write_import(wrapper: &ImportWrapper, url: &str, dir: &Path) -> Result<PathBuf, CliError> {
    let path = dir.join(generate_filename(url));
    let content = render_wrapper(wrapper, OutputFormat::Json)?;
    std::fs::write(&path, content)
        .map_err(|e| CliError::FileWriteError(path.clone(), e.to_string()))?;
    Ok(path)
}

/// One-line-per-field summary of an inferred schema
pub fn format_schema_summary(schema: &Schema) -> String {
    let mut output = String::new();

    output.push_str(&format!("Records at: {}\n", schema.sample_path));
    output.push_str(&format!("Fields ({}):\n", schema.fields.len()));
    for field in &schema.fields {
        output.push_str(&format!("  - {}: {}\n", field.name, field.field_type));
    }

    match &schema.pagination {
        Some(pagination) => output.push_str(&format!("Pagination: {}\n", pagination.kind())),
        None => output.push_str("Pagination: none detected\n"),
    }

    output
}
