//! CLI command implementations

pub mod fetch;
pub mod sample;

use std::path::PathBuf;

use super::error::CliError;
use super::output::{OutputFormat, format_schema_summary, render_wrapper, write_import};
use crate::export::generate_import_wrapper;
use crate::inference::Schema;
use crate::probe::ProbeTarget;

/// Where and how to emit the generated import
#[derive(Debug, Clone, Default)]
pub struct OutputArgs {
    /// Directory to write the import file into
    pub output_dir: PathBuf,
    /// Print to stdout instead of writing a file
    pub stdout: bool,
    pub format: OutputFormat,
}

/// Generate the import for a schema and emit it
pub(crate) fn emit_import(
    target: &ProbeTarget,
    schema: &Schema,
    args: &OutputArgs,
) -> Result<(), CliError> {
    eprint!("{}", format_schema_summary(schema));

    let wrapper = generate_import_wrapper(&target.config_source(schema));

    if args.stdout {
        println!("{}", render_wrapper(&wrapper, args.format)?);
    } else {
        // Files are always JSON; the platform imports nothing else.
        let path = write_import(&wrapper, target.url.trim(), &args.output_dir)?;
        eprintln!();
        eprintln!("Import written to: {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::infer_schema;
    use serde_json::json;

    #[test]
    fn test_filename_ignores_surrounding_whitespace() {
        let dir = tempfile::tempdir().unwrap();
        let schema = infer_schema(&json!([{"id": 1}])).unwrap();
        let target = ProbeTarget::new("  https://api.example.com/users ");
        let args = OutputArgs {
            output_dir: dir.path().to_path_buf(),
            ..Default::default()
        };

        emit_import(&target, &schema, &args).unwrap();

        let names: Vec<String> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names.len(), 1);
        assert!(names[0].starts_with("tooljet-api-example-com-users-"));
    }
}
