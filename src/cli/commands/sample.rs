//! `sample` command: infer from a pasted response

use std::io::Read;
use std::path::PathBuf;

use super::{OutputArgs, emit_import};
use crate::cli::config::{ProbeConfig, parse_headers, parse_query_params};
use crate::cli::error::CliError;
use crate::probe::{ProbeTarget, probe_sample};

/// Arguments for the `sample` command
#[derive(Debug, Clone, Default)]
pub struct SampleArgs {
    /// File path, or `-` for stdin
    pub input: String,
    /// URL the generated datasource points at
    pub url: String,
    pub headers: Vec<String>,
    pub query: Vec<String>,
    pub config: ProbeConfig,
    pub output: OutputArgs,
}

/// Load input content from file or stdin
fn load_input(input: &str) -> Result<String, CliError> {
    if input == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| CliError::InvalidArgument(format!("Failed to read stdin: {}", e)))?;
        Ok(content)
    } else {
        let path = PathBuf::from(input);
        std::fs::read_to_string(&path).map_err(|e| CliError::FileReadError(path, e.to_string()))
    }
}

/// Handle the `sample` command
pub fn handle_sample(args: &SampleArgs) -> Result<(), CliError> {
    let target = ProbeTarget {
        url: args.url.clone(),
        headers: parse_headers(&args.headers)?,
        query_params: parse_query_params(&args.query)?,
    };
    target.validate()?;

    let content = load_input(&args.input)?;
    let schema = probe_sample(&content, &args.config.inference)?;

    emit_import(&target, &schema, &args.output)
}
