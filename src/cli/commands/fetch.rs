//! `fetch` command: probe a live endpoint

use super::{OutputArgs, emit_import};
use crate::cli::config::{ProbeConfig, parse_headers, parse_query_params};
use crate::cli::error::CliError;
use crate::fetch::ReqwestTransport;
use crate::probe::{ProbeTarget, probe_url};

/// Arguments for the `fetch` command
#[derive(Debug, Clone, Default)]
pub struct FetchArgs {
    pub url: String,
    /// `Name: value` pairs
    pub headers: Vec<String>,
    /// `key=value` pairs
    pub query: Vec<String>,
    pub config: ProbeConfig,
    pub output: OutputArgs,
}

/// Handle the `fetch` command
pub async fn handle_fetch(args: &FetchArgs) -> Result<(), CliError> {
    let target = ProbeTarget {
        url: args.url.clone(),
        headers: parse_headers(&args.headers)?,
        query_params: parse_query_params(&args.query)?,
    };

    eprintln!("Probing {}...", target.url);
    eprintln!("  Max retries: {}", args.config.fetch.max_retries);
    eprintln!("  Timeout: {} ms", args.config.fetch.timeout_ms);

    let transport = ReqwestTransport::new();
    let report = probe_url(&transport, &target, &args.config.fetch, &args.config.inference).await?;

    eprintln!(
        "  Status: {} ({} attempt(s))",
        report.fetch.status, report.fetch.attempts
    );
    eprintln!();

    emit_import(&target, &report.schema, &args.output)
}
