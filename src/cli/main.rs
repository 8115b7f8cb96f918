//! api-probe: infer a schema from a JSON API and generate a ToolJet import

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use api_schema_probe::cli::CliError;
use api_schema_probe::cli::commands::OutputArgs;
use api_schema_probe::cli::commands::fetch::{FetchArgs, handle_fetch};
use api_schema_probe::cli::commands::sample::{SampleArgs, handle_sample};
use api_schema_probe::cli::config::ProbeConfig;
use api_schema_probe::cli::output::OutputFormat;

#[derive(Parser)]
#[command(name = "api-probe", version, about = "Infer API schemas and generate ToolJet imports")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Probe a live endpoint
    Fetch {
        /// Absolute http(s) URL
        url: String,
        #[command(flatten)]
        request: RequestOpts,
        #[command(flatten)]
        retry: RetryOpts,
        #[command(flatten)]
        output: OutputOpts,
    },
    /// Infer from a pasted response sample
    Sample {
        /// Sample file, or '-' for stdin
        input: String,
        /// URL the generated datasource should call
        #[arg(long)]
        url: String,
        #[command(flatten)]
        request: RequestOpts,
        #[command(flatten)]
        output: OutputOpts,
    },
}

#[derive(Args)]
struct RequestOpts {
    /// Request header, 'Name: value' (repeatable)
    #[arg(short = 'H', long = "header")]
    headers: Vec<String>,
    /// Query parameter, 'key=value' (repeatable)
    #[arg(short = 'q', long = "query")]
    query: Vec<String>,
    /// TOML file with [fetch] and [inference] settings
    #[arg(long)]
    config: Option<PathBuf>,
    /// Number of records to sample
    #[arg(long)]
    sample_size: Option<usize>,
}

#[derive(Args)]
struct RetryOpts {
    #[arg(long)]
    max_retries: Option<u32>,
    #[arg(long)]
    initial_delay_ms: Option<u64>,
    #[arg(long)]
    timeout_ms: Option<u64>,
}

#[derive(Args)]
struct OutputOpts {
    /// Directory for the generated import file
    #[arg(short, long, default_value = ".")]
    output: PathBuf,
    /// Print the import instead of writing a file
    #[arg(long)]
    stdout: bool,
    /// Output format for --stdout (json, yaml)
    #[arg(long, default_value = "json")]
    format: String,
}

impl OutputOpts {
    fn into_args(self) -> Result<OutputArgs, CliError> {
        Ok(OutputArgs {
            output_dir: self.output,
            stdout: self.stdout,
            format: self.format.parse::<OutputFormat>()?,
        })
    }
}

fn load_config(request: &RequestOpts, retry: Option<&RetryOpts>) -> Result<ProbeConfig, CliError> {
    let mut config = ProbeConfig::load(request.config.as_deref())?;

    if let Some(size) = request.sample_size {
        config.inference.sample_size = size.max(1);
    }
    if let Some(retry) = retry {
        if let Some(n) = retry.max_retries {
            config.fetch.max_retries = n;
        }
        if let Some(ms) = retry.initial_delay_ms {
            config.fetch.initial_delay_ms = ms;
        }
        if let Some(ms) = retry.timeout_ms {
            config.fetch.timeout_ms = ms;
        }
    }

    Ok(config)
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Fetch {
            url,
            request,
            retry,
            output,
        } => {
            let args = FetchArgs {
                url,
                config: load_config(&request, Some(&retry))?,
                headers: request.headers,
                query: request.query,
                output: output.into_args()?,
            };
            handle_fetch(&args).await
        }
        Command::Sample {
            input,
            url,
            request,
            output,
        } => {
            let args = SampleArgs {
                input,
                url,
                config: load_config(&request, None)?,
                headers: request.headers,
                query: request.query,
                output: output.into_args()?,
            };
            handle_sample(&args)
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    run(cli)
        .await
        .map_err(|e| anyhow::anyhow!(e.user_message()))
}
