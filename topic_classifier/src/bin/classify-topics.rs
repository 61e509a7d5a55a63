//! classify-topics: group the texts of a JSON array by topic
//!
//! ```bash
//! GEMINI_API_KEY=... classify-topics comments.json -o topics.json
//! ```
//!
//! The input must be a JSON array of strings. A summary table is printed to
//! stdout; with `--output` the labelled groups are written as a JSON object.
//!
//! ## Exit codes
//! * `0` success
//! * `1` malformed input, bad configuration or classification failure
//! * `2` argument parsing error (from **clap**)

use std::{path::PathBuf, process::ExitCode, time::Duration};
use topic_classifier::prelude::*;

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum Backend {
    Gemini,
    Openai,
}

#[derive(Debug, clap::Parser)]
#[command(name = "classify-topics", version, about)]
struct Cli {
    /// JSON file holding an array of strings.
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Write the classified groups to this file as JSON.
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Retries for failed requests and for unusable model output.
    #[arg(long, default_value_t = 3)]
    retry: u32,

    /// Seconds to wait before a retry and between requests.
    #[arg(long, value_name = "SECONDS", default_value = "1.0", value_parser = parse_seconds)]
    retry_delay: Duration,

    /// Only print errors and the summary. Takes precedence over `--debug`.
    #[arg(short, long)]
    quiet: bool,

    /// Verbose logs, including raw model output that failed validation.
    #[arg(long)]
    debug: bool,

    /// Stop re-classifying the other label after this many passes.
    #[arg(long, value_name = "N")]
    max_iterations: Option<usize>,

    /// Label for texts that fit no topic.
    #[arg(long, value_name = "LABEL", default_value = "other")]
    other_label: String,

    #[arg(long, value_enum, default_value_t = Backend::Gemini)]
    backend: Backend,

    /// Model id. Defaults to the backend's default model.
    #[arg(long, value_name = "ID")]
    model: Option<String>,

    /// Override the API host, e.g. a proxy or a compatible server.
    #[arg(long, value_name = "HOST")]
    api_host: Option<String>,

    /// Texts per request. Overrides BATCH_SIZE.
    #[arg(long, value_name = "N")]
    batch_size: Option<usize>,

    /// Also log to an hourly rolling file in this directory.
    #[arg(long, value_name = "DIR")]
    log_dir: Option<PathBuf>,
}

fn parse_seconds(value: &str) -> Result<Duration, String> {
    let seconds: f64 = value.parse().map_err(|e| format!("{e}"))?;
    Duration::try_from_secs_f64(seconds).map_err(|e| format!("{e}"))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = <Cli as clap::Parser>::parse();

    let mut logging = LoggingConfig::new().logger_name("classify-topics");
    logging = if cli.quiet {
        logging.log_level_error()
    } else if cli.debug {
        logging.log_level_debug()
    } else {
        logging.log_level_info()
    };
    if let Some(log_dir) = &cli.log_dir {
        logging = logging.log_dir(log_dir);
    }
    if let Err(e) = logging.load_logger() {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> anyhow::Result<()> {
    let texts = load_text_items(&cli.file)?;

    let batch_size = match cli.batch_size {
        Some(batch_size) => batch_size,
        None => ClassifierSettings::load()?.batch_size,
    };
    let config = ClassifyConfig::new()
        .batch_size(batch_size)
        .other_label(cli.other_label.as_str())
        .max_iterations(cli.max_iterations)
        .retry_after_fail_n_times(cli.retry)
        .retry_delay(cli.retry_delay)
        .request_delay(cli.retry_delay);
    config.validate()?;
    tracing::debug!("{config}");

    let backend = init_backend(cli)?;
    tracing::info!("Classifying {} texts with {}", texts.len(), backend.model_id());
    let client = RetryingClient::new(backend)
        .retry_after_fail_n_times(cli.retry)
        .retry_delay(cli.retry_delay);
    let classifier = TopicClassifier::new(client, config)?;

    let partition = classifier.run(&texts).await?;

    Summary::new(&partition, &cli.other_label).print();
    if let Some(output) = &cli.output {
        write_partition(output, &partition)?;
        tracing::info!("Wrote {}", output.display());
    }
    Ok(())
}

fn init_backend(cli: &Cli) -> anyhow::Result<LlmBackend> {
    match cli.backend {
        Backend::Gemini => {
            let mut builder = LlmInterface::gemini();
            if let Some(model) = &cli.model {
                builder = builder.model_id(model);
            }
            if let Some(host) = &cli.api_host {
                builder = builder.with_api_host(host);
            }
            builder.init()
        }
        Backend::Openai => {
            let mut builder = LlmInterface::openai();
            if let Some(model) = &cli.model {
                builder = builder.model_id(model);
            }
            if let Some(host) = &cli.api_host {
                builder = builder.with_api_host(host);
            }
            builder.init()
        }
    }
}
