//! Command line interface for the paperfeed pipeline.
//!
//! The `paperfeed` binary runs one batch step per invocation:
//!
//! ```bash
//! # Fetch the newest cs.AI submissions into _data/arxiv_papers.yml
//! paperfeed fetch
//!
//! # Fetch 25 papers from another category into a custom file
//! paperfeed --data-path site/_data/papers.yml fetch --category cs.LG --max-results 25
//!
//! # Fill in key findings for every paper that has none yet
//! paperfeed summarize
//! ```
//!
//! Progress goes to stdout and errors to stderr. The process exits with status 0 when the step
//! succeeded and 1 when it fetched nothing or could not read or write the data file, so a
//! scheduler can chain `fetch` and `summarize`.

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::{path::PathBuf, process::ExitCode};

use clap::{builder::ArgAction, Args, Parser, Subcommand};
use console::style;
use paperfeed::{pipeline, prelude::*};
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub mod commands;
pub mod error;

use crate::{commands::*, error::*};

/// Prefix for information messages
static INFO_PREFIX: &str = "ℹ ";
/// Prefix for success messages
static SUCCESS_PREFIX: &str = "✓ ";
/// Prefix for error messages
static ERROR_PREFIX: &str = "✗ ";

/// Command line interface configuration and argument parsing
#[derive(Parser)]
#[command(author, version, about = "Fetch recent arXiv papers and summarize their abstracts")]
pub struct Cli {
  /// Verbose mode (-v, -vv, -vvv) for different levels of logging detail
  #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        help = "Increase logging verbosity"
    )]
  verbose: u8,

  /// TOML file with pipeline settings. Keys that are absent fall back to the defaults.
  #[arg(long, short, global = true)]
  config: Option<PathBuf>,

  /// Path to the YAML data file shared by `fetch` and `summarize`. Overrides the configuration
  /// file.
  #[arg(long, short, global = true)]
  data_path: Option<PathBuf>,

  /// The subcommand to execute
  #[command(subcommand)]
  command: Commands,
}

impl Cli {
  /// Builds the pipeline configuration from the optional file and the global flags.
  fn configuration(&self) -> Result<Config> {
    let config = match &self.config {
      Some(path) => Config::from_path(path)?,
      None => Config::default(),
    };
    Ok(match &self.data_path {
      Some(data_path) => config.with_data_path(data_path),
      None => config,
    })
  }
}

/// Configures the logging system based on the verbosity level
///
/// # Arguments
///
/// * `verbosity` - Number of times the verbose flag was used (0-4)
///
/// The verbosity levels are:
/// - 0: error (default)
/// - 1: warn
/// - 2: info
/// - 3: debug
/// - 4+: trace
///
/// `RUST_LOG` takes precedence when set.
fn setup_logging(verbosity: u8) {
  let filter = match verbosity {
    0 => "error",
    1 => "warn",
    2 => "info",
    3 => "debug",
    _ => "trace",
  };

  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_file(true)
    .with_line_number(true)
    .with_target(true)
    .init();
}

/// Entry point for the paperfeed CLI application
///
/// Parses arguments, sets up logging, runs the requested step and turns its outcome into the
/// process exit status.
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
  let cli = Cli::parse();
  setup_logging(cli.verbose);

  let outcome = match cli.configuration() {
    Ok(config) => match &cli.command {
      Commands::Fetch(args) => fetch(config, args.clone()).await,
      Commands::Summarize(args) => summarize(config, args.clone()),
    },
    Err(e) => Err(e),
  };

  match outcome {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      debug!("Exiting with failure: {e:?}");
      eprintln!("{}{}", style(ERROR_PREFIX).red(), e);
      ExitCode::FAILURE
    },
  }
}
