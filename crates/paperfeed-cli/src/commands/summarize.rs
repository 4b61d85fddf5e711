//! Module for the "summarize" step of the pipeline.

use paperfeed::summary::DEFAULT_MAX_SENTENCES;

use super::*;

/// Arguments that can be used for the [`Commands::Summarize`]
#[derive(Args, Clone)]
pub struct SummarizeArgs {
  /// Number of leading abstract sentences kept as key findings
  #[arg(long, default_value_t = DEFAULT_MAX_SENTENCES)]
  pub max_sentences: usize,
}

/// Function for the [`Commands::Summarize`] in the CLI.
pub fn summarize(config: Config, summarize_args: SummarizeArgs) -> Result<()> {
  let SummarizeArgs { max_sentences } = summarize_args;

  let report = pipeline::summarize(&config, max_sentences)?;

  if report.placeholders > 0 {
    println!(
      "{}{} papers have no abstract",
      style(INFO_PREFIX).cyan(),
      report.placeholders
    );
  }
  println!(
    "{}Generated key findings for {} papers",
    style(SUCCESS_PREFIX).green(),
    report.generated
  );
  Ok(())
}
