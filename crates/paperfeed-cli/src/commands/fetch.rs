//! Module for the "fetch" step of the pipeline.

use super::*;

/// Arguments that can be used for the [`Commands::Fetch`]
#[derive(Args, Clone)]
pub struct FetchArgs {
  /// arXiv category to query, e.g. "cs.AI" or "math.AG"
  #[arg(long)]
  pub category: Option<String>,

  /// Number of papers to request from the API
  #[arg(long)]
  pub max_results: Option<usize>,
}

/// Function for the [`Commands::Fetch`] in the CLI.
///
/// Always leaves a well-formed data file behind. Fails when no paper could be fetched.
pub async fn fetch(config: Config, fetch_args: FetchArgs) -> Result<()> {
  let FetchArgs { category, max_results } = fetch_args;

  let config = match category {
    Some(category) => config.with_category(category),
    None => config,
  };
  let config = match max_results {
    Some(max_results) => config.with_max_results(max_results),
    None => config,
  };

  println!(
    "{}Fetching {} papers from {}...",
    style(INFO_PREFIX).cyan(),
    config.max_results,
    config.category
  );

  let report = pipeline::fetch(&config).await?;
  println!(
    "{}Saved {} papers to {}",
    style(SUCCESS_PREFIX).green(),
    report.fetched,
    report.path.display()
  );

  if !report.is_success() {
    return Err(PaperfeedCliError::NoPapersFetched(report.path));
  }

  println!(
    "{}Successfully fetched and saved {} papers",
    style(SUCCESS_PREFIX).green(),
    report.fetched
  );
  Ok(())
}
