//! The two batch flows built on top of the other modules.
//!
//! - [`fetch`]: request → parse → write the data file
//! - [`summarize`]: read the data file → fill key findings → write it back
//!
//! Both run straight through once. Neither retries anything: a fetch that cannot reach the API
//! or cannot make sense of its answer still writes an empty, well-formed data file so the site
//! generator downstream always finds something to read.

use super::*;
use crate::{
  retriever::{parse_papers, ArxivClient},
  summary::FindingsReport,
};

/// Outcome of a [`fetch`] run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchReport {
  /// Number of papers written to the data file
  pub fetched: usize,
  /// Data file that was written
  pub path:    PathBuf,
}

impl FetchReport {
  /// Whether the run produced at least one paper.
  pub fn is_success(&self) -> bool { self.fetched > 0 }
}

/// Fetches the newest papers for the configured category and writes them to the data file.
///
/// Transport and feed parsing failures are logged and treated as an empty result; the data file
/// is written in every case, holding `papers: []` when nothing was fetched. Callers decide
/// whether an empty result is a failure through [`FetchReport::is_success`].
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the HTTP client cannot be built, or the
/// data file cannot be written.
pub async fn fetch(config: &Config) -> Result<FetchReport> {
  config.validate()?;
  let client = ArxivClient::new(config)?;

  info!("Fetching {} papers from {}", config.max_results, config.category);
  let papers = match client.fetch_papers(&config.category, config.max_results).await {
    Ok(xml) => parse_papers(&xml).unwrap_or_else(|e| {
      error!("Error parsing arXiv response: {e}");
      Vec::new()
    }),
    Err(e) => {
      error!("Error fetching papers: {e}");
      Vec::new()
    },
  };

  store::save_papers(&papers, &config.data_path)?;
  info!("Saved {} papers to {}", papers.len(), config.data_path.display());

  Ok(FetchReport { fetched: papers.len(), path: config.data_path.clone() })
}

/// Fills in key findings for every paper in the data file that lacks them, then rewrites the
/// whole file.
///
/// Nothing is written when the data file cannot be loaded.
///
/// # Errors
///
/// Returns an error if the data file is missing, empty, malformed, lacks a `papers` key, or
/// cannot be written back.
pub fn summarize(config: &Config, max_sentences: usize) -> Result<FindingsReport> {
  let mut collection = store::load_papers(&config.data_path)?;

  let report = collection.fill_key_findings(max_sentences);
  debug!(
    "Key findings: {} generated, {} placeholders, {} unchanged",
    report.generated, report.placeholders, report.unchanged
  );

  collection.save(&config.data_path)?;
  info!(
    "Updated {} of {} papers in {}",
    report.updated(),
    collection.len(),
    config.data_path.display()
  );
  Ok(report)
}

#[cfg(test)]
mod tests {
  use std::fs;

  use super::*;
  use crate::summary::DEFAULT_MAX_SENTENCES;

  #[traced_test]
  #[tokio::test]
  async fn test_fetch_unreachable_writes_empty_file() {
    let dir = tempdir().unwrap();
    let config = Config::default()
      .with_api_url("http://127.0.0.1:9/api/query")
      .with_timeout(Duration::from_secs(5))
      .with_request_delay(Duration::ZERO)
      .with_data_path(dir.path().join("_data/arxiv_papers.yml"));

    let report = fetch(&config).await.unwrap();

    assert_eq!(report.fetched, 0);
    assert!(!report.is_success());
    assert_eq!(fs::read_to_string(&config.data_path).unwrap(), "papers: []\n");
    assert!(logs_contain("Error fetching papers"));
  }

  #[tokio::test]
  async fn test_fetch_rejects_invalid_config() {
    let dir = tempdir().unwrap();
    let config = Config::default().with_max_results(0).with_data_path(dir.path().join("p.yml"));

    assert!(matches!(fetch(&config).await, Err(PaperfeedError::Config(_))));
    assert!(!config.data_path.exists());
  }

  #[test]
  fn test_summarize_missing_file_writes_nothing() {
    let dir = tempdir().unwrap();
    let config = Config::default().with_data_path(dir.path().join("arxiv_papers.yml"));

    let result = summarize(&config, DEFAULT_MAX_SENTENCES);

    assert!(matches!(result, Err(PaperfeedError::MissingDataFile(_))));
    assert!(!config.data_path.exists());
  }

  #[test]
  fn test_summarize_twice_is_stable() {
    let dir = tempdir().unwrap();
    let config = Config::default().with_data_path(dir.path().join("arxiv_papers.yml"));
    let papers = vec![
      Paper::from_entry("2301.00001v1", "One", &["A"], "First. Second! Third? Fourth.", "2023"),
      Paper::from_entry("2301.00002v1", "Two", &["B"], "", "2023-01-02T00:00:00Z"),
    ];
    store::save_papers(&papers, &config.data_path).unwrap();

    let first = summarize(&config, DEFAULT_MAX_SENTENCES).unwrap();
    let after_first = fs::read_to_string(&config.data_path).unwrap();
    let second = summarize(&config, DEFAULT_MAX_SENTENCES).unwrap();
    let after_second = fs::read_to_string(&config.data_path).unwrap();

    assert_eq!(first.updated(), 2);
    assert_eq!(second.updated(), 0);
    assert_eq!(after_first, after_second);

    let loaded = store::load_papers(&config.data_path).unwrap();
    assert_eq!(loaded.papers[0].key_findings, "First. Second. Third.");
    assert_eq!(loaded.papers[1].key_findings, "Abstract not available.");
  }

  #[test]
  fn test_summarize_empty_list_succeeds() {
    let dir = tempdir().unwrap();
    let config = Config::default().with_data_path(dir.path().join("arxiv_papers.yml"));
    store::save_papers(&[], &config.data_path).unwrap();

    let report = summarize(&config, DEFAULT_MAX_SENTENCES).unwrap();
    assert_eq!(report, FindingsReport::default());
  }
}
