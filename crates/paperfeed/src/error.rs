//! Error types for the paperfeed library.
//!
//! Every fallible operation in the crate returns [`PaperfeedError`], which covers:
//! - Network and API errors
//! - Atom feed parsing
//! - Data file reading and writing
//! - Configuration loading
//!
//! # Examples
//!
//! ```no_run
//! use paperfeed::{error::PaperfeedError, store};
//!
//! match store::load_papers("_data/arxiv_papers.yml") {
//!   Ok(collection) => println!("{} papers", collection.papers.len()),
//!   Err(PaperfeedError::MissingDataFile(path)) => println!("Nothing at {}", path.display()),
//!   Err(e) => println!("Other error: {}", e),
//! }
//! ```

use thiserror::Error;

use super::*;

/// Error type alias used for the [`paperfeed`](crate) crate.
pub type Result<T> = core::result::Result<T, PaperfeedError>;

/// Errors that can occur while fetching, parsing, storing, or summarizing papers.
#[derive(Error, Debug)]
pub enum PaperfeedError {
  /// A network request failed.
  ///
  /// This can occur when:
  /// - The network is unavailable or the server is unreachable
  /// - The request times out
  /// - The API answers with a non-success status code
  #[error(transparent)]
  Network(#[from] reqwest::Error),

  /// The API response was not a well-formed Atom document.
  #[error("Failed to parse Atom feed: {0}")]
  Xml(#[from] quick_xml::de::DeError),

  /// A feed entry lacked a field every paper needs.
  ///
  /// The string parameter names the missing Atom element.
  #[error("Feed entry is missing the `{0}` element")]
  MissingField(&'static str),

  /// The data file could not be serialized or deserialized as YAML.
  #[error(transparent)]
  Yaml(#[from] serde_yaml::Error),

  /// A file system operation failed.
  ///
  /// This occurs when:
  /// - Creating the data directory fails
  /// - Reading or writing the data file fails
  /// - Permission errors occur
  #[error(transparent)]
  Path(#[from] std::io::Error),

  /// The data file the summarizer needs does not exist.
  #[error("Data file not found: {}", .0.display())]
  MissingDataFile(PathBuf),

  /// The data file exists but holds no document.
  #[error("Data file is empty: {}", .0.display())]
  EmptyDataFile(PathBuf),

  /// The data file holds a document without a `papers` key.
  #[error("No papers in data file: {}", .0.display())]
  MissingPapers(PathBuf),

  /// A configuration file could not be parsed.
  #[error(transparent)]
  TomlDe(#[from] toml::de::Error),

  /// The configuration holds a value the pipeline cannot run with.
  #[error("{0}")]
  Config(String),
}
