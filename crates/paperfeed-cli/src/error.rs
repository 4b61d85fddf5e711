//! Error types for the paperfeed CLI application.
//!
//! Library failures are wrapped transparently so their message reaches the user unchanged. The
//! CLI adds the outcomes that are only failures from the point of view of a batch run, such as
//! a fetch that produced no papers.

use thiserror::Error;

use super::*;

/// Error type alias used throughout the CLI.
pub type Result<T> = core::result::Result<T, PaperfeedCliError>;

/// Errors that end a CLI run with a non-zero exit status.
#[derive(Error, Debug)]
pub enum PaperfeedCliError {
  /// Errors from the underlying paperfeed library
  #[error(transparent)]
  Paperfeed(#[from] PaperfeedError),

  /// The fetch completed but the API returned no usable papers.
  ///
  /// An empty data file has still been written at the contained path.
  #[error("No papers fetched, wrote an empty list to {}", .0.display())]
  NoPapersFetched(PathBuf),
}
