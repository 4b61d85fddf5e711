use super::*;

pub mod fetch;
pub mod summarize;

pub use fetch::{fetch, FetchArgs};
pub use summarize::{summarize, SummarizeArgs};

/// Available commands for the CLI
#[derive(Subcommand, Clone)]
pub enum Commands {
  /// Fetch the newest papers in a category and overwrite the data file with them
  Fetch(FetchArgs),

  /// Fill in key findings for every paper in the data file that has none yet
  Summarize(SummarizeArgs),
}
