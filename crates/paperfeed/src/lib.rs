//! Recent-paper feed generation from the arXiv API.
//!
//! `paperfeed` is a small batch library that powers a two-step pipeline:
//!
//! - **Fetch**: query arXiv for the newest submissions in a category, parse the Atom response
//!   into [`Paper`] records and write them to a YAML data file
//! - **Summarize**: read that data file back and fill in a short extractive summary (the "key
//!   findings") for every paper that does not have one yet
//!
//! The data file is the only handoff between the two steps, so each step can be scheduled
//! independently and re-run safely.
//!
//! # Getting Started
//!
//! ```no_run
//! use paperfeed::{pipeline, prelude::*, Config};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), PaperfeedError> {
//!   let config = Config::default().with_category("cs.LG").with_max_results(25);
//!
//!   let report = pipeline::fetch(&config).await?;
//!   println!("Fetched {} papers", report.fetched);
//!
//!   let findings = pipeline::summarize(&config, paperfeed::summary::DEFAULT_MAX_SENTENCES)?;
//!   println!("Generated key findings for {} papers", findings.generated);
//!   Ok(())
//! }
//! ```
//!
//! # Module Organization
//!
//! - [`paper`]: The [`Paper`] record and its text helpers
//! - [`retriever`]: HTTP access to the arXiv API and Atom feed parsing
//! - [`store`]: Reading and writing the YAML data file
//! - [`summary`]: Sentence extraction and key findings generation
//! - [`pipeline`]: The fetch and summarize batch flows
//! - [`config`]: Runtime configuration
//! - [`error`]: The crate error type

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::{
  path::{Path, PathBuf},
  time::Duration,
};

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, trace, warn};
#[cfg(test)]
use {tempfile::tempdir, tracing_test::traced_test};

pub mod config;
pub mod error;
pub mod paper;
pub mod pipeline;
pub mod retriever;
pub mod store;
pub mod summary;

pub use crate::{config::Config, paper::Paper};
use crate::{error::*, store::PaperCollection};

/// Common traits and types for ergonomic imports.
///
/// ```no_run
/// use paperfeed::prelude::*;
///
/// fn load() -> Result<PaperCollection, PaperfeedError> {
///   paperfeed::store::load_papers("_data/arxiv_papers.yml")
/// }
/// ```
pub mod prelude {
  pub use crate::{
    error::PaperfeedError, paper::Paper, retriever::ArxivClient, store::PaperCollection, Config,
  };
}
