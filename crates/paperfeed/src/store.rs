//! Persistence of papers in the YAML data file.
//!
//! The data file is the handoff between the fetch and summarize steps and is read by the site
//! generator, so its shape is fixed: one top-level `papers` key holding a block-style sequence
//! of records whose keys appear in [`Paper`] field order. Non-ASCII text is written as UTF-8,
//! never escaped.
//!
//! ```yaml
//! papers:
//! - id: '2301.12345'
//!   title: Deep Learning for X
//!   authors: Ada Lovelace, Alan Turing
//!   abstract: We study X. It works.
//!   published: '2023-01-30'
//!   pdf_url: http://arxiv.org/pdf/2301.12345
//!   arxiv_url: http://arxiv.org/abs/2301.12345
//!   key_findings: ''
//! ```
//!
//! Plain scalars that a YAML 1.1 reader would load as a date, boolean, number or null (for
//! example `2023-01-30`, `yes` or `on`) are written single-quoted, so site generators on YAML 1.1
//! parsers still see strings.
//!
//! Every write replaces the whole file.

use std::fs;

use regex::Captures;

use super::*;

/// Top-level document of the data file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperCollection {
  /// Papers in the order the API returned them
  pub papers: Vec<Paper>,
}

impl From<Vec<Paper>> for PaperCollection {
  fn from(papers: Vec<Paper>) -> Self { Self { papers } }
}

impl PaperCollection {
  /// Number of papers in the collection.
  pub fn len(&self) -> usize { self.papers.len() }

  /// Whether the collection holds no papers.
  pub fn is_empty(&self) -> bool { self.papers.is_empty() }

  /// Writes the collection to `path`, see [`save_papers`].
  pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
      fs::create_dir_all(parent)?;
    }

    let yaml = quote_ambiguous_scalars(&serde_yaml::to_string(self)?);
    fs::write(path, yaml)?;
    debug!("Wrote {} papers to {}", self.len(), path.display());
    Ok(())
  }
}

/// Single-quotes record values that YAML 1.1 would not read back as strings.
///
/// `serde_yaml` only quotes what YAML 1.2 would misread. Quoted values and block scalars are left
/// as they are.
fn quote_ambiguous_scalars(yaml: &str) -> String {
  lazy_static! {
    static ref FIELD: Regex = Regex::new(
      r"(?m)^(- |  )(id|title|authors|abstract|published|pdf_url|arxiv_url|key_findings): (.+)$"
    )
    .unwrap();
    static ref AMBIGUOUS: Regex = Regex::new(concat!(
      r"^(?:",
      r"y|Y|yes|Yes|YES|n|N|no|No|NO|true|True|TRUE|false|False|FALSE|on|On|ON|off|Off|OFF",
      r"|~|null|Null|NULL",
      r"|[-+]?0b[01_]+|[-+]?0x[0-9a-fA-F_]+|[-+]?[0-9][0-9_]*(?::[0-5]?[0-9])*",
      r"|[-+]?(?:[0-9][0-9_]*)?\.[0-9_]*(?:[eE][-+]?[0-9]+)?",
      r"|[-+]?[0-9][0-9_]*(?::[0-5]?[0-9])+\.[0-9_]*",
      r"|[-+]?\.(?:inf|Inf|INF)|\.(?:nan|NaN|NAN)",
      r"|[0-9]{4}-[0-9]{1,2}-[0-9]{1,2}(?:[Tt ][0-9:.+\-Zz ]*)?",
      r")$"
    ))
    .unwrap();
  }

  FIELD
    .replace_all(yaml, |caps: &Captures| {
      if AMBIGUOUS.is_match(&caps[3]) {
        format!("{}{}: '{}'", &caps[1], &caps[2], &caps[3])
      } else {
        caps[0].to_string()
      }
    })
    .into_owned()
}

/// Writes `papers` to `path` as `{papers: [...]}`, creating parent directories as needed and
/// overwriting any existing file.
///
/// # Errors
///
/// Returns [`PaperfeedError::Path`] if the directory or file cannot be written.
pub fn save_papers(papers: &[Paper], path: impl AsRef<Path>) -> Result<()> {
  PaperCollection::from(papers.to_vec()).save(path)
}

/// Reads the data file at `path`.
///
/// # Errors
///
/// - [`PaperfeedError::MissingDataFile`] if nothing exists at `path`
/// - [`PaperfeedError::EmptyDataFile`] if the file holds no YAML document
/// - [`PaperfeedError::MissingPapers`] if the document has no `papers` key
/// - [`PaperfeedError::Yaml`] if the file is not valid YAML or `papers` is not a list of records
/// - [`PaperfeedError::Path`] for any other read failure
pub fn load_papers(path: impl AsRef<Path>) -> Result<PaperCollection> {
  let path = path.as_ref();
  let content = match fs::read_to_string(path) {
    Ok(content) => content,
    Err(e) if e.kind() == std::io::ErrorKind::NotFound =>
      return Err(PaperfeedError::MissingDataFile(path.to_path_buf())),
    Err(e) => return Err(e.into()),
  };

  if content.trim().is_empty() {
    return Err(PaperfeedError::EmptyDataFile(path.to_path_buf()));
  }

  let document: serde_yaml::Value = serde_yaml::from_str(&content)?;
  let has_papers = match &document {
    serde_yaml::Value::Null => return Err(PaperfeedError::EmptyDataFile(path.to_path_buf())),
    serde_yaml::Value::Mapping(map) => map.contains_key("papers"),
    _ => false,
  };
  if !has_papers {
    return Err(PaperfeedError::MissingPapers(path.to_path_buf()));
  }

  let collection: PaperCollection = serde_yaml::from_value(document)?;
  debug!("Read {} papers from {}", collection.len(), path.display());
  Ok(collection)
}
