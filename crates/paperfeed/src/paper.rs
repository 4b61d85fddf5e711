//! The paper record shared by the fetch and summarize steps.
//!
//! A [`Paper`] is a flat set of strings so that the YAML data file stays easy to consume by
//! site generators. The helpers in this module turn raw Atom text into the normalized values
//! stored in a record:
//!
//! - [`normalize_whitespace`] collapses line breaks and runs of spaces in titles and abstracts
//! - [`extract_arxiv_id`] turns an entry id such as `http://arxiv.org/abs/2301.12345v2` into
//!   `2301.12345`
//!
//! # Examples
//!
//! ```
//! use paperfeed::paper::{extract_arxiv_id, normalize_whitespace};
//!
//! assert_eq!(extract_arxiv_id("http://arxiv.org/abs/2301.12345v2"), "2301.12345");
//! assert_eq!(normalize_whitespace("Deep   Learning\nfor   X"), "Deep Learning for X");
//! ```

use serde::{de, Deserializer};

use super::*;

/// Metadata for a single arXiv paper as persisted in the data file.
///
/// Field order here is the key order in the data file. Every field defaults to an empty string
/// when read back, and unquoted numbers, booleans and nulls are read as text, so records written
/// by older runs or edited by hand still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Paper {
  /// arXiv identifier without URL prefix or version suffix, e.g. `2301.12345`
  #[serde(deserialize_with = "scalar_text")]
  pub id:            String,
  /// Title with whitespace normalized
  #[serde(deserialize_with = "scalar_text")]
  pub title:         String,
  /// Author names in API order, joined with `", "`
  #[serde(deserialize_with = "scalar_text")]
  pub authors:       String,
  /// Abstract with whitespace normalized
  #[serde(rename = "abstract", deserialize_with = "scalar_text")]
  pub abstract_text: String,
  /// Publication date as `YYYY-MM-DD`
  #[serde(deserialize_with = "scalar_text")]
  pub published:     String,
  /// Link to the PDF
  #[serde(deserialize_with = "scalar_text")]
  pub pdf_url:       String,
  /// Link to the abstract page
  #[serde(deserialize_with = "scalar_text")]
  pub arxiv_url:     String,
  /// Extractive summary of the abstract, empty until the summarizer runs
  #[serde(deserialize_with = "scalar_text")]
  pub key_findings:  String,
}

impl Paper {
  /// Builds a record from already extracted entry values.
  ///
  /// The identifier and URLs are derived from `id_url`, the title and abstract are normalized,
  /// the authors are joined in the given order and `published` is cut down to its date part.
  /// `key_findings` starts out empty.
  pub fn from_entry<S: AsRef<str>>(
    id_url: &str,
    title: &str,
    authors: &[S],
    abstract_text: &str,
    published: &str,
  ) -> Self {
    let id = extract_arxiv_id(id_url);
    Self {
      pdf_url: pdf_url(&id),
      arxiv_url: arxiv_url(&id),
      id,
      title: normalize_whitespace(title),
      authors: authors.iter().map(AsRef::as_ref).collect::<Vec<&str>>().join(", "),
      abstract_text: normalize_whitespace(abstract_text),
      published: published.chars().take(10).collect(),
      key_findings: String::new(),
    }
  }

  /// Whether the summarizer still needs to fill in `key_findings`.
  pub fn needs_findings(&self) -> bool { self.key_findings.is_empty() }
}

/// Reads any YAML scalar as text. Null, such as an empty `key_findings:`, becomes `""`.
fn scalar_text<'de, D>(deserializer: D) -> core::result::Result<String, D::Error>
where D: Deserializer<'de> {
  match serde_yaml::Value::deserialize(deserializer)? {
    serde_yaml::Value::Null => Ok(String::new()),
    serde_yaml::Value::Bool(b) => Ok(b.to_string()),
    serde_yaml::Value::Number(n) => Ok(n.to_string()),
    serde_yaml::Value::String(s) => Ok(s),
    other => Err(de::Error::custom(format!("expected a scalar, found {other:?}"))),
  }
}

/// Collapses every run of whitespace (including newlines) into a single space and trims both
/// ends.
pub fn normalize_whitespace(text: &str) -> String {
  text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Extracts the bare arXiv identifier from an Atom entry id.
///
/// Only the last path segment is kept and a trailing version marker (`v` followed by digits) is
/// removed. Inputs without a version marker pass through unchanged.
pub fn extract_arxiv_id(id_url: &str) -> String {
  lazy_static! {
    static ref VERSION: Regex = Regex::new(r"v\d+$").unwrap();
  }
  let segment = id_url.trim().trim_end_matches('/').rsplit('/').next().unwrap_or_default();
  VERSION.replace(segment, "").into_owned()
}

/// PDF link for a bare arXiv identifier.
pub fn pdf_url(id: &str) -> String { format!("http://arxiv.org/pdf/{id}") }

/// Abstract page link for a bare arXiv identifier.
pub fn arxiv_url(id: &str) -> String { format!("http://arxiv.org/abs/{id}") }
