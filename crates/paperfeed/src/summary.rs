//! Extractive "key findings" for paper abstracts.
//!
//! The summary of an abstract is simply its leading sentences. Sentence boundaries are the
//! literal characters `.`, `?` and `!`; there is no handling of abbreviations or decimal
//! numbers, so `"e.g. 3.5"` splits into several units.

use super::*;

/// Number of leading sentences kept when no other count is given.
pub const DEFAULT_MAX_SENTENCES: usize = 3;

/// Text stored in `key_findings` when a paper has no abstract to summarize.
pub const ABSTRACT_NOT_AVAILABLE: &str = "Abstract not available.";

/// Tally of one pass over a [`PaperCollection`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FindingsReport {
  /// Papers that received findings extracted from their abstract
  pub generated:    usize,
  /// Papers without an abstract that received [`ABSTRACT_NOT_AVAILABLE`]
  pub placeholders: usize,
  /// Papers that already had findings and were left alone
  pub unchanged:    usize,
}

impl FindingsReport {
  /// Papers whose `key_findings` changed during the pass.
  pub fn updated(&self) -> usize { self.generated + self.placeholders }
}

/// Returns the first `max_sentences` sentences of `abstract_text`, joined with `". "` and ending
/// in a period.
///
/// `?` and `!` count as sentence ends just like `.`, and are replaced by it. Empty units are
/// dropped. An abstract without any sentence text yields an empty string.
///
/// # Examples
///
/// ```
/// use paperfeed::summary::extract_key_sentences;
///
/// assert_eq!(extract_key_sentences("A. B! C? D.", 3), "A. B. C.");
/// assert_eq!(extract_key_sentences("No terminator", 3), "No terminator.");
/// assert_eq!(extract_key_sentences("", 3), "");
/// ```
pub fn extract_key_sentences(abstract_text: &str, max_sentences: usize) -> String {
  let sentences = abstract_text
    .split(['.', '?', '!'])
    .map(str::trim)
    .filter(|sentence| !sentence.is_empty())
    .take(max_sentences)
    .collect::<Vec<_>>();

  let mut findings = sentences.join(". ");
  if !findings.is_empty() && !findings.ends_with('.') {
    findings.push('.');
  }
  findings
}

impl PaperCollection {
  /// Fills `key_findings` for every paper that has none yet.
  ///
  /// Papers with an abstract get [`extract_key_sentences`]; papers without one get
  /// [`ABSTRACT_NOT_AVAILABLE`]. Papers that already carry findings are never recomputed, so
  /// running this twice changes nothing the second time.
  pub fn fill_key_findings(&mut self, max_sentences: usize) -> FindingsReport {
    let mut report = FindingsReport::default();
    for paper in &mut self.papers {
      if !paper.needs_findings() {
        report.unchanged += 1;
        continue;
      }

      if paper.abstract_text.is_empty() {
        paper.key_findings = ABSTRACT_NOT_AVAILABLE.to_string();
        report.placeholders += 1;
      } else {
        paper.key_findings = extract_key_sentences(&paper.abstract_text, max_sentences);
        report.generated += 1;
      }
      trace!("Key findings for {}: {}", paper.id, paper.key_findings);
    }
    report
  }
}
