//! Atom feed parsing for arXiv API responses.
//!
//! The arXiv API answers with an Atom document (`http://www.w3.org/2005/Atom`) holding one
//! `entry` element per paper. Only the elements a [`Paper`] needs are deserialized; everything
//! else in the feed (links, categories, `arxiv:` extensions) is ignored.
//!
//! A document that cannot be deserialized at all is an error. An entry that lacks one of its
//! required elements is skipped with a warning and the rest of the feed is still returned.

use quick_xml::de::from_str;

use super::*;

/// Internal representation of the arXiv API's Atom feed response.
///
/// Repeated elements are collected wherever they appear, so `entry` and `author` may be
/// interleaved with other elements.
#[derive(Debug, Deserialize)]
struct Feed {
  /// A `Feed` from arXiv may contain any number of `Entry`s, including none
  #[serde(rename = "entry", default)]
  entries: Vec<Entry>,
}

/// Internal representation of a paper entry from arXiv's API response.
///
/// Every element is optional at this level so that one incomplete entry cannot fail the whole
/// feed.
#[derive(Debug, Deserialize)]
struct Entry {
  /// Abstract page URL, e.g. `http://arxiv.org/abs/2301.07041v2`
  id:        Option<String>,
  /// Paper title (may span several lines)
  title:     Option<String>,
  /// List of paper authors
  #[serde(rename = "author", default)]
  authors:   Vec<Author>,
  /// Paper abstract (may span several lines)
  summary:   Option<String>,
  /// Timestamp of the first version, e.g. `2023-01-17T18:42:10Z`
  published: Option<String>,
}

/// Internal representation of an author from arXiv's API response.
#[derive(Debug, Deserialize)]
struct Author {
  /// Author's display name
  name: Option<String>,
}

impl TryFrom<Entry> for Paper {
  type Error = PaperfeedError;

  fn try_from(entry: Entry) -> Result<Self> {
    let id = entry.id.ok_or(PaperfeedError::MissingField("id"))?;
    let title = entry.title.ok_or(PaperfeedError::MissingField("title"))?;
    let summary = entry.summary.ok_or(PaperfeedError::MissingField("summary"))?;
    let published = entry.published.ok_or(PaperfeedError::MissingField("published"))?;
    let authors = entry
      .authors
      .into_iter()
      .map(|author| author.name.ok_or(PaperfeedError::MissingField("author/name")))
      .collect::<Result<Vec<_>>>()?;

    Ok(Paper::from_entry(&id, &title, &authors, &summary, &published))
  }
}

/// Parses an arXiv Atom response into papers, in feed order.
///
/// # Errors
///
/// Returns [`PaperfeedError::Xml`] if the document is not a well-formed feed. Entries missing
/// `id`, `title`, `summary`, `published` or an author's `name` are logged and skipped rather than
/// reported as errors.
///
/// # Examples
///
/// ```
/// use paperfeed::retriever::parse_papers;
///
/// let xml = r#"<feed xmlns="http://www.w3.org/2005/Atom">
///   <entry>
///     <id>http://arxiv.org/abs/2301.12345v2</id>
///     <published>2023-01-30T12:00:00Z</published>
///     <title>Deep   Learning
///       for   X</title>
///     <summary>We study X. It works!</summary>
///     <author><name>Ada Lovelace</name></author>
///   </entry>
/// </feed>"#;
///
/// let papers = parse_papers(xml).unwrap();
/// assert_eq!(papers[0].id, "2301.12345");
/// assert_eq!(papers[0].title, "Deep Learning for X");
/// ```
pub fn parse_papers(xml: &str) -> Result<Vec<Paper>> {
  let feed: Feed = from_str(xml)?;
  debug!("Feed holds {} entries", feed.entries.len());

  let mut papers = Vec::with_capacity(feed.entries.len());
  for (index, entry) in feed.entries.into_iter().enumerate() {
    let id = entry.id.clone().unwrap_or_else(|| format!("#{index}"));
    match Paper::try_from(entry) {
      Ok(paper) => papers.push(paper),
      Err(e) => warn!("Skipping feed entry {id}: {e}"),
    }
  }
  Ok(papers)
}
