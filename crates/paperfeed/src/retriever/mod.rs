//! Client for the arXiv query API.
//!
//! The client issues a single listing request per run: the newest submissions in one category,
//! sorted by submission date. The raw Atom response is handed to [`parse_papers`] to produce
//! [`Paper`] records.
//!
//! arXiv asks API users to pause between calls, so [`ArxivClient::fetch_papers`] sleeps for the
//! configured delay after every successful response. Failed requests return immediately and are
//! never retried.
//!
//! # Examples
//!
//! ```no_run
//! use paperfeed::{retriever::{parse_papers, ArxivClient}, Config};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ArxivClient::new(&Config::default())?;
//! let xml = client.fetch_papers("cs.AI", 10).await?;
//! let papers = parse_papers(&xml)?;
//! println!("Fetched {} papers", papers.len());
//! # Ok(())
//! # }
//! ```

use super::*;

pub mod feed;

pub use feed::parse_papers;

/// HTTP client bound to one arXiv API endpoint.
#[derive(Debug, Clone)]
pub struct ArxivClient {
  /// Internal web client, carrying the request timeout.
  client:        reqwest::Client,
  /// Endpoint the query parameters are appended to.
  api_url:       String,
  /// Pause taken after each successful response.
  request_delay: Duration,
}

impl ArxivClient {
  /// Creates a client for the endpoint, timeout and delay in `config`.
  ///
  /// # Errors
  ///
  /// Returns [`PaperfeedError::Network`] if the underlying HTTP client cannot be built.
  pub fn new(config: &Config) -> Result<Self> {
    let client = reqwest::Client::builder().timeout(config.timeout()).build()?;
    Ok(Self {
      client,
      api_url: config.api_url.clone(),
      request_delay: config.request_delay(),
    })
  }

  /// Fetches the newest `max_results` submissions in `category` as raw Atom XML.
  ///
  /// # Errors
  ///
  /// This function will return an error if:
  /// - The request cannot be sent or times out
  /// - The API answers with a non-success status
  /// - The response body cannot be read
  pub async fn fetch_papers(&self, category: &str, max_results: usize) -> Result<String> {
    let query = [
      ("search_query", format!("cat:{category}")),
      ("sortBy", "submittedDate".to_string()),
      ("sortOrder", "descending".to_string()),
      ("max_results", max_results.to_string()),
    ];

    debug!("Fetching {max_results} papers in {category} from {}", self.api_url);

    let response = self.client.get(&self.api_url).query(&query).send().await?;
    let response = response.error_for_status()?;
    let body = response.text().await?;

    debug!("arXiv response: {} bytes", body.len());
    trace!("arXiv response body: {body}");

    if !self.request_delay.is_zero() {
      debug!("Waiting {:?} before the next API call", self.request_delay);
      tokio::time::sleep(self.request_delay).await;
    }

    Ok(body)
  }
}
