//! Runtime configuration for the fetch and summarize pipeline.
//!
//! A [`Config`] can be built from its defaults with the `with_*` builder methods, or loaded
//! from a TOML file in which every key is optional:
//!
//! ```toml
//! api_url            = "http://export.arxiv.org/api/query"
//! category           = "cs.AI"
//! max_results        = 10
//! timeout_secs       = 30
//! request_delay_secs = 3
//! data_path          = "_data/arxiv_papers.yml"
//! ```

use super::*;

/// Endpoint of the arXiv query API.
pub const DEFAULT_API_URL: &str = "http://export.arxiv.org/api/query";
/// Category queried when none is given.
pub const DEFAULT_CATEGORY: &str = "cs.AI";
/// Number of papers requested when no count is given.
pub const DEFAULT_MAX_RESULTS: usize = 10;
/// Upper bound on a single API request, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Pause after a successful API response, in seconds, to respect the API's rate limit.
pub const DEFAULT_REQUEST_DELAY_SECS: u64 = 3;
/// Location of the data file shared by both pipeline steps.
pub const DEFAULT_DATA_PATH: &str = "_data/arxiv_papers.yml";

/// Settings shared by the fetch and summarize steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
  /// Base URL the query parameters are appended to
  pub api_url:            String,
  /// arXiv category to query, e.g. `cs.AI`
  pub category:           String,
  /// Number of entries requested from the API
  pub max_results:        usize,
  /// Request timeout in seconds
  pub timeout_secs:       u64,
  /// Courtesy pause after a successful response, in seconds
  pub request_delay_secs: u64,
  /// YAML data file written by the fetcher and updated by the summarizer
  pub data_path:          PathBuf,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      api_url:            DEFAULT_API_URL.to_string(),
      category:           DEFAULT_CATEGORY.to_string(),
      max_results:        DEFAULT_MAX_RESULTS,
      timeout_secs:       DEFAULT_TIMEOUT_SECS,
      request_delay_secs: DEFAULT_REQUEST_DELAY_SECS,
      data_path:          PathBuf::from(DEFAULT_DATA_PATH),
    }
  }
}

impl Config {
  /// Loads a configuration from a TOML file, filling absent keys with defaults.
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be read, is not valid TOML, contains unknown keys, or
  /// fails [`Config::validate`].
  pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    debug!("Loading configuration from {}", path.display());
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
  }

  /// Checks that the configuration can drive a fetch.
  pub fn validate(&self) -> Result<()> {
    if self.api_url.trim().is_empty() {
      return Err(PaperfeedError::Config("`api_url` must not be empty".to_string()));
    }
    if self.category.trim().is_empty() {
      return Err(PaperfeedError::Config("`category` must not be empty".to_string()));
    }
    if self.max_results == 0 {
      return Err(PaperfeedError::Config("`max_results` must be at least 1".to_string()));
    }
    Ok(())
  }

  /// Sets the API endpoint.
  pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
    self.api_url = api_url.into();
    self
  }

  /// Sets the arXiv category to query.
  pub fn with_category(mut self, category: impl Into<String>) -> Self {
    self.category = category.into();
    self
  }

  /// Sets the number of entries requested.
  pub fn with_max_results(mut self, max_results: usize) -> Self {
    self.max_results = max_results;
    self
  }

  /// Sets the request timeout, truncated to whole seconds.
  pub fn with_timeout(mut self, timeout: Duration) -> Self {
    self.timeout_secs = timeout.as_secs();
    self
  }

  /// Sets the courtesy pause, truncated to whole seconds.
  pub fn with_request_delay(mut self, delay: Duration) -> Self {
    self.request_delay_secs = delay.as_secs();
    self
  }

  /// Sets the data file location.
  pub fn with_data_path(mut self, data_path: impl AsRef<Path>) -> Self {
    self.data_path = data_path.as_ref().to_path_buf();
    self
  }

  /// Request timeout as a [`Duration`].
  pub fn timeout(&self) -> Duration { Duration::from_secs(self.timeout_secs) }

  /// Courtesy pause as a [`Duration`].
  pub fn request_delay(&self) -> Duration { Duration::from_secs(self.request_delay_secs) }
}
