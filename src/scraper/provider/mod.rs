pub mod tmdb;

mod http;
mod traits;

pub use http::HttpClient;
pub use tmdb::TmdbProvider;
pub use traits::MetadataProvider;

use serde::Deserialize;
use std::time::Duration;

/// Provider base configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// API key
    pub api_key: Option<String>,
    /// Base URL
    pub base_url: String,
    /// Preferred language (e.g. "en-US")
    pub language: Option<String>,
    /// Whether adult titles may appear in search results
    pub include_adult: bool,
    /// HTTP request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: tmdb::TMDB_BASE_URL.to_string(),
            language: Some("en-US".to_string()),
            include_adult: false,
            timeout_secs: 7,
        }
    }
}

impl ProviderConfig {
    /// Create new configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set API key
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Request timeout
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
