mod matcher;
mod parser;
mod provider;
mod resolver;
mod types;

pub use matcher::{Matcher, ScoreBreakdown, ScoredRecord};
pub use parser::{ForcedType, ParsedQuery, Parser};
pub use provider::{HttpClient, MetadataProvider, ProviderConfig, TmdbProvider};
pub use resolver::{
    FALLBACK_POSTER, MatchResult, PosterResolver, Provenance, ResolverConfig, TMDB_IMAGE_BASE,
};
pub use types::{CatalogRecord, MediaType, SeasonRecord};

use std::sync::Arc;

/// Scraper result type
pub type Result<T> = std::result::Result<T, ScraperError>;

/// Scraper error types
#[derive(Debug, thiserror::Error)]
pub enum ScraperError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Create a TMDB-backed resolver from provider and resolver settings
pub fn create_default_resolver(
    provider: &ProviderConfig,
    resolver: ResolverConfig,
) -> Result<PosterResolver> {
    let tmdb = TmdbProvider::new(provider)?;
    Ok(PosterResolver::with_config(Arc::new(tmdb), resolver))
}
