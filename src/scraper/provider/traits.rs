use crate::scraper::types::{CatalogRecord, SeasonRecord};
use async_trait::async_trait;

/// Metadata source consulted by the poster resolver
///
/// Implementations absorb their own failures: a transport error, a non-2xx
/// status or a malformed payload comes back as an empty list or `None`.
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Provider identifier (e.g., "tmdb")
    fn id(&self) -> &'static str;

    /// Search movies by title, optionally narrowed by release year
    async fn search_movies(&self, query: &str, year: Option<i32>) -> Vec<CatalogRecord>;

    /// Search TV shows by title
    async fn search_shows(&self, query: &str) -> Vec<CatalogRecord>;

    /// Look up one season of a show
    async fn get_season(&self, show_id: &str, season: u32) -> Option<SeasonRecord>;
}
