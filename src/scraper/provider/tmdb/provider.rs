use super::api_types::{MovieResult, SearchResponse, SeasonDetails, TvResult};
use crate::scraper::{
    Result, ScraperError,
    provider::{HttpClient, MetadataProvider, ProviderConfig},
    types::{CatalogRecord, MediaType, SeasonRecord},
};
use async_trait::async_trait;
use tracing::{debug, warn};

pub const TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";

pub struct TmdbProvider {
    client: HttpClient,
    api_key: String,
    language: Option<String>,
    include_adult: bool,
}

impl TmdbProvider {
    /// Create a provider from explicit configuration
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| ScraperError::Config("TMDB API key is not configured".to_string()))?;

        Ok(Self {
            client: HttpClient::new(&config.base_url, config.timeout())?,
            api_key: api_key.to_string(),
            language: config.language.clone(),
            include_adult: config.include_adult,
        })
    }

    async fn request<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        extra_params: &[(&str, &str)],
    ) -> Result<T> {
        let mut params: Vec<(&str, &str)> = vec![("api_key", self.api_key.as_str())];
        if let Some(ref language) = self.language {
            params.push(("language", language.as_str()));
        }
        params.extend_from_slice(extra_params);

        self.client.get_with_params(endpoint, &params).await
    }

    async fn fetch_movies(&self, query: &str, year: Option<i32>) -> Result<Vec<CatalogRecord>> {
        let include_adult = self.include_adult.to_string();
        let mut params = vec![
            ("query", query),
            ("page", "1"),
            ("include_adult", include_adult.as_str()),
        ];
        let year_str;
        if let Some(year) = year {
            year_str = year.to_string();
            params.push(("year", year_str.as_str()));
        }

        let response: SearchResponse<MovieResult> = self.request("/search/movie", &params).await?;
        debug!(
            "TMDB movie search '{}' returned {:?} results",
            query, response.total_results
        );

        Ok(response
            .results
            .into_iter()
            .map(Self::movie_result_to_record)
            .collect())
    }

    async fn fetch_shows(&self, query: &str) -> Result<Vec<CatalogRecord>> {
        let include_adult = self.include_adult.to_string();
        let params = [
            ("query", query),
            ("page", "1"),
            ("include_adult", include_adult.as_str()),
        ];

        let response: SearchResponse<TvResult> = self.request("/search/tv", &params).await?;
        debug!(
            "TMDB tv search '{}' returned {:?} results",
            query, response.total_results
        );

        Ok(response
            .results
            .into_iter()
            .map(Self::tv_result_to_record)
            .collect())
    }

    async fn fetch_season(&self, show_id: &str, season: u32) -> Result<SeasonRecord> {
        let endpoint = format!("/tv/{show_id}/season/{season}");
        let details: SeasonDetails = self.request(&endpoint, &[]).await?;

        Ok(SeasonRecord {
            season_number: details.season_number,
            name: details.name,
            poster_path: details.poster_path,
        })
    }

    fn movie_result_to_record(movie: MovieResult) -> CatalogRecord {
        CatalogRecord {
            id: movie.id.map(|id| id.to_string()),
            title: movie.title,
            media_type: MediaType::Movie,
            year: Self::parse_year(movie.release_date.as_deref()),
            popularity: movie.popularity.unwrap_or_default().max(0.0),
            vote_count: Self::clamp_votes(movie.vote_count),
            poster_path: movie.poster_path,
        }
    }

    fn tv_result_to_record(tv: TvResult) -> CatalogRecord {
        CatalogRecord {
            id: tv.id.map(|id| id.to_string()),
            title: tv.name,
            media_type: MediaType::Tv,
            year: Self::parse_year(tv.first_air_date.as_deref()),
            popularity: tv.popularity.unwrap_or_default().max(0.0),
            vote_count: Self::clamp_votes(tv.vote_count),
            poster_path: tv.poster_path,
        }
    }

    /// Year from a "YYYY-MM-DD" date
    fn parse_year(date: Option<&str>) -> Option<i32> {
        date.and_then(|d| d.get(..4)).and_then(|y| y.parse().ok())
    }

    fn clamp_votes(votes: Option<i64>) -> u32 {
        votes
            .unwrap_or_default()
            .clamp(0, i64::from(u32::MAX))
            .try_into()
            .unwrap_or(u32::MAX)
    }
}

#[async_trait]
impl MetadataProvider for TmdbProvider {
    fn id(&self) -> &'static str {
        "tmdb"
    }

    async fn search_movies(&self, query: &str, year: Option<i32>) -> Vec<CatalogRecord> {
        self.fetch_movies(query, year).await.unwrap_or_else(|e| {
            warn!("TMDB movie search failed for '{}': {}", query, e);
            Vec::new()
        })
    }

    async fn search_shows(&self, query: &str) -> Vec<CatalogRecord> {
        self.fetch_shows(query).await.unwrap_or_else(|e| {
            warn!("TMDB tv search failed for '{}': {}", query, e);
            Vec::new()
        })
    }

    async fn get_season(&self, show_id: &str, season: u32) -> Option<SeasonRecord> {
        match self.fetch_season(show_id, season).await {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(
                    "TMDB season lookup failed for tv_id={} season={}: {}",
                    show_id, season, e
                );
                None
            }
        }
    }
}
