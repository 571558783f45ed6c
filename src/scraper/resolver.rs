use crate::scraper::{
    matcher::Matcher,
    parser::{ForcedType, ParsedQuery, Parser},
    provider::MetadataProvider,
};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Placeholder returned when nothing yields a poster
pub const FALLBACK_POSTER: &str = "https://cdn-icons-png.flaticon.com/512/565/565547.png";
/// Image host prefix for provider-relative poster paths
pub const TMDB_IMAGE_BASE: &str = "https://image.tmdb.org/t/p/w500";

/// Poster resolver configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Prefix joined with relative poster paths
    pub image_base: String,
    /// URL returned when no candidate has a poster
    pub fallback_poster: String,
    /// Try TV when a forced movie search finds no poster
    pub forced_movie_falls_through: bool,
    /// Try movies when a forced TV search finds no poster
    pub forced_tv_falls_through: bool,
    /// Upper bound for a single provider call, in milliseconds
    pub call_timeout_ms: u64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            image_base: TMDB_IMAGE_BASE.to_string(),
            fallback_poster: FALLBACK_POSTER.to_string(),
            forced_movie_falls_through: true,
            forced_tv_falls_through: true,
            call_timeout_ms: 10_000,
        }
    }
}

impl ResolverConfig {
    /// Build an absolute poster URL from a relative image path
    #[must_use]
    pub fn poster_url(&self, path: Option<&str>) -> Option<String> {
        let path = path.map(str::trim).filter(|p| !p.is_empty())?;
        let base = self.image_base.trim_end_matches('/');

        if path.starts_with('/') {
            Some(format!("{base}{path}"))
        } else {
            Some(format!("{base}/{path}"))
        }
    }

    /// Fallback URL, never empty
    #[must_use]
    pub fn fallback_url(&self) -> &str {
        if self.fallback_poster.trim().is_empty() {
            FALLBACK_POSTER
        } else {
            &self.fallback_poster
        }
    }

    #[must_use]
    pub const fn call_timeout(&self) -> Duration {
        Duration::from_millis(self.call_timeout_ms)
    }
}

/// Which strategy produced the poster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    Season,
    Show,
    Movie,
    Fallback,
}

/// Result of a resolve operation
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    /// Poster URL, never empty
    pub poster_url: String,
    pub provenance: Provenance,
    /// Title of the catalog record the poster came from
    pub matched_title: Option<String>,
    /// Normalized query
    pub query: ParsedQuery,
}

impl MatchResult {
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.provenance == Provenance::Fallback
    }
}

/// One provider strategy in a resolution plan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Movie,
    Show { with_season: bool },
}

struct Hit {
    poster_url: String,
    provenance: Provenance,
    title: Option<String>,
}

/// Resolves raw titles to poster URLs
///
/// Holds no mutable state, so one resolver can serve concurrent callers.
/// A single resolve issues at most one movie search, one TV search and one
/// season lookup, in that dependency order.
pub struct PosterResolver {
    provider: Arc<dyn MetadataProvider>,
    config: ResolverConfig,
}

impl PosterResolver {
    /// Create a resolver with default configuration
    pub fn new(provider: Arc<dyn MetadataProvider>) -> Self {
        Self::with_config(provider, ResolverConfig::default())
    }

    /// Create with custom configuration
    pub fn with_config(provider: Arc<dyn MetadataProvider>, config: ResolverConfig) -> Self {
        Self { provider, config }
    }

    #[must_use]
    pub const fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve a raw title to a poster URL
    pub async fn resolve_url(&self, raw_title: &str) -> String {
        self.resolve(raw_title).await.poster_url
    }

    /// Resolve a raw title, keeping provenance
    pub async fn resolve(&self, raw_title: &str) -> MatchResult {
        self.resolve_query(Parser::normalize(raw_title)).await
    }

    /// Resolve an already normalized query
    pub async fn resolve_query(&self, query: ParsedQuery) -> MatchResult {
        if !query.is_searchable() {
            debug!(
                "Nothing searchable in '{}', using fallback poster",
                query.original_title
            );
            return self.fallback(query);
        }

        info!(
            "Resolving poster: '{}' (year: {:?}, season: {:?}, type: {:?})",
            query.clean_title, query.year, query.season_number, query.forced_type
        );

        for stage in self.plan(query.forced_type) {
            let hit = match stage {
                Stage::Movie => self.try_movie(&query).await,
                Stage::Show { with_season } => self.try_show(&query, with_season).await,
            };

            if let Some(hit) = hit {
                debug!("Resolved '{}' via {:?}", query.clean_title, hit.provenance);
                return MatchResult {
                    poster_url: hit.poster_url,
                    provenance: hit.provenance,
                    matched_title: hit.title,
                    query,
                };
            }
        }

        info!("No poster found for '{}', using fallback", query.clean_title);
        self.fallback(query)
    }

    /// Ordered strategies for a forced type
    fn plan(&self, forced_type: ForcedType) -> Vec<Stage> {
        match forced_type {
            ForcedType::Movie => {
                let mut stages = vec![Stage::Movie];
                if self.config.forced_movie_falls_through {
                    stages.push(Stage::Show { with_season: false });
                }
                stages
            }
            ForcedType::Tv => {
                let mut stages = vec![Stage::Show { with_season: true }];
                if self.config.forced_tv_falls_through {
                    stages.push(Stage::Movie);
                }
                stages
            }
            // Movies first: show titles collide with partial movie titles less often
            ForcedType::Unspecified => vec![Stage::Movie, Stage::Show { with_season: true }],
        }
    }

    async fn try_movie(&self, query: &ParsedQuery) -> Option<Hit> {
        let movies = self
            .bounded(
                "movie search",
                self.provider.search_movies(&query.clean_title, query.year),
            )
            .await;

        let movie = Matcher::select(movies, query)?;
        debug!("Best movie candidate: {:?} ({:?})", movie.title, movie.year);

        let poster_url = self.config.poster_url(movie.poster_path.as_deref())?;
        Some(Hit {
            poster_url,
            provenance: Provenance::Movie,
            title: movie.title,
        })
    }

    async fn try_show(&self, query: &ParsedQuery, with_season: bool) -> Option<Hit> {
        let shows = self
            .bounded("tv search", self.provider.search_shows(&query.clean_title))
            .await;

        let show = Matcher::select(shows, query)?;
        debug!("Best show candidate: {:?} ({:?})", show.title, show.year);

        if with_season && let Some(season) = query.season_number {
            match show.id.as_deref() {
                Some(show_id) => {
                    let record = self
                        .bounded("season lookup", self.provider.get_season(show_id, season))
                        .await;

                    if let Some(poster_url) = record
                        .and_then(|s| self.config.poster_url(s.poster_path.as_deref()))
                    {
                        return Some(Hit {
                            poster_url,
                            provenance: Provenance::Season,
                            title: show.title,
                        });
                    }

                    info!(
                        "Season poster missing for tv_id={} season={}, falling back to show poster",
                        show_id, season
                    );
                }
                None => debug!("Selected show has no id, skipping season lookup"),
            }
        }

        let poster_url = self.config.poster_url(show.poster_path.as_deref())?;
        Some(Hit {
            poster_url,
            provenance: Provenance::Show,
            title: show.title,
        })
    }

    /// Run a provider call under the per-call timeout; expiry counts as empty
    async fn bounded<T, F>(&self, what: &str, call: F) -> T
    where
        T: Default,
        F: Future<Output = T>,
    {
        match tokio::time::timeout(self.config.call_timeout(), call).await {
            Ok(value) => value,
            Err(_) => {
                warn!(
                    "Provider {} {} timed out after {:?}",
                    self.provider.id(),
                    what,
                    self.config.call_timeout()
                );
                T::default()
            }
        }
    }

    fn fallback(&self, query: ParsedQuery) -> MatchResult {
        MatchResult {
            poster_url: self.config.fallback_url().to_string(),
            provenance: Provenance::Fallback,
            matched_title: None,
            query,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poster_url_joins_paths() {
        let config = ResolverConfig::default();

        assert_eq!(
            config.poster_url(Some("/abc.jpg")).as_deref(),
            Some("https://image.tmdb.org/t/p/w500/abc.jpg")
        );
        assert_eq!(
            config.poster_url(Some("abc.jpg")).as_deref(),
            Some("https://image.tmdb.org/t/p/w500/abc.jpg")
        );
        assert_eq!(config.poster_url(Some("  ")), None);
        assert_eq!(config.poster_url(None), None);
    }

    #[test]
    fn test_fallback_url_is_never_empty() {
        let config = ResolverConfig {
            fallback_poster: String::new(),
            ..Default::default()
        };
        assert_eq!(config.fallback_url(), FALLBACK_POSTER);

        let custom = ResolverConfig {
            fallback_poster: "https://img.example/none.png".to_string(),
            ..Default::default()
        };
        assert_eq!(custom.fallback_url(), "https://img.example/none.png");
    }
}
