use serde::{Deserialize, Serialize};

/// Media type classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Movie,
    Tv,
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Movie => write!(f, "movie"),
            Self::Tv => write!(f, "tv"),
        }
    }
}

/// One search result from a metadata provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogRecord {
    /// Provider-specific ID, needed for season lookups
    pub id: Option<String>,
    /// Display title (`title` for movies, `name` for shows)
    pub title: Option<String>,
    /// Media type
    pub media_type: MediaType,
    /// Release or first-air year
    pub year: Option<i32>,
    /// Provider popularity, never negative
    pub popularity: f64,
    /// Number of votes
    pub vote_count: u32,
    /// Relative poster image path (e.g. "/abc.jpg")
    pub poster_path: Option<String>,
}

impl CatalogRecord {
    /// Create a new record with the required fields
    pub fn new(id: impl Into<String>, title: impl Into<String>, media_type: MediaType) -> Self {
        Self {
            id: Some(id.into()),
            title: Some(title.into()),
            media_type,
            year: None,
            popularity: 0.0,
            vote_count: 0,
            poster_path: None,
        }
    }

    /// Builder pattern: set title
    #[must_use]
    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }

    /// Builder pattern: set year
    #[must_use]
    pub fn with_year(mut self, year: Option<i32>) -> Self {
        self.year = year;
        self
    }

    /// Builder pattern: set poster path
    #[must_use]
    pub fn with_poster(mut self, path: impl Into<String>) -> Self {
        self.poster_path = Some(path.into());
        self
    }

    /// Builder pattern: set popularity, clamped at zero
    #[must_use]
    pub fn with_popularity(mut self, popularity: f64) -> Self {
        self.popularity = popularity.max(0.0);
        self
    }

    /// Builder pattern: set vote count
    #[must_use]
    pub fn with_vote_count(mut self, vote_count: u32) -> Self {
        self.vote_count = vote_count;
        self
    }

    /// Title usable for scoring, if any
    #[must_use]
    pub fn display_title(&self) -> Option<&str> {
        self.title
            .as_deref()
            .map(str::trim)
            .filter(|title| !title.is_empty())
    }
}

/// Provider response for a single season of a show
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonRecord {
    pub season_number: Option<u32>,
    pub name: Option<String>,
    /// Relative poster image path
    pub poster_path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_record_builder() {
        let record = CatalogRecord::new("42", "Stranger Things", MediaType::Tv)
            .with_year(Some(2016))
            .with_poster("/show.jpg")
            .with_popularity(-3.0)
            .with_vote_count(17);

        assert_eq!(record.id.as_deref(), Some("42"));
        assert_eq!(record.year, Some(2016));
        assert_eq!(record.poster_path.as_deref(), Some("/show.jpg"));
        assert_eq!(record.popularity, 0.0);
        assert_eq!(record.vote_count, 17);
    }

    #[test]
    fn test_display_title_rejects_blank() {
        let record = CatalogRecord::new("1", "  Dune ", MediaType::Movie);
        assert_eq!(record.display_title(), Some("Dune"));

        let blank = record.clone().with_title(Some("   ".to_string()));
        assert_eq!(blank.display_title(), None);

        let missing = record.with_title(None);
        assert_eq!(missing.display_title(), None);
    }

    #[test]
    fn test_media_type_display() {
        assert_eq!(MediaType::Movie.to_string(), "movie");
        assert_eq!(MediaType::Tv.to_string(), "tv");
    }
}
