use crate::scraper::{parser::ParsedQuery, types::CatalogRecord};
use serde::Serialize;

/// Weight of a perfect title match
pub const TITLE_WEIGHT: f64 = 100.0;
/// Bonus for an exact year match, about two-thirds of the title weight
pub const YEAR_BONUS: f64 = 65.0;
/// Cap on the popularity contribution
pub const POPULARITY_CAP: f64 = 10.0;
/// Cap on the vote-count contribution
pub const VOTE_CAP: f64 = 5.0;

const POPULARITY_SCALE: f64 = 1.5;
const VOTE_SCALE: f64 = 0.5;

/// A scored catalog record
#[derive(Debug, Clone)]
pub struct ScoredRecord {
    /// The scored record
    pub record: CatalogRecord,
    /// Breakdown of score components
    pub breakdown: ScoreBreakdown,
}

/// Breakdown of how the score was calculated
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub title_score: f64,
    pub year_score: f64,
    pub popularity_score: f64,
    pub total: f64,
}

/// Matcher for scoring and selecting search results
pub struct Matcher;

impl Matcher {
    /// Score a record against a query
    ///
    /// Records without a usable title must be filtered out before scoring;
    /// this returns `None` for them instead of a floor value.
    #[must_use]
    pub fn score(record: &CatalogRecord, query: &ParsedQuery) -> Option<f64> {
        Self::score_breakdown(record, query).map(|breakdown| breakdown.total)
    }

    /// Score a record and keep each component
    #[must_use]
    pub fn score_breakdown(record: &CatalogRecord, query: &ParsedQuery) -> Option<ScoreBreakdown> {
        let title = record.display_title()?;

        let title_score = Self::title_similarity(&query.clean_title, title) * TITLE_WEIGHT;
        let year_score = Self::score_year(record.year, query.year);
        let popularity_score = Self::score_popularity(record.popularity, record.vote_count);

        Some(ScoreBreakdown {
            title_score,
            year_score,
            popularity_score,
            total: title_score + year_score + popularity_score,
        })
    }

    /// Pick the highest-scoring valid record
    ///
    /// Ties go to the record the provider returned first.
    #[must_use]
    pub fn select(records: Vec<CatalogRecord>, query: &ParsedQuery) -> Option<CatalogRecord> {
        let mut best: Option<(f64, CatalogRecord)> = None;

        for record in records {
            let Some(score) = Self::score(&record, query) else {
                continue;
            };

            if best.as_ref().is_none_or(|(best_score, _)| score > *best_score) {
                best = Some((score, record));
            }
        }

        best.map(|(_, record)| record)
    }

    /// Score and rank all valid records, best first
    #[must_use]
    pub fn rank(records: Vec<CatalogRecord>, query: &ParsedQuery) -> Vec<ScoredRecord> {
        let mut scored: Vec<ScoredRecord> = records
            .into_iter()
            .filter_map(|record| {
                Self::score_breakdown(&record, query)
                    .map(|breakdown| ScoredRecord { record, breakdown })
            })
            .collect();

        // Stable sort keeps provider order among ties
        scored.sort_by(|a, b| b.breakdown.total.total_cmp(&a.breakdown.total));

        scored
    }

    /// Case-insensitive similarity in `[0, 1]`
    #[must_use]
    pub fn title_similarity(a: &str, b: &str) -> f64 {
        strsim::normalized_levenshtein(&Self::normalize_title(a), &Self::normalize_title(b))
    }

    fn normalize_title(title: &str) -> String {
        title
            .to_lowercase()
            .chars()
            .map(|c| if c.is_alphanumeric() { c } else { ' ' })
            .collect::<String>()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn score_year(record_year: Option<i32>, query_year: Option<i32>) -> f64 {
        match (record_year, query_year) {
            (Some(a), Some(b)) if a == b => YEAR_BONUS,
            _ => 0.0,
        }
    }

    fn score_popularity(popularity: f64, vote_count: u32) -> f64 {
        let popularity = (popularity.max(0.0).ln_1p() * POPULARITY_SCALE).min(POPULARITY_CAP);
        let votes = (f64::from(vote_count).ln_1p() * VOTE_SCALE).min(VOTE_CAP);

        popularity + votes
    }
}
