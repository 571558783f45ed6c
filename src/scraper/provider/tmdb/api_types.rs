use serde::Deserialize;

// Search responses. Every field is optional so one odd item cannot sink the page.
#[derive(Debug, Deserialize)]
pub struct SearchResponse<T> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    pub total_results: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct MovieResult {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub release_date: Option<String>,
    pub poster_path: Option<String>,
    pub vote_count: Option<i64>,
    pub popularity: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct TvResult {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub first_air_date: Option<String>,
    pub poster_path: Option<String>,
    pub vote_count: Option<i64>,
    pub popularity: Option<f64>,
}

// Detail responses
#[derive(Debug, Deserialize)]
pub struct SeasonDetails {
    pub season_number: Option<u32>,
    pub name: Option<String>,
    pub poster_path: Option<String>,
}
