use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Explicit media type marker embedded in a title, e.g. `(TV)` or `(Movie)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ForcedType {
    #[default]
    Unspecified,
    Movie,
    Tv,
}

impl ForcedType {
    /// Map a marker word (`movie`, `tv`, `series`, `film`) to a type
    #[must_use]
    pub fn from_marker(marker: &str) -> Self {
        match marker.to_ascii_lowercase().as_str() {
            "movie" | "film" => Self::Movie,
            "tv" | "series" => Self::Tv,
            _ => Self::Unspecified,
        }
    }
}

/// Pre-compiled regex patterns for title normalization
pub struct Patterns {
    // Separators
    pub slashes: Regex,

    // Structured fields
    pub forced_type: Regex,
    pub year: Regex,
    pub season_short: Regex, // S04, S04E01, S01E01E02, S05V1, S05V
    pub season_word: Regex,  // Season 4, season: 05

    // Noise
    pub container: Regex,
    pub release_group: Regex, // x265 Group (at end)
    pub episode: Regex,
    pub part: Regex,
    pub noise: Regex,      // technical tags, stripped anywhere
    pub tail_noise: Regex, // title-like words, stripped only in the tail

    // Cleanup
    pub brackets: Regex,
    pub symbols: Regex,
}

impl Patterns {
    pub fn new() -> Self {
        Self {
            slashes: Regex::new(r"[/\\]+").expect("Invalid slashes regex"),

            forced_type: Regex::new(r"(?i)\(\s*(movie|tv|series|film)\s*\)")
                .expect("Invalid forced_type regex"),

            // Year: 1900-2099, standalone
            year: Regex::new(r"\b(?:19|20)\d{2}\b").expect("Invalid year regex"),

            season_short: Regex::new(r"(?i)\bS(\d{1,3})(?:V\d*)?(?:E\d{1,4})*\b")
                .expect("Invalid season_short regex"),
            season_word: Regex::new(r"(?i)\bSeason[\s:_-]*(\d{1,3})\b")
                .expect("Invalid season_word regex"),

            container: Regex::new(r"(?i)\b(?:mkv|mp4|avi|m4v|mov|wmv|webm|flv|m2ts)\s*$")
                .expect("Invalid container regex"),

            release_group: Regex::new(
                r"(?i)\b(?:\d{3,4}p|x26[45]|h\s?26[45]|hevc|avc|xvid|divx|av1|10\s?bit|web\s?dl|web\s?rip|bluray|brrip|bdrip|dvdrip|hdrip|hdtv|remux|aac(?:\s?[257]\s?[01])?|ddp?\s?[257]\s?[01]|e?ac3|dts|atmos|truehd)\s+([\p{L}\p{N}]+)\s*$",
            )
            .expect("Invalid release_group regex"),

            episode: Regex::new(r"(?i)\b(?:episode\s?\d{1,4}|ep\s?\d{1,4}|e\d{1,4})\b")
                .expect("Invalid episode regex"),
            part: Regex::new(r"(?i)\b(?:part|pt)\s?\d{1,3}\b").expect("Invalid part regex"),

            noise: Regex::new(concat!(
                r"(?i)\b(?:",
                // Resolution and dynamic range
                r"\d{3,4}[pi]|[48]k|uhd|hdr(?:10)?|dovi|sdr|",
                // Source and streaming service
                r"web\s?dl|web\s?rip|hd\s?rip|blu\s?ray|brrip|bdrip|dvdrip|dvd\s?scr|hdtv|hdcam|",
                r"amzn|dsnp|hmax|atvp|",
                // Video codec
                r"x26[45]|h\s?26[45]|hevc|avc|xvid|divx|av1|vp9|10\s?bit|8\s?bit|",
                // Audio
                r"ddp?\s?[257]\s?[01]|ddp|aac(?:\s?[257]\s?[01])?|he\s?aac|e?ac3(?:\s?[257]\s?[01])?|",
                r"dts(?:\s?hd)?(?:\s?ma)?|truehd|atmos|flac|mp3|[257]\s?1\s?ch|",
                r"dual\s+audio|multi\s+audio|",
                // Subtitles and release fixes
                r"esubs?|msubs?|subbed|dubbed|repack|rerip|remux",
                r")\b",
            ))
            .expect("Invalid noise regex"),

            tail_noise: Regex::new(concat!(
                r"(?i)\b(?:",
                // Languages
                r"hindi|english|tamil|telugu|malayalam|kannada|bengali|punjabi|marathi|urdu|",
                r"japanese|korean|chinese|french|spanish|german|italian|russian|eng|hin|jpn|multi|",
                // Short source and audio tags
                r"web|nf|opus|",
                // Edition and release qualifiers
                r"complete|combined|proper|extended|uncut|unrated|remastered|",
                r"internal|limited|hq|org|hc|imax|hybrid|directors?\s+cut",
                r")\b",
            ))
            .expect("Invalid tail_noise regex"),

            brackets: Regex::new(r"\[[^\]]*\]|\([^)]*\)|\{[^}]*\}")
                .expect("Invalid brackets regex"),
            symbols: Regex::new(r"[^\p{L}\p{N}\s]").expect("Invalid symbols regex"),
        }
    }
}

impl Default for Patterns {
    fn default() -> Self {
        Self::new()
    }
}

/// Global singleton for patterns
pub static PATTERNS: LazyLock<Patterns> = LazyLock::new(Patterns::new);
