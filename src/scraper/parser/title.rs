use super::patterns::{ForcedType, PATTERNS, Patterns};
use regex::Regex;
use serde::Serialize;
use std::path::Path;

/// Last-resort search term when the input carries nothing at all
const UNTITLED: &str = "untitled";

/// Structured query derived from a raw title
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedQuery {
    /// Cleaned title for searching, never empty
    pub clean_title: String,
    /// Raw input as received
    pub original_title: String,
    /// Release year (1900-2099) if found
    pub year: Option<i32>,
    /// Season number (1-indexed)
    pub season_number: Option<u32>,
    /// Explicit type marker found in the title
    pub forced_type: ForcedType,
}

impl ParsedQuery {
    /// Whether the raw input holds any letter or digit worth searching for
    #[must_use]
    pub fn is_searchable(&self) -> bool {
        self.original_title.chars().any(char::is_alphanumeric)
    }
}

pub struct Parser;

impl Parser {
    /// Normalize the file name of a path
    #[must_use]
    pub fn parse_path(path: &Path) -> ParsedQuery {
        let filename = path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or_default();

        Self::normalize(filename)
    }

    /// Normalize a raw title into a search query
    ///
    /// Every step works on the evolving string. Separators go first so that
    /// tokens like `S04E01` reach the word-boundary patterns intact.
    #[must_use]
    pub fn normalize(raw: &str) -> ParsedQuery {
        let patterns = &*PATTERNS;

        // 1. Separators
        let mut text = raw.replace(['.', '_', '-'], " ");
        text = patterns.slashes.replace_all(&text, " ").into_owned();

        // 2. Forced type
        let forced_type = Self::take_match(&mut text, &patterns.forced_type)
            .map_or(ForcedType::Unspecified, |marker| ForcedType::from_marker(&marker));

        // Title words sit before the first release marker; everything after is the tail
        let mut tail = text.split_off(Self::tail_start(&text, patterns));

        // 3. Year
        let year = Self::take_match(&mut tail, &patterns.year).and_then(|y| y.parse().ok());

        // 4. Season
        let season_number = Self::extract_season(&mut tail, patterns);

        // 5. Episode, part and noise markers
        tail = patterns.tail_noise.replace_all(&tail, " ").into_owned();
        text.push(' ');
        text.push_str(&tail);
        text = Self::strip_noise(&text, patterns);

        // 6. Leftover brackets
        text = patterns.brackets.replace_all(&text, " ").into_owned();

        // 7-8. Symbols and whitespace
        let mut clean_title = Self::strip_symbols(&text, patterns);

        // 9. Degenerate input
        if clean_title.is_empty() {
            clean_title = Self::fallback_title(raw, patterns);
        }

        ParsedQuery {
            clean_title,
            original_title: raw.to_string(),
            year,
            season_number,
            forced_type,
        }
    }

    /// Offset of the first year, season, episode, part or technical tag
    fn tail_start(text: &str, patterns: &Patterns) -> usize {
        [
            &patterns.year,
            &patterns.season_short,
            &patterns.season_word,
            &patterns.episode,
            &patterns.part,
            &patterns.noise,
        ]
        .into_iter()
        .filter_map(|regex| regex.find(text).map(|m| m.start()))
        .min()
        .unwrap_or(text.len())
    }

    /// Remove the first match of `regex` from `text`, returning capture 1 or the whole match
    fn take_match(text: &mut String, regex: &Regex) -> Option<String> {
        let (range, value) = {
            let caps = regex.captures(text)?;
            let whole = caps.get(0)?;
            (whole.range(), caps.get(1).unwrap_or(whole).as_str().to_string())
        };

        text.replace_range(range, " ");
        Some(value)
    }

    fn extract_season(text: &mut String, patterns: &Patterns) -> Option<u32> {
        // The span is removed even when the number is unusable
        let digits = Self::take_match(text, &patterns.season_short)
            .or_else(|| Self::take_match(text, &patterns.season_word))?;

        digits.parse::<u32>().ok().filter(|&season| season > 0)
    }

    fn strip_noise(text: &str, patterns: &Patterns) -> String {
        let mut text = patterns.container.replace(text, " ").into_owned();

        let group = patterns
            .release_group
            .captures(&text)
            .and_then(|caps| caps.get(1).map(|m| m.range()));
        if let Some(range) = group {
            text.replace_range(range, " ");
        }

        for regex in [&patterns.episode, &patterns.part, &patterns.noise] {
            text = regex.replace_all(&text, " ").into_owned();
        }

        text
    }

    fn strip_symbols(text: &str, patterns: &Patterns) -> String {
        patterns
            .symbols
            .replace_all(text, " ")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn fallback_title(raw: &str, patterns: &Patterns) -> String {
        let stripped = Self::strip_symbols(raw, patterns);
        if !stripped.is_empty() {
            return stripped;
        }

        let trimmed = raw.trim();
        if trimmed.is_empty() {
            UNTITLED.to_string()
        } else {
            trimmed.to_string()
        }
    }
}
