//! Poster artwork resolution for noisy media filenames.
//!
//! [`scraper::Parser`] turns a release name into a structured query,
//! [`scraper::Matcher`] ranks provider search results against it and
//! [`scraper::PosterResolver`] walks the movie / show / season strategies
//! until one yields a poster URL.

pub mod config;
pub mod logging;
pub mod scraper;
