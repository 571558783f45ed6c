use anyhow::{Context, Result, anyhow};
use ayiah_poster::{
    config::AppConfig,
    logging,
    scraper::{self, MatchResult, Parser as TitleParser, ParsedQuery},
};
use clap::Parser;
use std::path::PathBuf;

/// Resolve noisy media titles to poster artwork
#[derive(Debug, Parser)]
#[command(name = "ayiah-poster", version, about)]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, env = "AYIAH_CONFIG")]
    config: Option<PathBuf>,

    /// Print one JSON object per title
    #[arg(long)]
    json: bool,

    /// Only print the normalized query; no network calls
    #[arg(long)]
    parse_only: bool,

    /// Raw titles, e.g. "Stranger.Things.S04E01.1080p.WEB-DL.x265-Group"
    #[arg(required = true)]
    titles: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    logging::init(&config.log).map_err(|e| anyhow!(e))?;

    if cli.parse_only {
        for title in &cli.titles {
            print_query(&TitleParser::normalize(title), cli.json)?;
        }
        return Ok(());
    }

    let resolver = scraper::create_default_resolver(&config.provider, config.resolver.clone())
        .context("Failed to set up the TMDB provider")?;

    let results =
        futures::future::join_all(cli.titles.iter().map(|title| resolver.resolve(title))).await;

    for result in &results {
        print_result(result, cli.json)?;
    }

    Ok(())
}

fn print_query(query: &ParsedQuery, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(query)?);
    } else {
        println!(
            "{}\t{} (year: {:?}, season: {:?}, type: {:?})",
            query.original_title,
            query.clean_title,
            query.year,
            query.season_number,
            query.forced_type
        );
    }
    Ok(())
}

fn print_result(result: &MatchResult, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(result)?);
    } else {
        println!("{}\t{}", result.query.original_title, result.poster_url);
    }
    Ok(())
}
