//! Flagquest - terminal country explorer
//!
//! Browse, search, and filter countries, then guess them from their flags.

#![warn(missing_docs)]

mod cli;

use std::path::Path;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use flagquest::{
    CountryProvider, ExplorerConfig, Region, RestCountriesClient, ViewKind, filter_by_region,
    page_count, paginate, run_tui,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Tui) {
        Command::Tui => {
            // The TUI sets up its own file logging so the terminal stays clean.
            let config = load_config(&cli.config)?;
            run_tui(config).await
        }
        Command::List {
            region,
            view,
            page,
            page_size,
        } => run_list(&cli.config, &region, &view, page, page_size).await,
        Command::Show { code } => run_show(&cli.config, &code).await,
    }
}

/// Prints a country listing to stdout.
async fn run_list(
    config_path: &Path,
    region: &str,
    view: &str,
    page: usize,
    page_size: Option<usize>,
) -> Result<()> {
    init_tracing();
    let config = load_config(config_path)?;

    let region = Region::parse(region)?;
    let view = ViewKind::parse(view)?;

    info!(region = region.label(), view = view.label(), "Listing countries");

    let client =
        RestCountriesClient::new(config.api_base_url().clone(), config.request_timeout())?;
    let mut countries = client.fetch_all().await?;
    countries.sort_by(|a, b| a.name().cmp(b.name()));

    let filtered = filter_by_region(&countries, region);
    let page_size = page_size.unwrap_or(*config.page_size()).max(1);
    let page = paginate(filtered.len(), page_size, page.saturating_sub(1));
    let shown = page.slice(&filtered);

    println!(
        "{} countries in {} (page {}/{})",
        filtered.len(),
        region.label(),
        page.index() + 1,
        page_count(filtered.len(), page_size).max(1),
    );
    for country in shown {
        match view {
            ViewKind::Cards => {
                for line in country.card_lines() {
                    println!("{}", line);
                }
                println!();
            }
            ViewKind::Table => println!(
                "{:<28} {:<4} {:<10} {:<20} {:>14}",
                country.name(),
                country.alpha3_code(),
                country.region(),
                country.capital(),
                country.population_display(),
            ),
            ViewKind::Default => println!("{} {}", country.flag_emoji(), country.name()),
        }
    }

    Ok(())
}

/// Prints one country's card to stdout.
async fn run_show(config_path: &Path, code: &str) -> Result<()> {
    init_tracing();
    let config = load_config(config_path)?;

    info!(code = %code, "Looking up country");

    let client =
        RestCountriesClient::new(config.api_base_url().clone(), config.request_timeout())?;
    let country = client.fetch_by_code(code).await?;
    for line in country.card_lines() {
        println!("{}", line);
    }

    Ok(())
}

/// Loads configuration, falling back to defaults when the file is absent.
#[instrument(skip(path))]
fn load_config(path: &Path) -> Result<ExplorerConfig> {
    if path.exists() {
        Ok(ExplorerConfig::from_file(path)?)
    } else {
        Ok(ExplorerConfig::default())
    }
}

/// Initializes stderr tracing for the one-shot commands.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}
