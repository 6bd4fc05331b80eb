//! Terminal UI for the country explorer.

mod controller;
mod screen;
mod screens;

pub use controller::{ExplorerController, ExplorerState};
pub use screen::{Screen, ScreenTransition, TOAST_TTL, Toast};

use std::io;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{error, info};

use crate::client::{CountryProvider, RestCountriesClient};
use crate::config::ExplorerConfig;

/// Runs the explorer TUI until the user quits.
///
/// Fetches the country list first so network failures surface before the
/// terminal switches modes.
pub async fn run_tui(config: ExplorerConfig) -> Result<()> {
    // Setup logging to file to avoid interfering with TUI
    let log_file = std::fs::File::create("flagquest_tui.log")?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!("Starting country explorer TUI");

    let client = RestCountriesClient::new(config.api_base_url().clone(), config.request_timeout())?;
    let mut countries = client.fetch_all().await?;
    countries.sort_by(|a, b| a.name().cmp(b.name()));
    info!(count = countries.len(), "Country list loaded");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let state = ExplorerState::new(countries, config);
    let mut controller = ExplorerController::new(state);
    let res = controller.run(&mut terminal).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = ?err, "Explorer loop error");
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
