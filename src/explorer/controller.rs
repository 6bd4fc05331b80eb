//! Explorer controller: the state machine driving the multi-screen TUI.

use std::time::Instant;

use crossterm::event::{self, Event, KeyEventKind};
use derive_getters::Getters;
use ratatui::{Terminal, backend::Backend};
use tokio::time::{Duration, sleep};
use tracing::{debug, info, instrument};

use crate::config::ExplorerConfig;
use crate::country::Country;
use crate::explorer::screen::{Screen, ScreenTransition};
use crate::explorer::screens::{BrowseScreen, DetailScreen, GameScreen};
use crate::store::SnapshotStore;

/// Active screen in the explorer state machine.
#[derive(Debug)]
enum ActiveScreen {
    Browse(BrowseScreen),
    Detail(DetailScreen),
    Game(GameScreen),
}

/// Shared data every screen reads: the country list, configuration, and
/// the snapshot store.
#[derive(Debug, Getters)]
pub struct ExplorerState {
    countries: Vec<Country>,
    config: ExplorerConfig,
    store: SnapshotStore,
}

impl ExplorerState {
    /// Creates the shared state for an explorer run.
    #[instrument(skip(countries, config), fields(count = countries.len()))]
    pub fn new(countries: Vec<Country>, config: ExplorerConfig) -> Self {
        let store = SnapshotStore::new(config.snapshot_path());
        Self {
            countries,
            config,
            store,
        }
    }
}

/// Controller that drives the explorer state machine.
///
/// Call [`ExplorerController::run`] to start the event loop.
#[derive(Debug, Getters)]
pub struct ExplorerController {
    state: ExplorerState,
}

impl ExplorerController {
    /// Creates an explorer controller over the fetched country list.
    #[instrument(skip(state))]
    pub fn new(state: ExplorerState) -> Self {
        info!("Creating ExplorerController");
        Self { state }
    }

    /// Runs the explorer event loop until the user quits.
    #[instrument(skip(self, terminal))]
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting explorer event loop");

        let mut screen = ActiveScreen::Browse(BrowseScreen::new(&self.state));

        loop {
            // Render current screen.
            terminal.draw(|f| match &screen {
                ActiveScreen::Browse(s) => s.render(f, &self.state),
                ActiveScreen::Detail(s) => s.render(f, &self.state),
                ActiveScreen::Game(s) => s.render(f, &self.state),
            })?;

            // Poll for input with short timeout to keep the loop responsive.
            if event::poll(Duration::from_millis(100))?
                && let Event::Key(key) = event::read()?
            {
                // Skip key release events (crossterm fires both press and release).
                if key.kind == KeyEventKind::Release {
                    continue;
                }

                let transition = match &mut screen {
                    ActiveScreen::Browse(s) => s.handle_key(key, &self.state),
                    ActiveScreen::Detail(s) => s.handle_key(key, &self.state),
                    ActiveScreen::Game(s) => s.handle_key(key, &self.state),
                };

                screen = match self.apply_transition(transition, screen) {
                    Some(next) => next,
                    None => {
                        info!("Explorer quitting");
                        return Ok(());
                    }
                };
            }

            // Advance deadlines: debounce settles, round resets, notices expire.
            let now = Instant::now();
            match &mut screen {
                ActiveScreen::Browse(s) => s.tick(now, &self.state),
                ActiveScreen::Detail(s) => s.tick(now, &self.state),
                ActiveScreen::Game(s) => s.tick(now, &self.state),
            }

            sleep(Duration::from_millis(10)).await;
        }
    }

    /// Applies a screen transition, returning the next screen or `None` to quit.
    #[instrument(skip(self, current))]
    fn apply_transition(
        &mut self,
        transition: ScreenTransition,
        current: ActiveScreen,
    ) -> Option<ActiveScreen> {
        debug!(transition = ?transition, "Applying screen transition");
        match transition {
            ScreenTransition::Stay => Some(current),

            ScreenTransition::GoToBrowse => {
                info!("Navigating to Browse");
                Some(ActiveScreen::Browse(BrowseScreen::new(&self.state)))
            }

            ScreenTransition::GoToDetail { country } => {
                info!(country = %country.name(), "Navigating to Detail");
                Some(ActiveScreen::Detail(DetailScreen::new(country)))
            }

            ScreenTransition::GoToGame => {
                info!("Navigating to Game");
                Some(ActiveScreen::Game(GameScreen::new(&self.state)))
            }

            ScreenTransition::Quit => None,
        }
    }
}
