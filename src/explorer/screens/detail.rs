//! Detail screen: a single country's full card plus clipboard export.

use std::fmt;
use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tracing::{debug, info, instrument, warn};

use crate::country::Country;
use crate::explorer::ExplorerState;
use crate::explorer::screen::{Screen, ScreenTransition, Toast};

/// State for the country detail screen.
///
/// The clipboard handle is acquired once at construction; headless
/// environments leave it `None` and the copy key reports that instead of
/// failing the screen.
pub struct DetailScreen {
    country: Country,
    clipboard: Option<arboard::Clipboard>,
    toast: Option<Toast>,
}

impl DetailScreen {
    /// Creates a detail screen for the given country.
    #[instrument(skip(country), fields(name = %country.name()))]
    pub fn new(country: Country) -> Self {
        debug!("Initializing DetailScreen");
        let clipboard = arboard::Clipboard::new().ok();
        if clipboard.is_none() {
            warn!("Clipboard unavailable; copy disabled");
        }
        Self {
            country,
            clipboard,
            toast: None,
        }
    }

    /// The country on display.
    pub fn country(&self) -> &Country {
        &self.country
    }

    /// Copies the country summary to the system clipboard.
    #[instrument(skip(self))]
    fn copy_summary(&mut self, now: Instant) {
        let summary = self.country.summary();
        let message = match self.clipboard.as_mut() {
            Some(clipboard) => match clipboard.set_text(summary) {
                Ok(()) => {
                    info!(country = %self.country.name(), "Summary copied to clipboard");
                    "Summary copied to clipboard".to_string()
                }
                Err(e) => {
                    warn!(error = %e, "Clipboard copy failed");
                    "Clipboard copy failed".to_string()
                }
            },
            None => "Clipboard unavailable".to_string(),
        };
        self.toast = Some(Toast::new(message, now));
    }
}

impl fmt::Debug for DetailScreen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DetailScreen")
            .field("country", &self.country)
            .field("clipboard", &self.clipboard.is_some())
            .field("toast", &self.toast)
            .finish()
    }
}

impl Screen for DetailScreen {
    #[instrument(skip(self, frame, _state))]
    fn render(&self, frame: &mut Frame, _state: &ExplorerState) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(5),
                Constraint::Min(8),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new("Country Details")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let banner = Paragraph::new(format!(
            "{}\n{}",
            self.country.flag_emoji(),
            self.country.name()
        ))
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(banner, chunks[1]);

        let card = Paragraph::new(self.country.card_lines().join("\n"))
            .style(Style::default().fg(Color::White))
            .block(Block::default().borders(Borders::ALL).title("Card"));
        frame.render_widget(card, chunks[2]);

        let toast_text = self.toast.as_ref().map(Toast::message).unwrap_or("");
        let toast = Paragraph::new(toast_text)
            .style(Style::default().fg(Color::Green))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(toast, chunks[3]);

        let help = Paragraph::new("c: Copy summary | Esc: Back | q: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[4]);
    }

    #[instrument(skip(self, key, _state))]
    fn handle_key(&mut self, key: KeyEvent, _state: &ExplorerState) -> ScreenTransition {
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => {
                self.copy_summary(Instant::now());
                ScreenTransition::Stay
            }
            KeyCode::Esc | KeyCode::Backspace => ScreenTransition::GoToBrowse,
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }

    #[instrument(skip(self, _state))]
    fn tick(&mut self, now: Instant, _state: &ExplorerState) {
        if let Some(toast) = &self.toast
            && toast.is_expired(now)
        {
            self.toast = None;
        }
    }
}
