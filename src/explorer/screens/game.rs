//! Game screen: guess the country from its flag.

use std::time::Instant;

use chrono::{DateTime, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tracing::{debug, info, instrument, warn};

use crate::explorer::ExplorerState;
use crate::explorer::screen::{Screen, ScreenTransition, Toast};
use crate::game::{GuessGame, GuessOutcome, RoundPhase};
use crate::store::StoredState;

/// State for the guess-the-flag screen.
///
/// A round in progress is resumed from the snapshot store when its country
/// still resolves; anything else starts fresh. Every state change is
/// persisted back so the round survives leaving and re-entering the screen.
#[derive(Debug)]
pub struct GameScreen {
    game: GuessGame,
    rng: StdRng,
    guess_input: String,
    notice: Option<Toast>,
    last_round: Option<DateTime<Utc>>,
}

impl GameScreen {
    /// Creates a game screen, resuming any saved round.
    #[instrument(skip(state))]
    pub fn new(state: &ExplorerState) -> Self {
        debug!(
            countries = state.countries().len(),
            "Initializing GameScreen"
        );
        let mut rng = StdRng::from_entropy();
        let mut game = GuessGame::new(state.countries().clone(), state.config().reset_delay());
        let mut notice = None;
        let mut last_round = None;

        match state.store().load() {
            Ok(Some(stored)) => {
                last_round = *stored.last_round();
                let resumed = stored
                    .game_state()
                    .as_ref()
                    .is_some_and(|snapshot| game.restore(snapshot));
                if resumed {
                    info!("Resumed saved round");
                } else {
                    game.reset(&mut rng);
                }
            }
            Ok(None) => {
                game.reset(&mut rng);
            }
            Err(e) => {
                warn!(error = %e, "Saved state unreadable; starting fresh");
                notice = Some(Toast::new(
                    "Saved game state was unreadable; starting fresh",
                    Instant::now(),
                ));
                game.reset(&mut rng);
            }
        }

        Self {
            game,
            rng,
            guess_input: String::new(),
            notice,
            last_round,
        }
    }

    /// The round engine.
    pub fn game(&self) -> &GuessGame {
        &self.game
    }

    /// Evaluates the typed guess.
    #[instrument(skip(self, state))]
    fn submit(&mut self, state: &ExplorerState, now: Instant) {
        let answer = self.game.selected().map(|country| country.name().clone());
        match self.game.submit_guess(&self.guess_input, now) {
            Ok(GuessOutcome::Correct) => {
                self.guess_input.clear();
                self.last_round = Some(Utc::now());
                self.persist(state);
                let name = answer.unwrap_or_default();
                self.notice = Some(Toast::new(format!("Correct! It was {}.", name), now));
            }
            Ok(GuessOutcome::Incorrect { tries_remaining }) => {
                self.guess_input.clear();
                self.persist(state);
                self.notice = Some(Toast::new(
                    format!("Not it. {} tries left.", tries_remaining),
                    now,
                ));
            }
            Ok(GuessOutcome::Exhausted) => {
                self.guess_input.clear();
                self.last_round = Some(Utc::now());
                self.persist(state);
                let name = answer.unwrap_or_default();
                self.notice = Some(Toast::new(
                    format!("Out of tries. The answer was {}.", name),
                    now,
                ));
            }
            Ok(GuessOutcome::RoundOver) => {
                self.notice = Some(Toast::new("Round over. Press Enter for a new one.", now));
            }
            Err(e) => {
                // Input stays as typed so the player can fix it.
                self.notice = Some(Toast::new(e.message.clone(), now));
            }
        }
    }

    /// Swaps in a different flag without touching tries or guesses.
    #[instrument(skip(self, state))]
    fn skip(&mut self, state: &ExplorerState, now: Instant) {
        if self.game.phase() != RoundPhase::Running {
            return;
        }
        if self.game.skip(&mut self.rng).is_some() {
            self.persist(state);
            self.notice = Some(Toast::new("Skipped to a new flag", now));
        }
    }

    /// Starts a fresh round immediately.
    #[instrument(skip(self, state))]
    fn start_new_round(&mut self, state: &ExplorerState, now: Instant) {
        self.game.cancel_reset();
        self.game.reset(&mut self.rng);
        self.guess_input.clear();
        self.persist(state);
        self.notice = Some(Toast::new("New round started", now));
    }

    /// Writes the current round and timestamp to the snapshot store.
    #[instrument(skip(self, state))]
    fn persist(&self, state: &ExplorerState) {
        let stored = StoredState::new(Some(self.game.snapshot()), self.last_round);
        if let Err(e) = state.store().save(&stored) {
            warn!(error = %e, "Failed to persist game state");
        }
    }
}

impl Screen for GameScreen {
    #[instrument(skip(self, frame, _state))]
    fn render(&self, frame: &mut Frame, _state: &ExplorerState) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(7),
                Constraint::Length(6),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new("Guess the Flag")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let (banner_text, banner_color) = match (self.game.phase(), self.game.selected()) {
            (RoundPhase::Running, Some(country)) => (
                format!("{}\n\nWhich country is this?", country.flag_emoji()),
                Color::Yellow,
            ),
            (RoundPhase::Won, Some(country)) => (
                format!(
                    "{}\n\nYou got it! It was {}.",
                    country.flag_emoji(),
                    country.name()
                ),
                Color::Green,
            ),
            (RoundPhase::Lost, Some(country)) => (
                format!(
                    "{}\n\nThe answer was {}.",
                    country.flag_emoji(),
                    country.name()
                ),
                Color::Red,
            ),
            (_, None) => ("No countries to play with.".to_string(), Color::Red),
        };
        let banner = Paragraph::new(banner_text)
            .style(
                Style::default()
                    .fg(banner_color)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(banner, chunks[1]);

        let guessed = if self.game.guessed().is_empty() {
            "(none)".to_string()
        } else {
            self.game.guessed().join(", ")
        };
        let mut status_lines = vec![
            format!("Tries remaining: {}", self.game.tries_remaining()),
            format!("Guessed: {}", guessed),
        ];
        if let Some(ts) = self.last_round {
            status_lines.push(format!(
                "Last round finished: {}",
                ts.format("%Y-%m-%d %H:%M:%S UTC")
            ));
        }
        if self.game.reset_pending() {
            status_lines.push("Next round starting shortly...".to_string());
        }
        let status = Paragraph::new(status_lines.join("\n"))
            .style(Style::default().fg(Color::White))
            .block(Block::default().borders(Borders::ALL).title("Round"));
        frame.render_widget(status, chunks[2]);

        let input = Paragraph::new(self.guess_input.as_str())
            .style(Style::default().fg(Color::White))
            .block(Block::default().borders(Borders::ALL).title("Your guess"));
        frame.render_widget(input, chunks[3]);

        let notice_text = self.notice.as_ref().map(Toast::message).unwrap_or("");
        let notice = Paragraph::new(notice_text)
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(notice, chunks[4]);

        let help =
            Paragraph::new("Type guess | Enter: Submit | Tab: Skip | Ctrl+R: New round | Esc: Back")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[5]);
    }

    #[instrument(skip(self, key, state))]
    fn handle_key(&mut self, key: KeyEvent, state: &ExplorerState) -> ScreenTransition {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if let KeyCode::Char('r') = key.code {
                self.start_new_round(state, Instant::now());
            }
            return ScreenTransition::Stay;
        }

        match key.code {
            KeyCode::Esc => ScreenTransition::GoToBrowse,
            KeyCode::Enter => {
                let now = Instant::now();
                if self.game.phase() == RoundPhase::Running {
                    self.submit(state, now);
                } else {
                    self.start_new_round(state, now);
                }
                ScreenTransition::Stay
            }
            KeyCode::Tab => {
                self.skip(state, Instant::now());
                ScreenTransition::Stay
            }
            KeyCode::Backspace => {
                self.guess_input.pop();
                ScreenTransition::Stay
            }
            KeyCode::Char(c) => {
                self.guess_input.push(c);
                ScreenTransition::Stay
            }
            _ => ScreenTransition::Stay,
        }
    }

    #[instrument(skip(self, state))]
    fn tick(&mut self, now: Instant, state: &ExplorerState) {
        if self.game.poll_reset(now, &mut self.rng) {
            debug!("Round reset after delay");
            self.guess_input.clear();
            self.persist(state);
            self.notice = Some(Toast::new("New round started", now));
        }
        if let Some(notice) = &self.notice
            && notice.is_expired(now)
        {
            self.notice = None;
        }
    }
}
