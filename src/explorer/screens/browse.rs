//! Browse screen: the searchable, filterable country listing.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use tracing::{debug, info, instrument};

use crate::country::Country;
use crate::explorer::ExplorerState;
use crate::explorer::screen::{Screen, ScreenTransition};
use crate::listing::{Region, ViewKind, filter_by_region, page_count, paginate};
use crate::search::{Debouncer, MIN_QUERY_LEN, SearchEngine, SearchHit, good_match_count};

/// State for the browse screen.
///
/// Typed queries sit in the debouncer until they settle; only settled
/// queries reach the search engine. `hits` index into the region-filtered
/// list, so a region change re-runs the settled query.
#[derive(Debug)]
pub struct BrowseScreen {
    query_input: String,
    input_mode: bool,
    debouncer: Debouncer<String>,
    settled_query: String,
    engine: SearchEngine,
    hits: Vec<SearchHit>,
    good_count: usize,
    region: Region,
    view: ViewKind,
    selected: usize,
}

impl BrowseScreen {
    /// Creates a browse screen over the full country list.
    #[instrument(skip(state))]
    pub fn new(state: &ExplorerState) -> Self {
        debug!(
            countries = state.countries().len(),
            "Initializing BrowseScreen"
        );
        Self {
            query_input: String::new(),
            input_mode: false,
            debouncer: Debouncer::new(state.config().debounce()),
            settled_query: String::new(),
            engine: SearchEngine::new(),
            hits: Vec::new(),
            good_count: 0,
            region: Region::All,
            view: ViewKind::Default,
            selected: 0,
        }
    }

    /// True while a settled query is long enough to rank the listing.
    fn search_active(&self) -> bool {
        self.settled_query.trim().chars().count() >= MIN_QUERY_LEN
    }

    /// The countries currently shown, region-filtered and hit-ordered when
    /// a search is active.
    fn visible<'a>(&self, state: &'a ExplorerState) -> Vec<&'a Country> {
        let filtered = filter_by_region(state.countries(), self.region);
        if self.search_active() {
            self.hits
                .iter()
                .filter_map(|hit| filtered.get(*hit.index()).copied())
                .collect()
        } else {
            filtered
        }
    }

    /// Makes `query` the settled query and re-ranks the listing.
    #[instrument(skip(self, state), fields(query = %query))]
    fn settle(&mut self, query: String, state: &ExplorerState) {
        self.settled_query = query;
        self.run_search(state);
    }

    /// Ranks the region-filtered list against the settled query.
    #[instrument(skip(self, state))]
    fn run_search(&mut self, state: &ExplorerState) {
        let filtered = filter_by_region(state.countries(), self.region);
        self.hits = self.engine.search(&filtered, &self.settled_query);
        self.good_count =
            good_match_count(&self.hits, &self.settled_query, *state.config().score_cutoff());
        debug!(
            hits = self.hits.len(),
            good = self.good_count,
            "Listing re-ranked"
        );
        let len = self.visible(state).len();
        self.clamp_selection(len);
    }

    /// Reacts to an edited query: empty input clears the search right away,
    /// anything else waits out the debounce.
    fn on_query_edited(&mut self, state: &ExplorerState, now: Instant) {
        if self.query_input.trim().is_empty() {
            self.debouncer.cancel();
            self.settle(String::new(), state);
        } else {
            self.debouncer.submit(self.query_input.clone(), now);
        }
    }

    /// Keeps the selection inside the visible list.
    fn clamp_selection(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
        } else {
            self.selected = self.selected.min(len - 1);
        }
    }

    /// Moves the selection up by one, wrapping at the top.
    fn select_previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected = if self.selected > 0 {
            self.selected - 1
        } else {
            len - 1
        };
    }

    /// Moves the selection down by one, wrapping at the bottom.
    fn select_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected = (self.selected + 1) % len;
    }

    /// One listing row in the active view mode.
    fn row_text(&self, country: &Country) -> String {
        match self.view {
            ViewKind::Table => format!(
                "{:<28} {:<4} {:<10} {:<20} {:>14}",
                country.name(),
                country.alpha3_code(),
                country.region(),
                country.capital(),
                country.population_display(),
            ),
            _ => format!("{} {}", country.flag_emoji(), country.name()),
        }
    }
}

impl Screen for BrowseScreen {
    #[instrument(skip(self, frame, state))]
    fn render(&self, frame: &mut Frame, state: &ExplorerState) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new("Country Explorer")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let search_title = if self.input_mode {
            "Search (Enter to apply, Esc to leave)"
        } else {
            "Press '/' to search"
        };
        let search_style = if self.input_mode {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let search = Paragraph::new(self.query_input.as_str())
            .style(search_style)
            .block(Block::default().borders(Borders::ALL).title(search_title));
        frame.render_widget(search, chunks[1]);

        let visible = self.visible(state);
        let page_size = (*state.config().page_size()).max(1);
        let page = paginate(visible.len(), page_size, self.selected / page_size);
        let shown = page.slice(&visible);

        let items: Vec<ListItem> = shown
            .iter()
            .map(|country| ListItem::new(self.row_text(country)))
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("Countries ({})", self.view.label())),
            )
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        let mut list_state = ListState::default();
        if !shown.is_empty() {
            list_state.select(Some(self.selected - page.start()));
        }

        if self.view == ViewKind::Cards {
            let halves = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
                .split(chunks[2]);
            frame.render_stateful_widget(list, halves[0], &mut list_state);

            let card_text = visible
                .get(self.selected)
                .map(|country| country.card_lines().join("\n"))
                .unwrap_or_else(|| "No country selected.".to_string());
            let card = Paragraph::new(card_text)
                .style(Style::default().fg(Color::White))
                .block(Block::default().borders(Borders::ALL).title("Card"));
            frame.render_widget(card, halves[1]);
        } else {
            frame.render_stateful_widget(list, chunks[2], &mut list_state);
        }

        let pages = page_count(visible.len(), page_size).max(1);
        let status = if self.search_active() {
            format!(
                "Region: {} | View: {} | {} result(s), {} good | Page {}/{}",
                self.region.label(),
                self.view.label(),
                visible.len(),
                self.good_count,
                page.index() + 1,
                pages,
            )
        } else {
            format!(
                "Region: {} | View: {} | {} countries | Page {}/{}",
                self.region.label(),
                self.view.label(),
                visible.len(),
                page.index() + 1,
                pages,
            )
        };
        let status_bar = Paragraph::new(status)
            .style(Style::default().fg(Color::Green))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(status_bar, chunks[3]);

        let help_text = if self.input_mode {
            "Type query | Enter: Apply | Esc: Done"
        } else {
            "↑↓: Select | ←→: Page | Enter: Details | /: Search | r: Region | v: View | g: Game | q: Quit"
        };
        let help = Paragraph::new(help_text)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[4]);
    }

    #[instrument(skip(self, key, state))]
    fn handle_key(&mut self, key: KeyEvent, state: &ExplorerState) -> ScreenTransition {
        if self.input_mode {
            return match key.code {
                KeyCode::Char(c) => {
                    self.query_input.push(c);
                    self.on_query_edited(state, Instant::now());
                    ScreenTransition::Stay
                }
                KeyCode::Backspace => {
                    self.query_input.pop();
                    self.on_query_edited(state, Instant::now());
                    ScreenTransition::Stay
                }
                KeyCode::Enter => {
                    // Apply immediately instead of waiting out the debounce.
                    self.input_mode = false;
                    self.debouncer.cancel();
                    self.settle(self.query_input.clone(), state);
                    ScreenTransition::Stay
                }
                KeyCode::Esc => {
                    self.input_mode = false;
                    ScreenTransition::Stay
                }
                _ => ScreenTransition::Stay,
            };
        }

        let len = self.visible(state).len();
        let page_size = (*state.config().page_size()).max(1);
        match key.code {
            KeyCode::Char('/') => {
                self.input_mode = true;
                ScreenTransition::Stay
            }
            KeyCode::Up => {
                self.select_previous(len);
                ScreenTransition::Stay
            }
            KeyCode::Down => {
                self.select_next(len);
                ScreenTransition::Stay
            }
            KeyCode::Left => {
                self.selected = self.selected.saturating_sub(page_size);
                ScreenTransition::Stay
            }
            KeyCode::Right => {
                if len > 0 {
                    self.selected = (self.selected + page_size).min(len - 1);
                }
                ScreenTransition::Stay
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.region = self.region.next();
                info!(region = self.region.label(), "Region filter changed");
                self.selected = 0;
                self.run_search(state);
                ScreenTransition::Stay
            }
            KeyCode::Char('v') | KeyCode::Char('V') => {
                self.view = self.view.next();
                info!(view = self.view.label(), "View mode changed");
                ScreenTransition::Stay
            }
            KeyCode::Char('g') | KeyCode::Char('G') => {
                info!("Opening guess-the-flag game");
                ScreenTransition::GoToGame
            }
            KeyCode::Enter => match self.visible(state).get(self.selected) {
                Some(country) => {
                    info!(country = %country.name(), "Opening country details");
                    ScreenTransition::GoToDetail {
                        country: (*country).clone(),
                    }
                }
                None => ScreenTransition::Stay,
            },
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }

    #[instrument(skip(self, state))]
    fn tick(&mut self, now: Instant, state: &ExplorerState) {
        if let Some(query) = self.debouncer.poll(now) {
            debug!(query = %query, "Query settled");
            self.settle(query, state);
        }
    }
}
