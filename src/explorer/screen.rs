//! Screen trait and transition type for the explorer state machine.

use std::time::{Duration, Instant};

use crossterm::event::KeyEvent;
use ratatui::Frame;

use crate::country::Country;
use crate::explorer::ExplorerState;

/// How long transient notices stay on screen.
pub const TOAST_TTL: Duration = Duration::from_secs(3);

/// The result of handling an input event on a screen.
///
/// Screens return this from [`Screen::handle_key`] to drive the
/// [`ExplorerController`](crate::ExplorerController) state machine.
#[derive(Debug, Clone)]
pub enum ScreenTransition {
    /// Stay on the current screen.
    Stay,
    /// Navigate to the browse screen.
    GoToBrowse,
    /// Open the detail page for a country.
    GoToDetail {
        /// The country to show.
        country: Country,
    },
    /// Open the guess-the-flag game.
    GoToGame,
    /// Exit the explorer cleanly.
    Quit,
}

/// Trait implemented by each screen in the explorer state machine.
///
/// Each screen owns its own state, renders its UI, and handles key events.
/// The controller calls [`Screen::tick`] every loop iteration so screens can
/// poll their deadlines (debounce, round reset, notice expiry) without
/// background timers.
pub trait Screen {
    /// Renders the screen into the provided [`Frame`].
    fn render(&self, frame: &mut Frame, state: &ExplorerState);

    /// Handles a key event and returns the resulting [`ScreenTransition`].
    fn handle_key(&mut self, key: KeyEvent, state: &ExplorerState) -> ScreenTransition;

    /// Advances time-based state. Default: nothing to advance.
    fn tick(&mut self, _now: Instant, _state: &ExplorerState) {}
}

/// A transient notice with an expiry deadline.
#[derive(Debug, Clone)]
pub struct Toast {
    message: String,
    expires_at: Instant,
}

impl Toast {
    /// Creates a notice that expires [`TOAST_TTL`] after `now`.
    pub fn new(message: impl Into<String>, now: Instant) -> Self {
        Self {
            message: message.into(),
            expires_at: now + TOAST_TTL,
        }
    }

    /// The notice text.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// True once the notice should disappear.
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}
