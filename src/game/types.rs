//! Core domain types for the guess-the-flag game.

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// Guesses a player gets per round.
pub const MAX_TRIES: u32 = 6;

/// Delay before a finished round resets, in milliseconds.
pub const RESET_DELAY_MS: u64 = 5000;

/// Run state of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Guessing is open.
    Running,
    /// The flag was identified. Terminal until reset.
    Won,
    /// All tries were spent. Terminal until reset.
    Lost,
}

impl RoundPhase {
    /// Display label for this phase.
    pub fn label(&self) -> &'static str {
        match self {
            RoundPhase::Running => "Running",
            RoundPhase::Won => "Won",
            RoundPhase::Lost => "Lost",
        }
    }
}

/// Result of evaluating one guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The guess matched; the round is now won.
    Correct,
    /// The guess missed; tries remain.
    Incorrect {
        /// Tries left after this miss.
        tries_remaining: u32,
    },
    /// The guess missed and spent the last try; the round is now lost.
    Exhausted,
    /// The round was already over (or not started); nothing was evaluated.
    RoundOver,
}

/// Serializable image of one round, as persisted between runs.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize, new)]
pub struct RoundSnapshot {
    /// Tries left when the snapshot was taken.
    tries_remaining: u32,
    /// Normalized guesses made so far.
    guessed: Vec<String>,
    /// Run state of the round.
    phase: RoundPhase,
    /// Alpha-3 code of the selected country, if a round was started.
    selected_code: Option<String>,
}
