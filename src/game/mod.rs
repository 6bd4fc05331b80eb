//! Guess-the-flag game: round state machine and its domain types.

mod rules;
mod types;

pub use rules::GuessGame;
pub use types::{GuessOutcome, MAX_TRIES, RESET_DELAY_MS, RoundPhase, RoundSnapshot};
