//! Round engine for the guess-the-flag game.

use std::time::{Duration, Instant};

use rand::Rng;
use tracing::{debug, info, instrument};

use super::types::{GuessOutcome, MAX_TRIES, RoundPhase, RoundSnapshot};
use crate::country::Country;
use crate::error::ValidationError;

/// Guess-the-flag round engine.
///
/// Owns the country pool and one round of state: remaining tries, the
/// guessed-name history, and the run phase. Mutation happens only through
/// [`GuessGame::submit_guess`], [`GuessGame::skip`], and
/// [`GuessGame::reset`]; the delayed post-round reset is an explicit
/// deadline the owner polls with [`GuessGame::poll_reset`]. Random country
/// selection goes through a caller-supplied generator so tests can seed it.
#[derive(Debug, Clone)]
pub struct GuessGame {
    countries: Vec<Country>,
    tries_remaining: u32,
    selected: Option<usize>,
    guessed: Vec<String>,
    phase: RoundPhase,
    reset_delay: Duration,
    reset_at: Option<Instant>,
}

impl GuessGame {
    /// Creates an engine over `countries` with no round started.
    ///
    /// No country is selected until the first [`GuessGame::reset`] or
    /// [`GuessGame::skip`].
    #[instrument(skip(countries), fields(count = countries.len()))]
    pub fn new(countries: Vec<Country>, reset_delay: Duration) -> Self {
        Self {
            countries,
            tries_remaining: MAX_TRIES,
            selected: None,
            guessed: Vec::new(),
            phase: RoundPhase::Running,
            reset_delay,
            reset_at: None,
        }
    }

    /// The country pool.
    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    /// Tries left in the current round.
    pub fn tries_remaining(&self) -> u32 {
        self.tries_remaining
    }

    /// Normalized guesses made this round, in submission order.
    pub fn guessed(&self) -> &[String] {
        &self.guessed
    }

    /// Run state of the current round.
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// The country to guess, if a round has started.
    pub fn selected(&self) -> Option<&Country> {
        self.selected.and_then(|idx| self.countries.get(idx))
    }

    /// True while a delayed reset is scheduled.
    pub fn reset_pending(&self) -> bool {
        self.reset_at.is_some()
    }

    /// Evaluates one guess at `now`.
    ///
    /// The guess is trimmed and lowercased before comparison. A correct
    /// guess wins the round, a miss spends a try, and the miss that spends
    /// the last try loses it; won and lost rounds schedule a reset
    /// `reset_delay` after `now`. Guesses against a finished or unstarted
    /// round answer [`GuessOutcome::RoundOver`] without evaluation.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when the guess is empty after trimming,
    /// with no state touched.
    #[instrument(skip(self, guess), fields(phase = self.phase.label(), tries = self.tries_remaining))]
    pub fn submit_guess(
        &mut self,
        guess: &str,
        now: Instant,
    ) -> Result<GuessOutcome, ValidationError> {
        let normalized = guess.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(ValidationError::new("Guess cannot be empty"));
        }

        if self.phase != RoundPhase::Running {
            debug!("Guess ignored, round already over");
            return Ok(GuessOutcome::RoundOver);
        }
        let Some(answer) = self.selected().map(|c| c.name().clone()) else {
            debug!("Guess ignored, no round started");
            return Ok(GuessOutcome::RoundOver);
        };

        if answer.trim().to_lowercase() == normalized {
            info!(country = %answer, "Round won");
            self.phase = RoundPhase::Won;
            self.reset_at = Some(now + self.reset_delay);
            return Ok(GuessOutcome::Correct);
        }

        if !self.guessed.contains(&normalized) {
            self.guessed.push(normalized);
        }
        self.tries_remaining -= 1;
        if self.tries_remaining == 0 {
            info!("Round lost, tries exhausted");
            self.phase = RoundPhase::Lost;
            self.reset_at = Some(now + self.reset_delay);
            Ok(GuessOutcome::Exhausted)
        } else {
            debug!(tries = self.tries_remaining, "Incorrect guess");
            Ok(GuessOutcome::Incorrect {
                tries_remaining: self.tries_remaining,
            })
        }
    }

    /// Re-selects the country to guess uniformly at random.
    ///
    /// Tries, history, and phase stay untouched. Returns `None` without
    /// changing the selection when the pool is empty.
    #[instrument(skip(self, rng))]
    pub fn skip<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<&Country> {
        if self.countries.is_empty() {
            return None;
        }
        let idx = rng.gen_range(0..self.countries.len());
        self.selected = Some(idx);
        let country = &self.countries[idx];
        debug!(country = %country.name(), "Country selected");
        Some(country)
    }

    /// Starts a fresh round: full tries, empty history, Running phase, and a
    /// newly selected country.
    #[instrument(skip(self, rng))]
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<&Country> {
        info!("Round reset");
        self.tries_remaining = MAX_TRIES;
        self.guessed.clear();
        self.phase = RoundPhase::Running;
        self.reset_at = None;
        self.skip(rng)
    }

    /// Fires the scheduled reset once its deadline has passed.
    ///
    /// Returns `true` when a reset ran so the owner can re-render and
    /// persist.
    #[instrument(skip(self, rng))]
    pub fn poll_reset<R: Rng + ?Sized>(&mut self, now: Instant, rng: &mut R) -> bool {
        match self.reset_at {
            Some(deadline) if deadline <= now => {
                self.reset(rng);
                true
            }
            _ => false,
        }
    }

    /// Cancels a scheduled reset without firing it.
    #[instrument(skip(self))]
    pub fn cancel_reset(&mut self) {
        if self.reset_at.take().is_some() {
            debug!("Scheduled reset cancelled");
        }
    }

    /// Serializable image of the current round.
    #[instrument(skip(self))]
    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot::new(
            self.tries_remaining,
            self.guessed.clone(),
            self.phase,
            self.selected().map(|c| c.alpha3_code().clone()),
        )
    }

    /// Restores a previously persisted round.
    ///
    /// Applies only when the snapshot is still Running and its selected code
    /// resolves against the current pool; returns `false` otherwise so the
    /// caller can start fresh.
    #[instrument(skip(self, snapshot), fields(phase = snapshot.phase().label()))]
    pub fn restore(&mut self, snapshot: &RoundSnapshot) -> bool {
        if *snapshot.phase() != RoundPhase::Running {
            return false;
        }
        let Some(code) = snapshot.selected_code() else {
            return false;
        };
        let Some(idx) = self
            .countries
            .iter()
            .position(|c| c.alpha3_code().eq_ignore_ascii_case(code))
        else {
            debug!(code = %code, "Snapshot code not in pool");
            return false;
        };

        self.selected = Some(idx);
        self.tries_remaining = (*snapshot.tries_remaining()).clamp(1, MAX_TRIES);
        self.guessed = snapshot.guessed().clone();
        self.phase = RoundPhase::Running;
        self.reset_at = None;
        info!(tries = self.tries_remaining, "Round restored");
        true
    }
}
