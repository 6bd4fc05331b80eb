//! Trailing-edge debounce driven by an explicit clock.

use std::time::{Duration, Instant};
use tracing::{debug, instrument};

/// Default interval a value must stay unchanged before it settles.
pub const DEBOUNCE_MS: u64 = 500;

/// Trailing-edge debouncer.
///
/// Holds at most one pending value and its deadline. A new submission
/// supersedes the pending value and restarts the timer; `poll` releases the
/// value exactly once, the first time it is called at or past the deadline.
/// The owner polls from its event loop, so there is no background timer and
/// dropping the debouncer (or calling [`Debouncer::cancel`]) discards any
/// pending value.
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    /// Creates a debouncer with the given settle delay.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Submits a new input, discarding any pending value and restarting the
    /// timer from `now`.
    #[instrument(skip_all)]
    pub fn submit(&mut self, value: T, now: Instant) {
        let superseded = self.pending.is_some();
        self.pending = Some((value, now + self.delay));
        debug!(superseded, delay_ms = self.delay.as_millis() as u64, "Input submitted");
    }

    /// Releases the pending value if its deadline has passed.
    ///
    /// Returns `Some` at most once per submitted value.
    #[instrument(skip_all)]
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((_, deadline)) if *deadline <= now => {
                debug!("Debounced value settled");
                self.pending.take().map(|(value, _)| value)
            }
            _ => None,
        }
    }

    /// Discards any pending value without releasing it.
    #[instrument(skip_all)]
    pub fn cancel(&mut self) {
        if self.pending.take().is_some() {
            debug!("Pending value cancelled");
        }
    }

    /// True while a value is waiting for its deadline.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// The configured settle delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEBOUNCE_MS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_held_until_deadline() {
        let mut debouncer = Debouncer::new(Duration::from_millis(500));
        let t0 = Instant::now();
        debouncer.submit("au", t0);
        assert_eq!(debouncer.poll(t0 + Duration::from_millis(499)), None);
        assert_eq!(debouncer.poll(t0 + Duration::from_millis(500)), Some("au"));
    }

    #[test]
    fn test_released_at_most_once() {
        let mut debouncer = Debouncer::new(Duration::from_millis(500));
        let t0 = Instant::now();
        debouncer.submit("au", t0);
        let settle = t0 + Duration::from_millis(500);
        assert_eq!(debouncer.poll(settle), Some("au"));
        assert_eq!(debouncer.poll(settle), None);
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_new_input_restarts_timer() {
        let mut debouncer = Debouncer::new(Duration::from_millis(500));
        let t0 = Instant::now();
        debouncer.submit("a", t0);
        debouncer.submit("au", t0 + Duration::from_millis(400));
        // The first deadline has passed but the value was superseded.
        assert_eq!(debouncer.poll(t0 + Duration::from_millis(600)), None);
        assert_eq!(debouncer.poll(t0 + Duration::from_millis(900)), Some("au"));
    }

    #[test]
    fn test_cancel_discards_pending() {
        let mut debouncer = Debouncer::new(Duration::from_millis(500));
        let t0 = Instant::now();
        debouncer.submit("au", t0);
        debouncer.cancel();
        assert_eq!(debouncer.poll(t0 + Duration::from_millis(1000)), None);
    }
}
