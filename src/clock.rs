use std::time::{Duration, Instant};

/// Cancellable repeating deadline that drives game ticks.
///
/// At most one deadline is armed at a time. Every period change goes through
/// [`GameClock::swap_period`], which cancels the armed deadline before
/// installing the new one, so a deadline scheduled under the old cadence can
/// never fire after the swap.
#[derive(Debug, Clone, Copy)]
pub struct GameClock {
    period: Duration,
    deadline: Option<Instant>,
}

impl GameClock {
    /// Creates an unarmed clock with the given tick period.
    #[must_use]
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            deadline: None,
        }
    }

    /// Arms the next deadline one period from `now`. Arming an already armed
    /// clock restarts the countdown.
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.period);
    }

    /// Cancels the armed deadline. A cancelled clock never fires.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Cancels the armed deadline and re-arms with `period` from `now`.
    pub fn swap_period(&mut self, period: Duration, now: Instant) {
        self.cancel();
        self.period = period;
        self.arm(now);
    }

    /// Returns true when the armed deadline has elapsed, re-arming for the
    /// following tick. Fires at most once per call.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = Some(now + self.period);
                true
            }
            _ => false,
        }
    }

    /// Returns true while a deadline is armed.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns the current tick period.
    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::GameClock;

    const PERIOD: Duration = Duration::from_millis(200);

    #[test]
    fn unarmed_clock_never_fires() {
        let mut clock = GameClock::new(PERIOD);
        assert!(!clock.fire(Instant::now() + Duration::from_secs(60)));
    }

    #[test]
    fn fires_once_per_elapsed_period() {
        let start = Instant::now();
        let mut clock = GameClock::new(PERIOD);
        clock.arm(start);

        assert!(!clock.fire(start));
        assert!(!clock.fire(start + PERIOD - Duration::from_millis(1)));
        assert!(clock.fire(start + PERIOD));

        // Re-armed from the fire instant, not the missed deadline.
        assert!(!clock.fire(start + PERIOD + Duration::from_millis(1)));
        assert!(clock.fire(start + PERIOD * 2));
    }

    #[test]
    fn cancel_prevents_a_scheduled_fire() {
        let start = Instant::now();
        let mut clock = GameClock::new(PERIOD);
        clock.arm(start);
        clock.cancel();

        assert!(!clock.is_armed());
        assert!(!clock.fire(start + PERIOD * 10));
    }

    #[test]
    fn swap_period_replaces_the_pending_deadline() {
        let start = Instant::now();
        let mut clock = GameClock::new(PERIOD);
        clock.arm(start);

        let faster = Duration::from_millis(50);
        clock.swap_period(faster, start);

        assert_eq!(clock.period(), faster);
        assert!(clock.fire(start + faster));
        // The old 200ms deadline is gone; the next fire follows the new
        // cadence from the previous fire.
        assert!(!clock.fire(start + faster + Duration::from_millis(49)));
        assert!(clock.fire(start + faster * 2));
    }
}
