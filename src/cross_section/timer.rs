//! Cancellable fixed-period repeating task.
//!
//! The egui loop has no interval callbacks, so the timer is polled with the
//! current `Instant` and reports how many pulses fell due since the last
//! poll. Cancelling is dropping the value.

use std::time::{Duration, Instant};

/// Upper bound on pulses delivered by one poll (e.g. after the window was
/// hidden for a while).
pub const MAX_CATCH_UP: u32 = 8;

const MIN_PERIOD: Duration = Duration::from_millis(1);

#[derive(Debug, Clone)]
pub struct RepeatingTimer {
    period: Duration,
    next_due: Instant,
}

impl RepeatingTimer {
    /// First pulse fires one period after `now`.
    pub fn start(period: Duration, now: Instant) -> Self {
        let period = period.max(MIN_PERIOD);
        Self {
            period,
            next_due: now + period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn next_due(&self) -> Instant {
        self.next_due
    }

    /// Time left until the next pulse (zero if already due).
    pub fn time_until_next(&self, now: Instant) -> Duration {
        self.next_due.saturating_duration_since(now)
    }

    /// Number of pulses due at `now`; consumes them.
    pub fn due_pulses(&mut self, now: Instant) -> u32 {
        if now < self.next_due {
            return 0;
        }
        let behind = now.duration_since(self.next_due).as_nanos() / self.period.as_nanos();
        let due = behind.saturating_add(1);
        if due > MAX_CATCH_UP as u128 {
            log::debug!("timer {} pulses behind, skipping ahead", due);
            self.next_due = now + self.period;
            return MAX_CATCH_UP;
        }
        let due = due as u32;
        self.next_due += self.period * due;
        due
    }
}
