//! Fixed-rate tick pacing.
//!
//! The clock never sleeps itself: the driver blocks in the input poll with
//! [`TickClock::until_next_tick`] as the timeout, so key events are read while
//! waiting for the tick boundary.

use std::time::{Duration, Instant};

/// Schedules ticks at a fixed interval. Deadlines advance by whole intervals
/// from the previous deadline, and a clock that falls behind skips ahead
/// instead of bursting to catch up.
#[derive(Debug, Clone)]
pub struct TickClock {
    interval: Duration,
    next_tick: Instant,
}

impl TickClock {
    pub fn new(interval: Duration) -> Self {
        Self::starting_at(interval, Instant::now())
    }

    pub fn starting_at(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next_tick: now + interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Time left before the next tick is due, zero if already due.
    pub fn until_next_tick(&self, now: Instant) -> Duration {
        self.next_tick.saturating_duration_since(now)
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_tick
    }

    /// Schedule the following tick.
    pub fn advance(&mut self, now: Instant) {
        self.next_tick += self.interval;
        if self.next_tick <= now {
            self.next_tick = now + self.interval;
        }
    }
}
