//! Cancellable periodic timer for the round clock.
//!
//! The frame loop owns wall-clock time; the timer only converts the deltas it
//! is fed into whole periods. Cancelling means dropping the value, so a
//! cancelled timer cannot deliver another tick.

use std::time::Duration;

/// Clock resolution: one tick adds this much to the elapsed time.
pub const TICK_PERIOD: Duration = Duration::from_millis(100);

const MIN_PERIOD: Duration = Duration::from_millis(1);

#[derive(Debug)]
pub struct TickTimer {
    period: Duration,
    carry: Duration,
}

impl TickTimer {
    /// Arm a timer. Periods below 1ms are raised to 1ms.
    #[must_use]
    pub fn start(period: Duration) -> Self {
        Self {
            period: period.max(MIN_PERIOD),
            carry: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Feed elapsed wall-clock time; returns the number of whole periods
    /// that became due. The remainder carries into the next poll.
    pub fn poll(&mut self, delta: Duration) -> u32 {
        self.carry = self.carry.saturating_add(delta);
        let due = self.carry.as_nanos() / self.period.as_nanos();
        let due = u32::try_from(due).unwrap_or(u32::MAX);
        self.carry = self
            .carry
            .saturating_sub(self.period.saturating_mul(due));
        due
    }
}
