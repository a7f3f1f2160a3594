//! Fixed-period deadlines with an explicit overrun policy.

use std::time::{Duration, Instant};

use log::warn;

use crate::config::OverrunPolicy;

/// What the loop should do after finishing a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    /// Time to sleep before starting the next cycle.
    pub wait: Duration,
    /// Period boundaries the finished cycle ran past.
    pub missed: u64,
}

#[derive(Debug, Clone)]
pub struct PeriodicSchedule {
    period: Duration,
    policy: OverrunPolicy,
    /// End of the current cycle's period.
    deadline: Instant,
    missed_total: u64,
}

impl PeriodicSchedule {
    /// Schedule whose first cycle starts at `start`.
    ///
    /// `period` must be non-zero.
    pub fn new(start: Instant, period: Duration, policy: OverrunPolicy) -> Self {
        debug_assert!(!period.is_zero());
        Self {
            period,
            policy,
            deadline: start + period,
            missed_total: 0,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn next_deadline(&self) -> Instant {
        self.deadline
    }

    pub fn missed_total(&self) -> u64 {
        self.missed_total
    }

    /// Record that the current cycle finished at `now` and advance to the next.
    pub fn complete(&mut self, now: Instant) -> Tick {
        if now <= self.deadline {
            let wait = self.deadline - now;
            self.deadline += self.period;
            return Tick { wait, missed: 0 };
        }

        let late = now.saturating_duration_since(self.deadline);
        let tick = match self.policy {
            OverrunPolicy::Resync => {
                // Snap to the first period boundary at or after `now`.
                let periods = late.as_nanos().div_ceil(self.period.as_nanos());
                let skipped = duration_mul(self.period, periods);
                let start = self.deadline + skipped;
                self.deadline = start + self.period;
                Tick {
                    wait: start.saturating_duration_since(now),
                    missed: periods.min(u64::MAX as u128) as u64,
                }
            }
            OverrunPolicy::CatchUp => {
                self.deadline += self.period;
                Tick {
                    wait: Duration::ZERO,
                    missed: 1,
                }
            }
        };
        self.missed_total = self.missed_total.saturating_add(tick.missed);
        warn!(
            "cycle overran its {:?} period by {:?} ({} missed, policy {:?})",
            self.period, late, tick.missed, self.policy
        );
        tick
    }
}

fn duration_mul(period: Duration, times: u128) -> Duration {
    let nanos = period.as_nanos().saturating_mul(times);
    Duration::from_nanos(nanos.min(u64::MAX as u128) as u64)
}
