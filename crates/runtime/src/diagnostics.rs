//! Per-run tick statistics.
//!
//! A rotation that stops acting is the most common way a script breaks
//! silently (a guard that can never hold, a missing setting). [`TickStats`]
//! counts idle ticks and warns once a streak gets long.

use behavior_tree::{Outcome, Status};

/// Counters fed by every evaluated tick.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickStats {
    pub ticks: u64,
    /// Ticks that attempted a dispatch, accepted or not.
    pub dispatches: u64,
    /// Ticks whose root returned `Running`.
    pub running: u64,
    /// Ticks with no dispatch and a failing root.
    pub idle: u64,
    pub idle_streak: u32,
    pub longest_idle_streak: u32,
    warn_after: u32,
}

impl TickStats {
    /// `warn_after` of zero disables the idle warning.
    pub fn new(warn_after: u32) -> Self {
        Self {
            warn_after,
            ..Self::default()
        }
    }

    pub fn record(&mut self, outcome: Outcome) {
        self.ticks += 1;
        if outcome.dispatched {
            self.dispatches += 1;
        }
        if outcome.status == Status::Running {
            self.running += 1;
        }

        if !outcome.is_idle() {
            self.idle_streak = 0;
            return;
        }

        self.idle += 1;
        self.idle_streak += 1;
        self.longest_idle_streak = self.longest_idle_streak.max(self.idle_streak);
        if self.warn_after > 0 && self.idle_streak == self.warn_after {
            tracing::warn!(
                streak = self.idle_streak,
                tick = self.ticks,
                "rotation has not acted for {} consecutive ticks",
                self.idle_streak
            );
        }
    }

    /// Share of ticks that attempted a dispatch.
    pub fn dispatch_rate(&self) -> f64 {
        if self.ticks == 0 {
            return 0.0;
        }
        self.dispatches as f64 / self.ticks as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idle() -> Outcome {
        Outcome {
            status: Status::Failure,
            dispatched: false,
        }
    }

    fn acted() -> Outcome {
        Outcome {
            status: Status::Success,
            dispatched: true,
        }
    }

    #[test]
    fn idle_streak_resets_on_dispatch() {
        let mut stats = TickStats::new(3);
        for _ in 0..4 {
            stats.record(idle());
        }
        stats.record(acted());
        stats.record(idle());

        assert_eq!(stats.ticks, 6);
        assert_eq!(stats.idle, 5);
        assert_eq!(stats.idle_streak, 1);
        assert_eq!(stats.longest_idle_streak, 4);
        assert_eq!(stats.dispatches, 1);
    }

    #[test]
    fn running_and_skipped_ticks_are_not_idle() {
        let mut stats = TickStats::new(1);
        stats.record(Outcome {
            status: Status::Running,
            dispatched: false,
        });
        stats.record(Outcome {
            status: Status::Success,
            dispatched: false,
        });

        assert_eq!(stats.idle, 0);
        assert_eq!(stats.running, 1);
        assert_eq!(stats.dispatch_rate(), 0.0);
    }
}
