//! Tick driver: evaluates a rotation once per tick.
//!
//! The driver owns no state of its own beyond statistics. Callers hand it a
//! fresh snapshot every tick; whatever the rotation dispatches lands in that
//! snapshot, and applying it is the caller's business.

use behavior_tree::Outcome;

use crate::diagnostics::TickStats;
use crate::rotation::Rotation;

pub struct TickDriver<S> {
    rotation: Rotation<S>,
    stats: TickStats,
}

impl<S> TickDriver<S> {
    pub fn new(rotation: Rotation<S>, idle_warn_after: u32) -> Self {
        Self {
            rotation,
            stats: TickStats::new(idle_warn_after),
        }
    }

    /// Evaluates the rotation against `state` exactly once.
    pub fn tick(&mut self, state: &mut S) -> Outcome {
        let outcome = self.rotation.evaluate(state);
        self.stats.record(outcome);
        tracing::debug!(
            rotation = self.rotation.name(),
            tick = self.stats.ticks,
            status = ?outcome.status,
            dispatched = outcome.dispatched,
            "tick evaluated"
        );
        outcome
    }

    pub fn rotation(&self) -> &Rotation<S> {
        &self.rotation
    }

    pub fn stats(&self) -> &TickStats {
        &self.stats
    }
}
