//! Decorator behavior nodes.
//!
//! Decorators wrap a child behavior and gate or modify its result. This
//! module provides [`Conditional`] (predicate gate with optional fallback),
//! the workhorse of mode-gated rotations, and [`Inverter`] (NOT logic).

use crate::{Behavior, Evaluation, Predicate, Status};

/// Evaluates its child only when a predicate holds.
///
/// # Semantics
///
/// - If the predicate holds, returns the child's status
/// - Otherwise returns the `otherwise` branch's status if one is set
/// - Otherwise returns `Failure`
///
/// The branch that is not taken is never evaluated, so none of its guards
/// run. Nesting behaves identically at every depth.
pub struct Conditional<S> {
    predicate: Predicate<S>,
    child: Box<dyn Behavior<S>>,
    otherwise: Option<Box<dyn Behavior<S>>>,
}

impl<S> Conditional<S> {
    /// Creates a gate that fails when `predicate` does not hold.
    pub fn new(predicate: Predicate<S>, child: Box<dyn Behavior<S>>) -> Self {
        Self {
            predicate,
            child,
            otherwise: None,
        }
    }

    /// Sets the branch evaluated when the predicate does not hold.
    pub fn otherwise(mut self, fallback: Box<dyn Behavior<S>>) -> Self {
        self.otherwise = Some(fallback);
        self
    }

    /// The gating predicate.
    pub fn predicate(&self) -> &Predicate<S> {
        &self.predicate
    }
}

impl<S> Behavior<S> for Conditional<S> {
    fn tick(&self, ctx: &mut Evaluation<'_, S>) -> Status {
        if self.predicate.check(ctx.state()) {
            return self.child.tick(ctx);
        }

        tracing::trace!(predicate = self.predicate.name(), "gate closed");
        match &self.otherwise {
            Some(fallback) => fallback.tick(ctx),
            None => Status::Failure,
        }
    }
}

/// Inverts the result of its child behavior.
///
/// # Semantics
///
/// - If the child returns `Success`, the inverter returns `Failure`
/// - If the child returns `Failure`, the inverter returns `Success`
/// - `Running` passes through unchanged
pub struct Inverter<S> {
    child: Box<dyn Behavior<S>>,
}

impl<S> Inverter<S> {
    /// Creates a new inverter that wraps the given child behavior.
    pub fn new(child: Box<dyn Behavior<S>>) -> Self {
        Self { child }
    }
}

impl<S> Behavior<S> for Inverter<S> {
    fn tick(&self, ctx: &mut Evaluation<'_, S>) -> Status {
        self.child.tick(ctx).invert()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::{AlwaysFail, AlwaysSucceed, Condition};

    struct TestState {
        enemies: u32,
    }

    fn enemies_at_least(n: u32) -> Predicate<TestState> {
        Predicate::new(format!("enemies>={n}"), move |s: &TestState| s.enemies >= n)
    }

    fn counting(calls: &Arc<AtomicUsize>) -> Box<dyn Behavior<TestState>> {
        let calls = Arc::clone(calls);
        Box::new(Condition::new(Predicate::new("counting", move |_: &TestState| {
            calls.fetch_add(1, Ordering::SeqCst);
            true
        })))
    }

    #[test]
    fn closed_gate_never_touches_child() {
        let calls = Arc::new(AtomicUsize::new(0));
        let gate = Conditional::new(enemies_at_least(5), counting(&calls))
            .otherwise(Box::new(AlwaysSucceed));

        let mut state = TestState { enemies: 1 };
        assert_eq!(Evaluation::run(&gate, &mut state).status, Status::Success);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn closed_gate_without_fallback_fails() {
        let gate: Conditional<TestState> =
            Conditional::new(enemies_at_least(5), Box::new(AlwaysSucceed));

        let mut state = TestState { enemies: 1 };
        assert_eq!(Evaluation::run(&gate, &mut state).status, Status::Failure);
    }

    #[test]
    fn open_gate_returns_child_failure() {
        let gate: Conditional<TestState> =
            Conditional::new(enemies_at_least(5), Box::new(AlwaysFail));

        let mut state = TestState { enemies: 6 };
        assert_eq!(Evaluation::run(&gate, &mut state).status, Status::Failure);
    }

    #[test]
    fn open_gate_skips_fallback() {
        let calls = Arc::new(AtomicUsize::new(0));
        let gate = Conditional::new(enemies_at_least(5), Box::new(AlwaysSucceed))
            .otherwise(counting(&calls));

        let mut state = TestState { enemies: 6 };
        assert_eq!(Evaluation::run(&gate, &mut state).status, Status::Success);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn inverter_flips_terminal_states() {
        let mut state = TestState { enemies: 0 };
        let inverted: Inverter<TestState> = Inverter::new(Box::new(AlwaysSucceed));
        assert_eq!(Evaluation::run(&inverted, &mut state).status, Status::Failure);

        let inverted: Inverter<TestState> = Inverter::new(Box::new(AlwaysFail));
        assert_eq!(Evaluation::run(&inverted, &mut state).status, Status::Success);
    }
}
