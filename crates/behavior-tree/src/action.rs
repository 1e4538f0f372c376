//! The guarded action leaf.
//!
//! [`Cast`] turns "is this ability usable right now, and if so use it" into a
//! single node with no observable effect when the answer is no. It talks to
//! the host through [`ActionHost`], the minimum contract the engine needs
//! from whatever owns the character state.

use std::fmt;

use crate::{Behavior, Evaluation, Predicate, Status, TargetSelector};

/// Host-reported result of a dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DispatchOutcome {
    /// The host accepted the request for execution (cast started or queued).
    Accepted,
    /// The host refused the request at the instant of the attempt.
    Rejected,
}

impl DispatchOutcome {
    #[inline]
    pub fn is_accepted(self) -> bool {
        matches!(self, DispatchOutcome::Accepted)
    }
}

/// What the engine requires from the state it evaluates against.
///
/// Read methods take `&self` and are used for both the legality check and
/// target resolution; only [`ActionHost::dispatch`] takes `&mut self`.
pub trait ActionHost: Sized {
    /// Opaque ability key owned by the host's catalog.
    type Ability: Copy + fmt::Debug + Send + Sync + 'static;
    /// Handle to an entity an ability can affect.
    type Target: Copy + fmt::Debug + Send + Sync + 'static;

    /// Ability-level legality: known, off cooldown or holding a charge,
    /// affordable, and not globally locked.
    fn is_legal(&self, ability: Self::Ability) -> bool;

    /// Target-level legality: range, line of sight and facing.
    fn is_reachable(&self, _ability: Self::Ability, _target: Self::Target) -> bool {
        true
    }

    /// Whether a resolved target can be affected at all (alive, attackable).
    fn is_valid_target(&self, _target: Self::Target) -> bool {
        true
    }

    /// Resolves a selector, discarding targets the host considers invalid.
    fn resolve_target(
        &self,
        selector: &TargetSelector<Self, Self::Target>,
    ) -> Option<Self::Target> {
        selector
            .select(self)
            .filter(|target| self.is_valid_target(*target))
    }

    /// Submits one ability use. Called at most once per evaluation.
    fn dispatch(&mut self, ability: Self::Ability, target: Self::Target) -> DispatchOutcome;
}

/// Guarded leaf action: attempts one ability on one target.
///
/// # Semantics
///
/// Evaluated in order, stopping at the first failing step:
/// 1. If another action already dispatched in this evaluation → `Failure`
/// 2. Author guard (if any) must hold
/// 3. Host legality (`is_legal`) must hold
/// 4. The target selector must resolve to a valid target
/// 5. Legality is re-checked together with range/facing against the same
///    snapshot, immediately before use
/// 6. Exactly one dispatch: `Accepted` → `Success`, `Rejected` → `Failure`
///
/// `Cast` never returns `Running`. A `Failure` leaves the host untouched
/// (or, after a rejected dispatch, in whatever state the host chose), so the
/// same node can simply be retried next tick.
pub struct Cast<S: ActionHost> {
    ability: S::Ability,
    target: TargetSelector<S, S::Target>,
    guard: Option<Predicate<S>>,
}

impl<S: ActionHost> Cast<S> {
    /// Creates an unguarded action for `ability` on whatever `target` resolves to.
    pub fn new(ability: S::Ability, target: TargetSelector<S, S::Target>) -> Self {
        Self {
            ability,
            target,
            guard: None,
        }
    }

    /// The ability this node attempts.
    pub fn ability(&self) -> S::Ability {
        self.ability
    }

    /// The author guard, if one was attached.
    pub fn guard(&self) -> Option<&Predicate<S>> {
        self.guard.as_ref()
    }
}

impl<S: ActionHost + 'static> Cast<S> {
    /// Adds an author guard. Repeated calls are combined with `and`.
    pub fn with_guard(mut self, guard: Predicate<S>) -> Self {
        self.guard = Some(match self.guard.take() {
            Some(existing) => existing.and(guard),
            None => guard,
        });
        self
    }
}

impl<S: ActionHost + 'static> Behavior<S> for Cast<S> {
    fn tick(&self, ctx: &mut Evaluation<'_, S>) -> Status {
        if ctx.has_dispatched() {
            tracing::debug!(ability = ?self.ability, "dispatch already spent this tick");
            return Status::Failure;
        }

        let state = ctx.state();

        if let Some(guard) = &self.guard
            && !guard.check(state)
        {
            tracing::trace!(ability = ?self.ability, guard = guard.name(), "guard failed");
            return Status::Failure;
        }

        if !state.is_legal(self.ability) {
            tracing::trace!(ability = ?self.ability, "not legal");
            return Status::Failure;
        }

        let Some(target) = state.resolve_target(&self.target) else {
            tracing::trace!(ability = ?self.ability, selector = self.target.name(), "no target");
            return Status::Failure;
        };

        // Time of check and time of use share this snapshot.
        if !state.is_legal(self.ability) || !state.is_reachable(self.ability, target) {
            tracing::trace!(ability = ?self.ability, ?target, "target unreachable");
            return Status::Failure;
        }

        ctx.mark_dispatched();
        let outcome = ctx.state_mut().dispatch(self.ability, target);
        tracing::trace!(ability = ?self.ability, ?target, ?outcome, "dispatched");

        if outcome.is_accepted() {
            Status::Success
        } else {
            Status::Failure
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Selector, Sequence};

    #[derive(Default)]
    struct Host {
        legal: bool,
        in_range: bool,
        reject: bool,
        target: Option<u32>,
        dispatched: Vec<(&'static str, u32)>,
    }

    impl ActionHost for Host {
        type Ability = &'static str;
        type Target = u32;

        fn is_legal(&self, _ability: &'static str) -> bool {
            self.legal
        }

        fn is_reachable(&self, _ability: &'static str, _target: u32) -> bool {
            self.in_range
        }

        fn is_valid_target(&self, target: u32) -> bool {
            target != 0
        }

        fn dispatch(&mut self, ability: &'static str, target: u32) -> DispatchOutcome {
            self.dispatched.push((ability, target));
            if self.reject {
                DispatchOutcome::Rejected
            } else {
                DispatchOutcome::Accepted
            }
        }
    }

    fn ready_host() -> Host {
        Host {
            legal: true,
            in_range: true,
            target: Some(7),
            ..Host::default()
        }
    }

    fn current() -> TargetSelector<Host, u32> {
        TargetSelector::new("current", |h: &Host| h.target)
    }

    fn run(node: &dyn Behavior<Host>, host: &mut Host) -> Status {
        Evaluation::run(node, host).status
    }

    #[test]
    fn dispatches_when_everything_holds() {
        let mut host = ready_host();
        assert_eq!(run(&Cast::new("jab", current()), &mut host), Status::Success);
        assert_eq!(host.dispatched, vec![("jab", 7)]);
    }

    #[test]
    fn illegal_ability_never_dispatches() {
        let mut host = Host {
            legal: false,
            ..ready_host()
        };
        assert_eq!(run(&Cast::new("jab", current()), &mut host), Status::Failure);
        assert!(host.dispatched.is_empty());
    }

    #[test]
    fn missing_or_invalid_target_never_dispatches() {
        let mut host = Host {
            target: None,
            ..ready_host()
        };
        assert_eq!(run(&Cast::new("jab", current()), &mut host), Status::Failure);

        host.target = Some(0);
        assert_eq!(run(&Cast::new("jab", current()), &mut host), Status::Failure);
        assert!(host.dispatched.is_empty());
    }

    #[test]
    fn out_of_range_never_dispatches() {
        let mut host = Host {
            in_range: false,
            ..ready_host()
        };
        assert_eq!(run(&Cast::new("jab", current()), &mut host), Status::Failure);
        assert!(host.dispatched.is_empty());
    }

    #[test]
    fn failing_guard_never_dispatches() {
        let mut host = ready_host();
        let node = Cast::new("jab", current()).with_guard(Predicate::never());
        assert_eq!(run(&node, &mut host), Status::Failure);
        assert!(host.dispatched.is_empty());
    }

    #[test]
    fn rejected_dispatch_is_failure() {
        let mut host = Host {
            reject: true,
            ..ready_host()
        };
        assert_eq!(run(&Cast::new("jab", current()), &mut host), Status::Failure);
        assert_eq!(host.dispatched.len(), 1);
    }

    #[test]
    fn rejected_dispatch_stops_later_siblings_from_dispatching() {
        let mut host = Host {
            reject: true,
            ..ready_host()
        };
        let tree = Selector::new(vec![
            Box::new(Cast::new("rising_sun_kick", current())),
            Box::new(Cast::new("tiger_palm", current())),
        ]);

        assert_eq!(run(&tree, &mut host), Status::Failure);
        assert_eq!(host.dispatched, vec![("rising_sun_kick", 7)]);
    }

    #[test]
    fn sequence_of_casts_dispatches_once() {
        let mut host = ready_host();
        let tree = Sequence::new(vec![
            Box::new(Cast::new("touch_of_death", current())),
            Box::new(Cast::new("tiger_palm", current())),
        ]);

        let outcome = Evaluation::run(&tree, &mut host);
        assert_eq!(outcome.status, Status::Failure);
        assert!(outcome.dispatched);
        assert_eq!(host.dispatched, vec![("touch_of_death", 7)]);
    }

    #[test]
    fn guards_accumulate() {
        let node = Cast::<Host>::new("jab", current())
            .with_guard(Predicate::always())
            .with_guard(Predicate::never());
        assert_eq!(node.guard().map(|g| g.name()), Some("(always && never)"));
    }
}
