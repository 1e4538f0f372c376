//! Builder utilities for ergonomic behavior tree construction.
//!
//! This module provides helper functions to reduce boilerplate when building
//! behavior trees. Instead of writing verbose `Box::new(Selector::new(vec![...]))`,
//! you can use shorter functions like `selector(vec![...])`.

use crate::{
    ActionHost, AlwaysFail, AlwaysSucceed, Behavior, Busy, Cast, Condition, Conditional,
    Inverter, Predicate, Selector, Sequence, TargetSelector,
};

/// Creates a sequence node.
///
/// Shorthand for `Box::new(Sequence::new(children))`.
#[inline]
pub fn sequence<S: 'static>(children: Vec<Box<dyn Behavior<S>>>) -> Box<dyn Behavior<S>> {
    Box::new(Sequence::new(children))
}

/// Creates a selector node.
///
/// Shorthand for `Box::new(Selector::new(children))`.
#[inline]
pub fn selector<S: 'static>(children: Vec<Box<dyn Behavior<S>>>) -> Box<dyn Behavior<S>> {
    Box::new(Selector::new(children))
}

/// Creates a gate that evaluates `child` only while `predicate` holds.
#[inline]
pub fn when<S: 'static>(
    predicate: Predicate<S>,
    child: Box<dyn Behavior<S>>,
) -> Box<dyn Behavior<S>> {
    Box::new(Conditional::new(predicate, child))
}

/// Creates a gate with an explicit fallback branch.
#[inline]
pub fn when_else<S: 'static>(
    predicate: Predicate<S>,
    child: Box<dyn Behavior<S>>,
    otherwise: Box<dyn Behavior<S>>,
) -> Box<dyn Behavior<S>> {
    Box::new(Conditional::new(predicate, child).otherwise(otherwise))
}

/// Creates an inverter node.
#[inline]
pub fn inverter<S: 'static>(child: Box<dyn Behavior<S>>) -> Box<dyn Behavior<S>> {
    Box::new(Inverter::new(child))
}

/// Creates a predicate leaf.
#[inline]
pub fn condition<S: 'static>(predicate: Predicate<S>) -> Box<dyn Behavior<S>> {
    Box::new(Condition::new(predicate))
}

/// Creates a leaf that reports `Running` while `predicate` holds.
#[inline]
pub fn busy<S: 'static>(predicate: Predicate<S>) -> Box<dyn Behavior<S>> {
    Box::new(Busy::new(predicate))
}

/// Creates an always-succeed sentinel.
#[inline]
pub fn succeed<S: 'static>() -> Box<dyn Behavior<S>> {
    Box::new(AlwaysSucceed)
}

/// Creates an always-fail sentinel.
#[inline]
pub fn fail<S: 'static>() -> Box<dyn Behavior<S>> {
    Box::new(AlwaysFail)
}

/// Creates a root guard: stop the tick with `Success` while `predicate` holds.
///
/// Used for "nothing to do" situations such as having no target.
#[inline]
pub fn skip_tick_if<S: 'static>(predicate: Predicate<S>) -> Box<dyn Behavior<S>> {
    when(predicate, succeed())
}

/// Creates a guarded action.
#[inline]
pub fn cast<S: ActionHost + 'static>(
    ability: S::Ability,
    target: TargetSelector<S, S::Target>,
) -> Box<dyn Behavior<S>> {
    Box::new(Cast::new(ability, target))
}

/// Creates a guarded action with an author guard.
#[inline]
pub fn cast_if<S: ActionHost + 'static>(
    ability: S::Ability,
    target: TargetSelector<S, S::Target>,
    guard: Predicate<S>,
) -> Box<dyn Behavior<S>> {
    Box::new(Cast::new(ability, target).with_guard(guard))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Evaluation, Status};

    struct Target(Option<u32>);

    fn has_target() -> Predicate<Target> {
        Predicate::new("has_target", |s: &Target| s.0.is_some())
    }

    fn status(node: &dyn Behavior<Target>, state: &mut Target) -> Status {
        Evaluation::run(node, state).status
    }

    #[test]
    fn condition_and_inverter_compose_into_a_guard() {
        let no_target = inverter(condition(has_target()));

        assert_eq!(status(no_target.as_ref(), &mut Target(None)), Status::Success);
        assert_eq!(status(no_target.as_ref(), &mut Target(Some(4))), Status::Failure);
    }

    #[test]
    fn inverter_passes_running_through() {
        let node = inverter(busy(has_target()));

        assert_eq!(status(node.as_ref(), &mut Target(Some(4))), Status::Running);
        assert_eq!(status(node.as_ref(), &mut Target(None)), Status::Success);
    }
}
