//! Leaf nodes that do not dispatch anything.
//!
//! - [`AlwaysSucceed`] / [`AlwaysFail`]: explicit sentinels, typically used as
//!   the `otherwise` branch of a [`crate::Conditional`] or as a "nothing to do,
//!   stop here" root guard
//! - [`Condition`]: a predicate as a node, for preconditions inside a [`crate::Sequence`]
//! - [`Busy`]: reports `Running` while a multi-tick commitment holds

use crate::{Behavior, Evaluation, Predicate, Status};

/// Returns `Success` without looking at the state.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysSucceed;

impl<S> Behavior<S> for AlwaysSucceed {
    #[inline]
    fn tick(&self, _ctx: &mut Evaluation<'_, S>) -> Status {
        Status::Success
    }
}

/// Returns `Failure` without looking at the state.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysFail;

impl<S> Behavior<S> for AlwaysFail {
    #[inline]
    fn tick(&self, _ctx: &mut Evaluation<'_, S>) -> Status {
        Status::Failure
    }
}

/// `Success` if the predicate holds, `Failure` otherwise.
pub struct Condition<S> {
    predicate: Predicate<S>,
}

impl<S> Condition<S> {
    pub fn new(predicate: Predicate<S>) -> Self {
        Self { predicate }
    }
}

impl<S> Behavior<S> for Condition<S> {
    fn tick(&self, ctx: &mut Evaluation<'_, S>) -> Status {
        Status::from_bool(self.predicate.check(ctx.state()))
    }
}

/// `Running` while the predicate holds, `Failure` otherwise.
///
/// Placed first under the root selector it short-circuits the whole tree
/// while the character is casting or channeling, without the driver having
/// to know about it.
pub struct Busy<S> {
    predicate: Predicate<S>,
}

impl<S> Busy<S> {
    pub fn new(predicate: Predicate<S>) -> Self {
        Self { predicate }
    }
}

impl<S> Behavior<S> for Busy<S> {
    fn tick(&self, ctx: &mut Evaluation<'_, S>) -> Status {
        if self.predicate.check(ctx.state()) {
            tracing::trace!(predicate = self.predicate.name(), "busy");
            Status::Running
        } else {
            Status::Failure
        }
    }
}
