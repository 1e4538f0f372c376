//! Core behavior trait and the per-tick evaluation handle.
//!
//! This module defines the [`Behavior`] trait, which is the fundamental
//! abstraction for all behavior tree nodes, and [`Evaluation`], the context
//! threaded through one evaluate call. The trait is generic over a state type
//! `S`, the host snapshot that predicates read and actions dispatch into.

use std::sync::Arc;

use crate::Status;

/// A behavior tree node that can be evaluated against a state snapshot.
///
/// Nodes are built once and evaluated every tick. They hold no per-tick
/// state of their own, which keeps a tree shareable across threads and
/// safe to re-enter.
pub trait Behavior<S>: Send + Sync {
    /// Evaluate this behavior node for the current tick.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The evaluation handle. Predicates only ever see a shared
    ///   reference to the state through [`Evaluation::state`]; the single
    ///   permitted mutation (a dispatch) goes through the action leaf.
    ///
    /// # Returns
    ///
    /// - `Status::Success` if the behavior succeeded
    /// - `Status::Failure` if the behavior failed
    /// - `Status::Running` if the behavior is mid-commitment
    fn tick(&self, ctx: &mut Evaluation<'_, S>) -> Status;
}

/// Blanket implementation for boxed behaviors.
///
/// This allows `Box<dyn Behavior<S>>` to also implement `Behavior<S>`,
/// enabling dynamic dispatch and heterogeneous collections of nodes.
impl<S> Behavior<S> for Box<dyn Behavior<S>> {
    #[inline]
    fn tick(&self, ctx: &mut Evaluation<'_, S>) -> Status {
        (**self).tick(ctx)
    }
}

/// Shared subtrees, e.g. one AoE selector reused under several mode gates.
impl<S> Behavior<S> for Arc<dyn Behavior<S>> {
    #[inline]
    fn tick(&self, ctx: &mut Evaluation<'_, S>) -> Status {
        (**self).tick(ctx)
    }
}

/// Handle passed down the tree during a single evaluate call.
///
/// Wraps the host state for exactly one tick and carries the dispatch latch
/// that enforces at most one dispatch per evaluation, whatever the shape of
/// the tree.
pub struct Evaluation<'a, S> {
    state: &'a mut S,
    dispatched: bool,
}

impl<'a, S> Evaluation<'a, S> {
    /// Starts a new evaluation over the given state.
    pub fn new(state: &'a mut S) -> Self {
        Self {
            state,
            dispatched: false,
        }
    }

    /// Read-only view of the state, as seen by predicates and selectors.
    #[inline]
    pub fn state(&self) -> &S {
        self.state
    }

    /// Returns `true` once an action has attempted a dispatch in this evaluation.
    #[inline]
    pub fn has_dispatched(&self) -> bool {
        self.dispatched
    }

    /// Mutable access for the dispatch itself. Only the action leaf uses this.
    #[inline]
    pub(crate) fn state_mut(&mut self) -> &mut S {
        self.state
    }

    #[inline]
    pub(crate) fn mark_dispatched(&mut self) {
        self.dispatched = true;
    }

    /// Ticks `root` once and reports the outcome.
    ///
    /// This is the single entry point a tick driver needs.
    pub fn run<B>(root: &B, state: &'a mut S) -> Outcome
    where
        B: Behavior<S> + ?Sized,
    {
        let mut ctx = Evaluation::new(state);
        let status = root.tick(&mut ctx);
        Outcome {
            status,
            dispatched: ctx.dispatched,
        }
    }
}

/// Result of one evaluate call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Outcome {
    /// Status returned by the root node.
    pub status: Status,

    /// Whether an action attempted a dispatch into the host during this
    /// evaluation, accepted or not.
    pub dispatched: bool,
}

impl Outcome {
    /// A tick that neither acted nor committed to anything.
    pub fn is_idle(&self) -> bool {
        !self.dispatched && self.status.is_failure()
    }
}
