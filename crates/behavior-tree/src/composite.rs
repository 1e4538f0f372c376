//! Composite behavior nodes.
//!
//! Composite nodes control the execution flow of multiple child behaviors.
//! This module provides the two building blocks of a priority rotation:
//! [`Selector`] (first acceptable option wins) and [`Sequence`] (strict
//! ordered preconditions).

use crate::{Behavior, BuildError, Evaluation, Status};

/// Executes child behaviors in order until one fails.
///
/// # Semantics
///
/// A `Sequence` node evaluates its children from left to right:
/// - If a child returns `Failure`, the sequence **stops immediately** and returns `Failure`
/// - If a child returns `Running`, the sequence **stops immediately** and returns `Running`
/// - If a child returns `Success`, the sequence **continues** to the next child
/// - If all children return `Success`, the sequence returns `Success`
///
/// This is analogous to a short-circuited logical AND (&&) operation.
pub struct Sequence<S> {
    children: Vec<Box<dyn Behavior<S>>>,
}

impl<S> Sequence<S> {
    /// Creates a new sequence with the given child behaviors.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty. A sequence with no children is
    /// meaningless and likely indicates a programming error.
    pub fn new(children: Vec<Box<dyn Behavior<S>>>) -> Self {
        assert!(
            !children.is_empty(),
            "Sequence must have at least one child"
        );
        Self { children }
    }

    /// Fallible counterpart of [`Sequence::new`].
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::EmptyComposite`] if `children` is empty.
    pub fn try_new(children: Vec<Box<dyn Behavior<S>>>) -> Result<Self, BuildError> {
        if children.is_empty() {
            return Err(BuildError::EmptyComposite { kind: "Sequence" });
        }
        Ok(Self { children })
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<S> Behavior<S> for Sequence<S> {
    fn tick(&self, ctx: &mut Evaluation<'_, S>) -> Status {
        for child in &self.children {
            match child.tick(ctx) {
                Status::Success => continue,
                other => return other, // Failure or Running short-circuits
            }
        }
        Status::Success
    }
}

/// Evaluates child behaviors in priority order until one does not fail.
///
/// # Semantics
///
/// A `Selector` node evaluates its children from left to right:
/// - If a child returns `Success` or `Running`, the selector **stops immediately**
///   and returns that status; later children are never evaluated
/// - If a child returns `Failure`, the selector **continues** to the next child
/// - If all children return `Failure`, the selector returns `Failure`
///
/// Declaration order is priority order. This is analogous to a
/// short-circuited logical OR (||) operation.
pub struct Selector<S> {
    children: Vec<Box<dyn Behavior<S>>>,
}

impl<S> Selector<S> {
    /// Creates a new selector with the given child behaviors.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty. A selector with no children is
    /// meaningless and likely indicates a programming error.
    pub fn new(children: Vec<Box<dyn Behavior<S>>>) -> Self {
        assert!(
            !children.is_empty(),
            "Selector must have at least one child"
        );
        Self { children }
    }

    /// Fallible counterpart of [`Selector::new`].
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::EmptyComposite`] if `children` is empty.
    pub fn try_new(children: Vec<Box<dyn Behavior<S>>>) -> Result<Self, BuildError> {
        if children.is_empty() {
            return Err(BuildError::EmptyComposite { kind: "Selector" });
        }
        Ok(Self { children })
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<S> Behavior<S> for Selector<S> {
    fn tick(&self, ctx: &mut Evaluation<'_, S>) -> Status {
        for child in &self.children {
            match child.tick(ctx) {
                Status::Failure => continue, // Try next child
                other => return other,       // Short-circuit
            }
        }
        Status::Failure
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestState {
        value: i32,
    }

    struct Increment;
    impl Behavior<TestState> for Increment {
        fn tick(&self, ctx: &mut Evaluation<'_, TestState>) -> Status {
            ctx.state_mut().value += 1;
            Status::Success
        }
    }

    struct Decrement;
    impl Behavior<TestState> for Decrement {
        fn tick(&self, ctx: &mut Evaluation<'_, TestState>) -> Status {
            ctx.state_mut().value -= 1;
            Status::Success
        }
    }

    struct FailAlways;
    impl Behavior<TestState> for FailAlways {
        fn tick(&self, _ctx: &mut Evaluation<'_, TestState>) -> Status {
            Status::Failure
        }
    }

    struct Channeling;
    impl Behavior<TestState> for Channeling {
        fn tick(&self, _ctx: &mut Evaluation<'_, TestState>) -> Status {
            Status::Running
        }
    }

    fn run(node: &dyn Behavior<TestState>, state: &mut TestState) -> Status {
        Evaluation::run(node, state).status
    }

    #[test]
    fn sequence_all_success() {
        let seq = Sequence::new(vec![Box::new(Increment), Box::new(Increment)]);

        let mut state = TestState { value: 0 };
        assert_eq!(run(&seq, &mut state), Status::Success);
        assert_eq!(state.value, 2);
    }

    #[test]
    fn sequence_fails_on_first_failure() {
        let seq = Sequence::new(vec![
            Box::new(Increment),
            Box::new(FailAlways),
            Box::new(Increment), // Should not execute
        ]);

        let mut state = TestState { value: 0 };
        assert_eq!(run(&seq, &mut state), Status::Failure);
        assert_eq!(state.value, 1);
    }

    #[test]
    fn sequence_stops_on_running() {
        let seq = Sequence::new(vec![
            Box::new(Increment),
            Box::new(Channeling),
            Box::new(Increment),
        ]);

        let mut state = TestState { value: 0 };
        assert_eq!(run(&seq, &mut state), Status::Running);
        assert_eq!(state.value, 1);
    }

    #[test]
    fn selector_succeeds_on_first_success() {
        let sel = Selector::new(vec![
            Box::new(FailAlways),
            Box::new(Increment),
            Box::new(Decrement), // Should not execute
        ]);

        let mut state = TestState { value: 0 };
        assert_eq!(run(&sel, &mut state), Status::Success);
        assert_eq!(state.value, 1);
    }

    #[test]
    fn selector_returns_running_child() {
        let sel = Selector::new(vec![
            Box::new(FailAlways),
            Box::new(Channeling),
            Box::new(Increment),
        ]);

        let mut state = TestState { value: 0 };
        assert_eq!(run(&sel, &mut state), Status::Running);
        assert_eq!(state.value, 0);
    }

    #[test]
    fn selector_fails_when_all_fail() {
        let sel = Selector::new(vec![Box::new(FailAlways), Box::new(FailAlways)]);

        let mut state = TestState { value: 0 };
        assert_eq!(run(&sel, &mut state), Status::Failure);
    }

    #[test]
    fn empty_composites_are_rejected_at_build_time() {
        assert_eq!(
            Selector::<TestState>::try_new(Vec::new()).err(),
            Some(BuildError::EmptyComposite { kind: "Selector" })
        );
        assert_eq!(
            Sequence::<TestState>::try_new(Vec::new()).err(),
            Some(BuildError::EmptyComposite { kind: "Sequence" })
        );
    }

    #[test]
    #[should_panic(expected = "Selector must have at least one child")]
    fn empty_selector_panics() {
        let _ = Selector::<TestState>::new(Vec::new());
    }
}
