//! Priority rotations for the rotation engine.
//!
//! A rotation is one behavior tree evaluated once per tick against a
//! [`rotation_core::StateQuery`] host. Trees are assembled from three layers:
//!
//! ```text
//! presets::windwalker()
//!   └─ Selector
//!       ├─ patterns::busy_while_casting()       ← Layer 2 (root guards)
//!       ├─ patterns::interrupt(..)              ← Layer 2
//!       ├─ patterns::idle_without_target()      ← Layer 2
//!       ├─ tactics::mode(use_cooldowns, ..)     ← Layer 2 (mode gates)
//!       │   └─ actions::spell(..).when(..)      ← Layer 1 (nodes)
//!       └─ ...single-target priority list
//! ```
//!
//! - [`nodes`]: predicate constructors, target selectors and guarded casts
//! - [`subtrees`]: reusable root guards and mode-gated sub-rotations
//! - [`presets`]: complete rotations, selectable by name

pub mod nodes;
pub mod presets;
pub mod subtrees;

use std::borrow::Cow;
use std::fmt;

use behavior_tree::{Behavior, Evaluation, Outcome};

/// Type alias for behavior trees to reduce verbosity.
pub type BehaviorTree<S> = Box<dyn Behavior<S>>;

/// A named root behavior, built once and evaluated every tick.
pub struct Rotation<S> {
    name: Cow<'static, str>,
    root: BehaviorTree<S>,
}

impl<S> Rotation<S> {
    pub fn new(name: impl Into<Cow<'static, str>>, root: BehaviorTree<S>) -> Self {
        Self {
            name: name.into(),
            root,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Evaluates the root once against `state`.
    ///
    /// At most one action is dispatched into `state`; a tick that finds
    /// nothing to do leaves it untouched.
    pub fn evaluate(&self, state: &mut S) -> Outcome {
        Evaluation::run(self.root.as_ref(), state)
    }
}

impl<S> fmt::Debug for Rotation<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rotation").field("name", &self.name).finish()
    }
}

impl<S: 'static> Rotation<S> {
    /// Builds a top-level priority list: the first child that does not fail
    /// decides the tick.
    ///
    /// # Errors
    ///
    /// Returns [`crate::RuntimeError::Build`] if `children` is empty.
    pub fn priority(
        name: impl Into<Cow<'static, str>>,
        children: Vec<BehaviorTree<S>>,
    ) -> crate::Result<Self> {
        let root = behavior_tree::Selector::try_new(children)?;
        Ok(Self::new(name, Box::new(root)))
    }
}
