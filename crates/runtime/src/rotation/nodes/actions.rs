//! Guarded cast nodes.
//!
//! Thin constructors over [`behavior_tree::Cast`] that fill in the common
//! targets. [`CastBuilder`] covers the rest:
//!
//! ```rust,ignore
//! spell(RISING_SUN_KICK)
//!     .when(resource_at_least(ResourceKind::Chi, 2.0))
//!     .when(!last_action_was(RISING_SUN_KICK))
//!     .build()
//! ```

use behavior_tree::{Cast, Predicate};
use rotation_core::{AbilityId, StateQuery};

use super::targets::{self, Target};
use crate::rotation::BehaviorTree;

/// Casts `ability` on the current target.
pub fn cast<S: StateQuery + 'static>(ability: AbilityId) -> BehaviorTree<S> {
    spell(ability).build()
}

/// Casts `ability` on whatever `target` resolves to.
pub fn cast_on<S: StateQuery + 'static>(ability: AbilityId, target: Target<S>) -> BehaviorTree<S> {
    spell(ability).on(target).build()
}

/// Casts `ability` on the player.
pub fn cast_self<S: StateQuery + 'static>(ability: AbilityId) -> BehaviorTree<S> {
    spell(ability).on_self().build()
}

/// Starts a [`CastBuilder`] aimed at the current target.
pub fn spell<S: StateQuery + 'static>(ability: AbilityId) -> CastBuilder<S> {
    CastBuilder::new(ability)
}

/// Builder for a guarded cast.
pub struct CastBuilder<S> {
    ability: AbilityId,
    target: Target<S>,
    guard: Option<Predicate<S>>,
}

impl<S: StateQuery + 'static> CastBuilder<S> {
    pub fn new(ability: AbilityId) -> Self {
        Self {
            ability,
            target: targets::current_target(),
            guard: None,
        }
    }

    /// Aims the cast at `target` instead of the current target.
    pub fn on(mut self, target: Target<S>) -> Self {
        self.target = target;
        self
    }

    pub fn on_self(self) -> Self {
        self.on(targets::player())
    }

    /// Adds a guard; repeated calls must all hold.
    pub fn when(mut self, guard: Predicate<S>) -> Self {
        self.guard = Some(match self.guard.take() {
            Some(existing) => existing.and(guard),
            None => guard,
        });
        self
    }

    pub fn build(self) -> BehaviorTree<S> {
        let cast = Cast::new(self.ability, self.target);
        match self.guard {
            Some(guard) => Box::new(cast.with_guard(guard)),
            None => Box::new(cast),
        }
    }
}

impl<S: StateQuery + 'static> From<CastBuilder<S>> for BehaviorTree<S> {
    fn from(builder: CastBuilder<S>) -> Self {
        builder.build()
    }
}
