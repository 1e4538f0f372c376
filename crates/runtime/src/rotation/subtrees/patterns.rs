//! Root guards and single-purpose patterns.
//!
//! Root guards sit at the top of a priority list. When they match, nothing
//! below them is considered this tick.

use behavior_tree::builder;
use rotation_core::{AbilityId, StateQuery};

use crate::rotation::BehaviorTree;
use crate::rotation::nodes::{conditions, targets};

/// Reports `Running` while the player is casting or channeling.
///
/// Keeps the rest of the tree from looking for work mid-cast.
pub fn busy_while_casting<S: StateQuery + 'static>() -> BehaviorTree<S> {
    builder::busy(conditions::is_casting())
}

/// Ends the tick with `Success` and no dispatch when there is no target.
pub fn idle_without_target<S: StateQuery + 'static>() -> BehaviorTree<S> {
    builder::skip_tick_if(!conditions::has_target())
}

/// Interrupts the best interruptible enemy within `range`.
///
/// Fails (and the list moves on) when nobody is casting anything
/// interruptible or `ability` is unavailable.
pub fn interrupt<S: StateQuery + 'static>(ability: AbilityId, range: f32) -> BehaviorTree<S> {
    builder::cast(ability, targets::interruptible_enemy(ability, range))
}
