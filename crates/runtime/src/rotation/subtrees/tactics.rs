//! Mode-gated sub-rotations.

use behavior_tree::{Predicate, builder};
use rotation_core::StateQuery;

use crate::rotation::BehaviorTree;

/// A priority list that is only considered while `active` holds.
///
/// When the mode is inactive, or none of its entries can act, the gate
/// fails and the enclosing list falls through to its next entry.
///
/// # Panics
///
/// Panics if `children` is empty.
pub fn mode<S: StateQuery + 'static>(
    active: Predicate<S>,
    children: Vec<BehaviorTree<S>>,
) -> BehaviorTree<S> {
    builder::when(active, builder::selector(children))
}

/// Picks the AoE list at or above the enemy threshold, the single-target
/// list otherwise.
///
/// # Panics
///
/// Panics if either list is empty.
pub fn aoe_or_single_target<S: StateQuery + 'static>(
    aoe: Predicate<S>,
    aoe_list: Vec<BehaviorTree<S>>,
    single_target: Vec<BehaviorTree<S>>,
) -> BehaviorTree<S> {
    builder::when_else(
        aoe,
        builder::selector(aoe_list),
        builder::selector(single_target),
    )
}
