//! Target selectors.
//!
//! A selector answers "who would this cast hit right now". Returning `None`
//! fails the cast without touching the host; range, line of sight and
//! facing are left to the host's reachability check.

use behavior_tree::TargetSelector;
use rotation_core::{AbilityId, AuraId, StateQuery, TargetHandle, Unit};

/// Type alias for selectors over the rotation handle type.
pub type Target<S> = TargetSelector<S, TargetHandle>;

/// The player's current target.
pub fn current_target<S: StateQuery + 'static>() -> Target<S> {
    TargetSelector::new("current_target", |s: &S| s.current_target())
}

/// The player, for self-cast abilities.
pub fn player<S: StateQuery + 'static>() -> Target<S> {
    TargetSelector::new("player", |_: &S| Some(TargetHandle::PLAYER))
}

/// An enemy within `range` casting something interruptible that `ability`
/// can reach.
///
/// The current target wins when it qualifies; otherwise the closest
/// qualifying enemy is picked. Casters behind walls or out of facing are
/// skipped so a reachable one further away still gets interrupted.
pub fn interruptible_enemy<S: StateQuery + 'static>(ability: AbilityId, range: f32) -> Target<S> {
    TargetSelector::new(
        format!("interruptible_enemy({}, {range})", ability.0),
        move |s: &S| {
            let qualifies = |unit: &Unit| {
                unit.is_interruptible()
                    && unit.distance <= range
                    && s.is_reachable(ability, unit.handle)
            };

            if let Some(target) = s.current_target()
                && s.enemies().any(|unit| unit.handle == target && qualifies(unit))
            {
                return Some(target);
            }

            s.enemies()
                .filter(|unit| qualifies(*unit))
                .min_by(|a, b| a.distance.total_cmp(&b.distance))
                .map(|unit| unit.handle)
        },
    )
}

/// The closest enemy within `range` that `ability` can reach and that does
/// not carry `aura`.
///
/// Spreads damage-over-time effects across a pack.
pub fn nearest_enemy_without_aura<S: StateQuery + 'static>(
    ability: AbilityId,
    aura: AuraId,
    range: f32,
) -> Target<S> {
    TargetSelector::new(
        format!("nearest_enemy_without({}, {range})", aura.0),
        move |s: &S| {
            s.enemies()
                .filter(|unit| {
                    unit.distance <= range
                        && s.aura(unit.handle, aura).is_none()
                        && s.is_reachable(ability, unit.handle)
                })
                .min_by(|a, b| a.distance.total_cmp(&b.distance))
                .map(|unit| unit.handle)
        },
    )
}
