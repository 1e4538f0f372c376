//! Condition constructors for rotation guards.
//!
//! Every function here returns a named [`Predicate`] over a [`StateQuery`]
//! host. They only read the snapshot; combine them with `and`, `or` and `!`
//! to build an ability's guard.

use std::time::Duration;

use behavior_tree::Predicate;
use rotation_core::{AbilityId, AuraId, ResourceKind, StateQuery, TargetHandle};

// ============================================================================
// Enemies
// ============================================================================

/// At least `count` living enemies within `range` yards.
pub fn enemies_within<S: StateQuery + 'static>(range: f32, count: usize) -> Predicate<S> {
    Predicate::new(format!("enemies_within({range})>={count}"), move |s: &S| {
        s.enemies_within(range) >= count
    })
}

/// Enemy count within `range` reaches the numeric setting `name`, or
/// `default` when the setting is absent.
///
/// Used for AoE thresholds players tune per encounter.
pub fn enemies_reach_setting<S: StateQuery + 'static>(
    name: &'static str,
    range: f32,
    default: usize,
) -> Predicate<S> {
    Predicate::new(format!("enemies_within({range})>=${name}"), move |s: &S| {
        let threshold = s
            .settings()
            .number(name)
            .map_or(default, |value| value.max(0.0) as usize);
        s.enemies_within(range) >= threshold
    })
}

/// The player has a current target.
pub fn has_target<S: StateQuery + 'static>() -> Predicate<S> {
    Predicate::new("has_target", |s: &S| s.current_target().is_some())
}

/// The current target's health ratio is below `ratio`.
pub fn target_health_below<S: StateQuery + 'static>(ratio: f32) -> Predicate<S> {
    Predicate::new(format!("target_health<{ratio}"), move |s: &S| {
        s.current_target()
            .and_then(|target| s.unit(target))
            .is_some_and(|unit| unit.health < ratio)
    })
}

// ============================================================================
// Resources
// ============================================================================

pub fn resource_at_least<S: StateQuery + 'static>(kind: ResourceKind, amount: f32) -> Predicate<S> {
    Predicate::new(format!("{kind}>={amount}"), move |s: &S| {
        s.resource(kind).current >= amount
    })
}

pub fn resource_below<S: StateQuery + 'static>(kind: ResourceKind, amount: f32) -> Predicate<S> {
    Predicate::new(format!("{kind}<{amount}"), move |s: &S| {
        s.resource(kind).current < amount
    })
}

/// Missing at least `amount` of a pool; keeps generators from overcapping.
pub fn resource_deficit_at_least<S: StateQuery + 'static>(
    kind: ResourceKind,
    amount: f32,
) -> Predicate<S> {
    Predicate::new(format!("{kind}_deficit>={amount}"), move |s: &S| {
        s.resource(kind).deficit() >= amount
    })
}

// ============================================================================
// Auras
// ============================================================================

pub fn player_has_aura<S: StateQuery + 'static>(aura: AuraId) -> Predicate<S> {
    Predicate::new(format!("player_has({})", aura.0), move |s: &S| {
        s.aura(TargetHandle::PLAYER, aura).is_some()
    })
}

pub fn player_aura_stacks_at_least<S: StateQuery + 'static>(
    aura: AuraId,
    stacks: u8,
) -> Predicate<S> {
    Predicate::new(format!("player_stacks({})>={stacks}", aura.0), move |s: &S| {
        s.aura(TargetHandle::PLAYER, aura)
            .is_some_and(|state| state.stacks >= stacks)
    })
}

pub fn target_has_aura<S: StateQuery + 'static>(aura: AuraId) -> Predicate<S> {
    Predicate::new(format!("target_has({})", aura.0), move |s: &S| {
        s.current_target()
            .is_some_and(|target| s.aura(target, aura).is_some())
    })
}

// ============================================================================
// Cooldowns
// ============================================================================

/// At least one charge available.
pub fn cooldown_ready<S: StateQuery + 'static>(ability: AbilityId) -> Predicate<S> {
    Predicate::new(format!("ready({})", ability.0), move |s: &S| {
        s.cooldown(ability).is_ready()
    })
}

pub fn charges_at_least<S: StateQuery + 'static>(ability: AbilityId, charges: u8) -> Predicate<S> {
    Predicate::new(format!("charges({})>={charges}", ability.0), move |s: &S| {
        s.cooldown(ability).charges >= charges
    })
}

/// The next charge is ready within `within`, so spending it now loses nothing.
pub fn recharging_within<S: StateQuery + 'static>(
    ability: AbilityId,
    within: Duration,
) -> Predicate<S> {
    Predicate::new(
        format!("recharge({})<{}ms", ability.0, within.as_millis()),
        move |s: &S| s.cooldown(ability).time_until_ready() <= within,
    )
}

// ============================================================================
// History, settings and combat state
// ============================================================================

/// The most recently accepted action was `ability`.
pub fn last_action_was<S: StateQuery + 'static>(ability: AbilityId) -> Predicate<S> {
    Predicate::new(format!("last_action({})", ability.0), move |s: &S| {
        s.history().was_last_action(ability)
    })
}

/// `ability` is among the last `actions` accepted actions.
pub fn used_recently<S: StateQuery + 'static>(ability: AbilityId, actions: usize) -> Predicate<S> {
    Predicate::new(format!("recent({}, {actions})", ability.0), move |s: &S| {
        s.history().recent(actions).contains(&ability)
    })
}

/// The boolean setting `name` is on.
pub fn setting_enabled<S: StateQuery + 'static>(name: &'static str) -> Predicate<S> {
    Predicate::new(format!("${name}"), move |s: &S| s.settings().flag(name))
}

pub fn in_combat<S: StateQuery + 'static>() -> Predicate<S> {
    Predicate::new("in_combat", |s: &S| s.combat_time().is_some())
}

/// Out of combat, or in combat for less than `window`.
///
/// Gates opener sequences.
pub fn combat_time_below<S: StateQuery + 'static>(window: Duration) -> Predicate<S> {
    Predicate::new(
        format!("combat_time<{}ms", window.as_millis()),
        move |s: &S| s.combat_time().is_none_or(|elapsed| elapsed < window),
    )
}

pub fn is_casting<S: StateQuery + 'static>() -> Predicate<S> {
    Predicate::new("is_casting", |s: &S| s.is_casting())
}
