//! Windwalker monk.
//!
//! # Behavior
//!
//! 1. Hold while channeling (Fists of Fury, Spinning Crane Kick)
//! 2. Spear Hand Strike any interruptible cast in melee range
//! 3. Idle without a target
//! 4. Major cooldowns when `use_cooldowns` is on
//! 5. Touch of Death on low targets
//! 6. Opener for the first seconds of combat
//! 7. AoE list at `aoe_threshold` enemies (default 3) within 8 yards
//! 8. Single-target list
//!
//! Every damaging ability respects combo strikes: the same ability is never
//! used twice in a row.

use std::time::Duration;

use rotation_core::{AbilityId, AuraId, ResourceKind, StateQuery};

use crate::rotation::BehaviorTree;
use crate::rotation::nodes::{CastBuilder, conditions, spell};
use crate::rotation::subtrees::{patterns, tactics};

pub const TIGER_PALM: AbilityId = AbilityId(100780);
pub const BLACKOUT_KICK: AbilityId = AbilityId(100784);
pub const RISING_SUN_KICK: AbilityId = AbilityId(107428);
pub const FISTS_OF_FURY: AbilityId = AbilityId(113656);
pub const SPINNING_CRANE_KICK: AbilityId = AbilityId(101546);
pub const WHIRLING_DRAGON_PUNCH: AbilityId = AbilityId(152175);
pub const STRIKE_OF_THE_WINDLORD: AbilityId = AbilityId(392983);
pub const TOUCH_OF_DEATH: AbilityId = AbilityId(322109);
pub const SPEAR_HAND_STRIKE: AbilityId = AbilityId(116705);
pub const INVOKE_XUEN: AbilityId = AbilityId(123904);
pub const STORM_EARTH_AND_FIRE: AbilityId = AbilityId(137639);
pub const EXPEL_HARM: AbilityId = AbilityId(322101);
pub const CHI_BURST: AbilityId = AbilityId(123986);

pub const XUEN_ACTIVE: AuraId = AuraId(123904);
pub const SEF_ACTIVE: AuraId = AuraId(137639);

const MELEE_RANGE: f32 = 5.0;
const AOE_RADIUS: f32 = 8.0;
const OPENER_WINDOW: Duration = Duration::from_secs(4);
const EXECUTE_HEALTH: f32 = 0.15;

pub fn windwalker<S: StateQuery + 'static>() -> BehaviorTree<S> {
    use behavior_tree::builder::selector;

    let mut priorities = vec![
        patterns::busy_while_casting(),
        patterns::interrupt(SPEAR_HAND_STRIKE, MELEE_RANGE),
        patterns::idle_without_target(),
        tactics::mode(conditions::setting_enabled("use_cooldowns"), cooldowns()),
        combo(TOUCH_OF_DEATH)
            .when(conditions::target_health_below(EXECUTE_HEALTH))
            .build(),
        tactics::mode(conditions::combat_time_below(OPENER_WINDOW), opener()),
        tactics::mode(
            conditions::enemies_reach_setting("aoe_threshold", AOE_RADIUS, 3),
            aoe(),
        ),
    ];
    priorities.extend(single_target());
    selector(priorities)
}

/// Same-ability-twice guard.
fn combo<S: StateQuery + 'static>(ability: AbilityId) -> CastBuilder<S> {
    spell(ability).when(!conditions::last_action_was(ability))
}

fn cooldowns<S: StateQuery + 'static>() -> Vec<BehaviorTree<S>> {
    vec![
        spell(INVOKE_XUEN)
            .when(!conditions::player_has_aura(XUEN_ACTIVE))
            .build(),
        spell(STORM_EARTH_AND_FIRE)
            .on_self()
            .when(!conditions::player_has_aura(SEF_ACTIVE))
            .build(),
    ]
}

fn opener<S: StateQuery + 'static>() -> Vec<BehaviorTree<S>> {
    vec![
        combo(TIGER_PALM)
            .when(conditions::resource_below(ResourceKind::Chi, 2.0))
            .build(),
        combo(RISING_SUN_KICK).build(),
    ]
}

fn aoe<S: StateQuery + 'static>() -> Vec<BehaviorTree<S>> {
    vec![
        combo(WHIRLING_DRAGON_PUNCH)
            .on_self()
            .when(rising_and_fists_cooling())
            .build(),
        combo(STRIKE_OF_THE_WINDLORD).build(),
        combo(FISTS_OF_FURY).build(),
        combo(SPINNING_CRANE_KICK).on_self().build(),
        combo(TIGER_PALM)
            .when(conditions::resource_deficit_at_least(ResourceKind::Chi, 2.0))
            .build(),
    ]
}

fn single_target<S: StateQuery + 'static>() -> Vec<BehaviorTree<S>> {
    vec![
        combo(STRIKE_OF_THE_WINDLORD).build(),
        combo(RISING_SUN_KICK).build(),
        combo(FISTS_OF_FURY).build(),
        combo(WHIRLING_DRAGON_PUNCH)
            .on_self()
            .when(rising_and_fists_cooling())
            .build(),
        combo(EXPEL_HARM)
            .on_self()
            .when(conditions::resource_deficit_at_least(ResourceKind::Chi, 1.0))
            .build(),
        combo(TIGER_PALM)
            .when(conditions::resource_deficit_at_least(ResourceKind::Chi, 2.0))
            .build(),
        combo(BLACKOUT_KICK).build(),
        combo(CHI_BURST)
            .when(conditions::resource_deficit_at_least(ResourceKind::Chi, 1.0))
            .build(),
        combo(TIGER_PALM).build(),
    ]
}

/// Whirling Dragon Punch is only available while both are on cooldown.
fn rising_and_fists_cooling<S: StateQuery + 'static>() -> behavior_tree::Predicate<S> {
    (!conditions::cooldown_ready(RISING_SUN_KICK)).and(!conditions::cooldown_ready(FISTS_OF_FURY))
}
