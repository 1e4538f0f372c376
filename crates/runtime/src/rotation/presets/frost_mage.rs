//! Frost mage.
//!
//! # Behavior
//!
//! 1. Hold while casting
//! 2. Counterspell interruptible casts within 40 yards
//! 3. Idle without a target
//! 4. Icy Veins when `use_cooldowns` is on
//! 5. AoE list at `aoe_threshold` enemies (default 3) within 40 yards,
//!    single-target list otherwise
//!
//! The single-target list pairs Flurry with the Frostbolt or Glacial Spike
//! before it and spends Winter's Chill with Ice Lance.

use rotation_core::{AbilityId, AuraId, StateQuery};

use crate::rotation::BehaviorTree;
use crate::rotation::nodes::{cast, conditions, spell};
use crate::rotation::subtrees::{patterns, tactics};

pub const FROSTBOLT: AbilityId = AbilityId(116);
pub const ICE_LANCE: AbilityId = AbilityId(30455);
pub const FLURRY: AbilityId = AbilityId(44614);
pub const FROZEN_ORB: AbilityId = AbilityId(84714);
pub const BLIZZARD: AbilityId = AbilityId(190356);
pub const CONE_OF_COLD: AbilityId = AbilityId(120);
pub const COMET_STORM: AbilityId = AbilityId(153595);
pub const GLACIAL_SPIKE: AbilityId = AbilityId(199786);
pub const ICY_VEINS: AbilityId = AbilityId(12472);
pub const COUNTERSPELL: AbilityId = AbilityId(2139);

pub const ICICLES: AuraId = AuraId(205473);
pub const FINGERS_OF_FROST: AuraId = AuraId(44544);
pub const WINTERS_CHILL: AuraId = AuraId(228358);
pub const ICY_VEINS_ACTIVE: AuraId = AuraId(12472);

const SPELL_RANGE: f32 = 40.0;
const CONE_RANGE: f32 = 12.0;
const MAX_ICICLES: u8 = 5;

pub fn frost_mage<S: StateQuery + 'static>() -> BehaviorTree<S> {
    use behavior_tree::builder::selector;

    selector(vec![
        patterns::busy_while_casting(),
        patterns::interrupt(COUNTERSPELL, SPELL_RANGE),
        patterns::idle_without_target(),
        tactics::mode(
            conditions::setting_enabled("use_cooldowns"),
            vec![
                spell(ICY_VEINS)
                    .on_self()
                    .when(!conditions::player_has_aura(ICY_VEINS_ACTIVE))
                    .build(),
            ],
        ),
        tactics::aoe_or_single_target(
            conditions::enemies_reach_setting("aoe_threshold", SPELL_RANGE, 3),
            aoe(),
            single_target(),
        ),
    ])
}

fn aoe<S: StateQuery + 'static>() -> Vec<BehaviorTree<S>> {
    vec![
        spell(FROZEN_ORB).on_self().build(),
        spell(BLIZZARD).on_self().build(),
        cast(COMET_STORM),
        spell(CONE_OF_COLD)
            .on_self()
            .when(conditions::enemies_within(CONE_RANGE, 3))
            .build(),
        spell(ICE_LANCE)
            .when(conditions::player_has_aura(FINGERS_OF_FROST))
            .build(),
        cast(FROSTBOLT),
    ]
}

fn single_target<S: StateQuery + 'static>() -> Vec<BehaviorTree<S>> {
    let after_hard_cast =
        conditions::last_action_was(FROSTBOLT).or(conditions::last_action_was(GLACIAL_SPIKE));

    vec![
        spell(FLURRY)
            .when(!conditions::target_has_aura(WINTERS_CHILL))
            .when(after_hard_cast)
            .build(),
        spell(GLACIAL_SPIKE)
            .when(conditions::player_aura_stacks_at_least(ICICLES, MAX_ICICLES))
            .build(),
        spell(FROZEN_ORB).on_self().build(),
        cast(COMET_STORM),
        spell(ICE_LANCE)
            .when(
                conditions::player_has_aura(FINGERS_OF_FROST)
                    .or(conditions::target_has_aura(WINTERS_CHILL)),
            )
            .build(),
        cast(FROSTBOLT),
    ]
}
