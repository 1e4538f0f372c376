//! Identifiers shared by the catalog, the host and rotation scripts.

use serde::{Deserialize, Serialize};

/// Opaque ability key (spell id in the host's catalog).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AbilityId(pub u32);

/// Opaque aura key (buff or debuff id).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuraId(pub u32);

/// Handle to a unit an ability can affect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TargetHandle(pub u64);

impl TargetHandle {
    /// The controlled character itself.
    pub const PLAYER: TargetHandle = TargetHandle(0);

    #[inline]
    pub fn is_player(self) -> bool {
        self == Self::PLAYER
    }
}

/// Resource pools an ability can cost or generate.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ResourceKind {
    Health,
    Mana,
    Energy,
    Rage,
    Focus,
    RunicPower,
    Chi,
    ComboPoints,
    HolyPower,
    SoulShards,
    ArcaneCharges,
    Insanity,
    Fury,
    Maelstrom,
    AstralPower,
}
