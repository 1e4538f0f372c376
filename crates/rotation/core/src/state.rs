//! The read side of the host contract.
//!
//! [`StateQuery`] is everything rotation guards may ask about the world during
//! a tick. It extends [`ActionHost`], so the same snapshot that answers the
//! guards also answers the legality check and receives the dispatch.
//!
//! All reads take `&self`. A snapshot must answer the same question the same
//! way for the whole of one evaluate call.

use std::time::Duration;

use behavior_tree::ActionHost;
use serde::{Deserialize, Serialize};

use crate::history::ActionHistory;
use crate::ids::{AbilityId, AuraId, ResourceKind, TargetHandle};
use crate::settings::Settings;

/// Current and maximum amount of a resource pool.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceLevel {
    pub current: f32,
    pub max: f32,
}

impl ResourceLevel {
    pub const fn new(current: f32, max: f32) -> Self {
        Self { current, max }
    }

    /// Missing amount up to the cap.
    pub fn deficit(&self) -> f32 {
        (self.max - self.current).max(0.0)
    }

    /// Fill ratio in `0.0..=1.0`. An empty pool (max 0) reads as 0.
    pub fn ratio(&self) -> f32 {
        if self.max <= 0.0 {
            0.0
        } else {
            (self.current / self.max).clamp(0.0, 1.0)
        }
    }
}

/// Cooldown and charge state of one ability.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CooldownState {
    /// Charges available right now.
    pub charges: u8,
    /// Maximum charges the ability can hold.
    pub max_charges: u8,
    /// Time until the next charge comes back (zero when full).
    pub remaining: Duration,
}

impl CooldownState {
    /// Fully recharged state for an ability with `max_charges` charges.
    pub const fn ready(max_charges: u8) -> Self {
        Self {
            charges: max_charges,
            max_charges,
            remaining: Duration::ZERO,
        }
    }

    /// At least one charge is available.
    #[inline]
    pub fn is_ready(&self) -> bool {
        self.charges > 0
    }

    /// Time until at least one charge is available.
    pub fn time_until_ready(&self) -> Duration {
        if self.is_ready() {
            Duration::ZERO
        } else {
            self.remaining
        }
    }
}

/// An aura present on a unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuraState {
    pub stacks: u8,
    pub remaining: Duration,
}

/// A unit the host knows about (enemy or otherwise).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub handle: TargetHandle,
    /// Distance from the player in yards.
    pub distance: f32,
    /// Health ratio in `0.0..=1.0`.
    #[serde(default = "full_health")]
    pub health: f32,
    #[serde(default = "yes")]
    pub hostile: bool,
    #[serde(default = "yes")]
    pub in_line_of_sight: bool,
    /// The player is facing this unit.
    #[serde(default = "yes")]
    pub in_front: bool,
    /// Spell this unit is casting, if any.
    #[serde(default)]
    pub casting: Option<UnitCast>,
}

/// A cast in progress on a unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitCast {
    pub interruptible: bool,
}

fn full_health() -> f32 {
    1.0
}

fn yes() -> bool {
    true
}

impl Unit {
    /// Hostile unit at `distance` with default flags.
    pub fn enemy(handle: TargetHandle, distance: f32) -> Self {
        Self {
            handle,
            distance,
            health: 1.0,
            hostile: true,
            in_line_of_sight: true,
            in_front: true,
            casting: None,
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }

    /// Casting something that can be interrupted right now.
    pub fn is_interruptible(&self) -> bool {
        self.casting.is_some_and(|cast| cast.interruptible)
    }
}

/// Read-only per-tick view of character and world state.
///
/// Every method is a pure in-memory lookup. Rotation predicates are built on
/// top of these reads and must never mutate through them.
pub trait StateQuery: ActionHost<Ability = AbilityId, Target = TargetHandle> {
    /// Amount of a resource pool. Pools the character lacks read as empty.
    fn resource(&self, kind: ResourceKind) -> ResourceLevel;

    /// Cooldown and charge state of an ability.
    fn cooldown(&self, ability: AbilityId) -> CooldownState;

    /// Aura on a unit, if present.
    fn aura(&self, unit: TargetHandle, aura: AuraId) -> Option<AuraState>;

    /// The player's current target.
    fn current_target(&self) -> Option<TargetHandle>;

    /// Every unit the host tracks, excluding the player.
    fn units(&self) -> &[Unit];

    /// Time since combat started, `None` out of combat.
    fn combat_time(&self) -> Option<Duration>;

    /// The player is casting or channeling.
    fn is_casting(&self) -> bool;

    /// Time left on the global cooldown.
    fn gcd_remaining(&self) -> Duration;

    /// Record of previously accepted actions.
    fn history(&self) -> &dyn ActionHistory;

    /// Named configuration toggles.
    fn settings(&self) -> &dyn Settings;

    /// Looks up a unit by handle.
    fn unit(&self, handle: TargetHandle) -> Option<&Unit> {
        self.units().iter().find(|unit| unit.handle == handle)
    }

    /// Living hostile units.
    fn enemies(&self) -> impl Iterator<Item = &Unit> {
        self.units()
            .iter()
            .filter(|unit| unit.hostile && unit.is_alive())
    }

    /// Number of living hostile units within `range` yards.
    fn enemies_within(&self, range: f32) -> usize {
        self.enemies().filter(|unit| unit.distance <= range).count()
    }

    /// Distance to a unit; the player is at distance zero.
    fn distance_to(&self, target: TargetHandle) -> Option<f32> {
        if target.is_player() {
            return Some(0.0);
        }
        self.unit(target).map(|unit| unit.distance)
    }

    fn in_line_of_sight(&self, target: TargetHandle) -> bool {
        target.is_player() || self.unit(target).is_some_and(|unit| unit.in_line_of_sight)
    }

    fn is_facing(&self, target: TargetHandle) -> bool {
        target.is_player() || self.unit(target).is_some_and(|unit| unit.in_front)
    }

    fn is_interruptible(&self, target: TargetHandle) -> bool {
        self.unit(target).is_some_and(Unit::is_interruptible)
    }
}
