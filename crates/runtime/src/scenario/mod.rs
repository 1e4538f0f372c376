//! Scenario system for simulated encounters.
//!
//! Scenarios describe the starting world (resources, enemies, auras,
//! settings) and a timeline of events that change it while a rotation runs.
//! They are written in RON:
//!
//! ```ron
//! (
//!     name: "pack pull",
//!     preset: Some("windwalker"),
//!     resources: [(kind: energy, current: 100.0, max: 100.0, regen: 10.0)],
//!     enemies: [(handle: 1, distance: 3.0)],
//!     target: Some(1),
//!     events: [(at_ms: 2000, event: start_cast(unit: 1, interruptible: true))],
//! )
//! ```

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use rotation_core::{
    AbilityCatalog, AuraId, ResourceKind, RotationConfig, SettingValue, SettingsMap, StateQuery,
    TargetHandle, Unit, UnitCast, WorldSnapshot,
};
use serde::{Deserialize, Serialize};

use crate::api::{Result, RuntimeError};

/// Starting level of one resource pool.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResourceSpec {
    pub kind: ResourceKind,
    pub current: f32,
    pub max: f32,
    /// Units per second.
    #[serde(default)]
    pub regen: f32,
}

/// An aura present when the scenario starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuraSpec {
    #[serde(default = "player")]
    pub unit: TargetHandle,
    pub aura: AuraId,
    #[serde(default = "one")]
    pub stacks: u8,
    pub duration_ms: u64,
}

fn player() -> TargetHandle {
    TargetHandle::PLAYER
}

fn one() -> u8 {
    1
}

/// Something that happens to the world at a fixed time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioEvent {
    /// A new unit joins the fight.
    AddEnemy(Unit),
    /// A unit leaves (dies, despawns). Clears the target if it was targeted.
    RemoveUnit(TargetHandle),
    SetTarget(Option<TargetHandle>),
    /// A unit starts casting.
    StartCast {
        unit: TargetHandle,
        interruptible: bool,
    },
    StopCast(TargetHandle),
    SetHealth {
        unit: TargetHandle,
        health: f32,
    },
    MoveUnit {
        unit: TargetHandle,
        distance: f32,
    },
    /// Flips a setting mid-fight, as a player toggling a hotkey would.
    Setting {
        name: String,
        value: SettingValue,
    },
}

impl ScenarioEvent {
    /// Applies the event to `world`. Events naming unknown units are ignored.
    pub fn apply(&self, world: &mut WorldSnapshot) {
        match self {
            ScenarioEvent::AddEnemy(unit) => {
                world.units_mut().retain(|u| u.handle != unit.handle);
                world.units_mut().push(unit.clone());
            }
            ScenarioEvent::RemoveUnit(handle) => {
                world.units_mut().retain(|u| u.handle != *handle);
                if world.current_target() == Some(*handle) {
                    world.set_target(None);
                }
            }
            ScenarioEvent::SetTarget(target) => world.set_target(*target),
            ScenarioEvent::StartCast {
                unit,
                interruptible,
            } => {
                if let Some(unit) = find(world, *unit) {
                    unit.casting = Some(UnitCast {
                        interruptible: *interruptible,
                    });
                }
            }
            ScenarioEvent::StopCast(unit) => {
                if let Some(unit) = find(world, *unit) {
                    unit.casting = None;
                }
            }
            ScenarioEvent::SetHealth { unit, health } => {
                if let Some(unit) = find(world, *unit) {
                    unit.health = health.clamp(0.0, 1.0);
                }
            }
            ScenarioEvent::MoveUnit { unit, distance } => {
                if let Some(unit) = find(world, *unit) {
                    unit.distance = distance.max(0.0);
                }
            }
            ScenarioEvent::Setting { name, value } => {
                world.settings_mut().set(name.clone(), *value);
            }
        }
    }
}

fn find(world: &mut WorldSnapshot, handle: TargetHandle) -> Option<&mut Unit> {
    let found = world.units_mut().iter_mut().find(|u| u.handle == handle);
    if found.is_none() {
        tracing::warn!(?handle, "scenario event names an unknown unit");
    }
    found
}

/// An event scheduled at `at_ms` of simulated time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimedEvent {
    pub at_ms: u64,
    pub event: ScenarioEvent,
}

impl TimedEvent {
    pub fn at(&self) -> Duration {
        Duration::from_millis(self.at_ms)
    }
}

/// A simulated encounter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,

    /// Rotation preset the scenario was written for.
    #[serde(default)]
    pub preset: Option<String>,

    /// Overrides the configured tick limit.
    #[serde(default)]
    pub max_ticks: Option<u64>,

    #[serde(default)]
    pub resources: Vec<ResourceSpec>,

    #[serde(default)]
    pub enemies: Vec<Unit>,

    #[serde(default)]
    pub target: Option<TargetHandle>,

    #[serde(default)]
    pub auras: Vec<AuraSpec>,

    /// Merged over the configured settings.
    #[serde(default)]
    pub settings: SettingsMap,

    /// Start with the combat clock already running.
    #[serde(default)]
    pub in_combat: bool,

    #[serde(default)]
    pub events: Vec<TimedEvent>,
}

impl Scenario {
    /// Load a scenario from a RON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|source| RuntimeError::ScenarioIo {
                path: path.to_path_buf(),
                source,
            })?;
        Self::parse(&content)
    }

    /// Parse scenario RON text.
    pub fn parse(source: &str) -> Result<Self> {
        ron::from_str(source).map_err(RuntimeError::ScenarioParse)
    }

    /// Initialize a world from this scenario.
    ///
    /// Settings from `config` are applied first, then the scenario's own.
    pub fn build_world(
        &self,
        catalog: Arc<AbilityCatalog>,
        config: &RotationConfig,
    ) -> Result<WorldSnapshot> {
        self.validate()?;

        tracing::info!(
            scenario = self.name.as_str(),
            enemies = self.enemies.len(),
            events = self.events.len(),
            "building world from scenario"
        );

        let mut settings = config.settings.clone();
        settings.merge(&self.settings);

        let mut world = WorldSnapshot::new(catalog)
            .with_history_capacity(config.history_capacity)
            .with_settings(settings);

        for resource in &self.resources {
            world = world.with_resource(resource.kind, resource.current, resource.max);
            if resource.regen != 0.0 {
                world = world.with_regen(resource.kind, resource.regen);
            }
        }
        for unit in &self.enemies {
            world = world.with_unit(unit.clone());
        }
        for aura in &self.auras {
            world = world.with_aura(
                aura.unit,
                aura.aura,
                aura.stacks,
                Duration::from_millis(aura.duration_ms),
            );
        }
        if let Some(target) = self.target {
            world = world.with_target(target);
        }
        if self.in_combat {
            world = world.in_combat();
        }

        Ok(world)
    }

    /// Events ordered by time; events sharing a time keep file order.
    pub fn timeline(&self) -> Vec<TimedEvent> {
        let mut events = self.events.clone();
        events.sort_by_key(|event| event.at_ms);
        events
    }

    fn validate(&self) -> Result<()> {
        let mut seen = Vec::with_capacity(self.enemies.len());
        for unit in &self.enemies {
            if unit.handle.is_player() {
                return Err(RuntimeError::ReservedHandle(unit.handle));
            }
            if seen.contains(&unit.handle) {
                return Err(RuntimeError::DuplicateUnit(unit.handle));
            }
            seen.push(unit.handle);
        }

        if let Some(target) = self.target
            && !seen.contains(&target)
        {
            return Err(RuntimeError::UnknownTarget(target));
        }

        for aura in &self.auras {
            if !aura.unit.is_player() && !seen.contains(&aura.unit) {
                return Err(RuntimeError::UnknownAuraHolder {
                    unit: aura.unit,
                    aura: aura.aura,
                });
            }
        }

        // Replay the timeline so a target is only valid while its unit is placed.
        for timed in self.timeline() {
            match timed.event {
                ScenarioEvent::AddEnemy(unit) => {
                    if unit.handle.is_player() {
                        return Err(RuntimeError::ReservedHandle(unit.handle));
                    }
                    if !seen.contains(&unit.handle) {
                        seen.push(unit.handle);
                    }
                }
                ScenarioEvent::RemoveUnit(handle) => seen.retain(|h| *h != handle),
                ScenarioEvent::SetTarget(Some(target)) if !seen.contains(&target) => {
                    return Err(RuntimeError::UnknownTarget(target));
                }
                _ => {}
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rotation_core::Settings;

    use super::*;

    const PULL: &str = r#"(
        name: "pull",
        resources: [(kind: energy, current: 80.0, max: 100.0, regen: 10.0)],
        enemies: [
            (handle: 1, distance: 3.0),
            (handle: 2, distance: 7.5, casting: Some((interruptible: true))),
        ],
        target: Some(1),
        auras: [(aura: 137639, duration_ms: 5000)],
        settings: {"aoe_threshold": 2, "use_cooldowns": true},
        events: [
            (at_ms: 3000, event: remove_unit(1)),
            (at_ms: 1000, event: start_cast(unit: 1, interruptible: false)),
        ],
    )"#;

    fn world(scenario: &Scenario) -> Result<WorldSnapshot> {
        scenario.build_world(Arc::new(AbilityCatalog::default()), &RotationConfig::default())
    }

    #[test]
    fn builds_world_from_ron() {
        let scenario = Scenario::parse(PULL).expect("scenario should parse");
        let world = world(&scenario).expect("world should build");

        assert_eq!(world.resource(ResourceKind::Energy).current, 80.0);
        assert_eq!(world.current_target(), Some(TargetHandle(1)));
        assert!(world.is_interruptible(TargetHandle(2)));
        assert_eq!(world.settings().number("aoe_threshold"), Some(2.0));
        assert!(world.settings().flag("use_cooldowns"));
        assert!(
            world
                .aura(TargetHandle::PLAYER, AuraId(137639))
                .is_some_and(|aura| aura.stacks == 1)
        );
    }

    #[test]
    fn timeline_is_sorted_by_time() {
        let scenario = Scenario::parse(PULL).expect("scenario should parse");
        let times: Vec<u64> = scenario.timeline().iter().map(|e| e.at_ms).collect();
        assert_eq!(times, vec![1000, 3000]);
    }

    #[test]
    fn removing_the_target_clears_it() {
        let scenario = Scenario::parse(PULL).expect("scenario should parse");
        let mut world = world(&scenario).expect("world should build");

        ScenarioEvent::RemoveUnit(TargetHandle(1)).apply(&mut world);

        assert_eq!(world.current_target(), None);
        assert!(world.unit(TargetHandle(1)).is_none());
    }

    #[test]
    fn rejects_inconsistent_scenarios() {
        let mut scenario = Scenario::parse(PULL).expect("scenario should parse");
        scenario.target = Some(TargetHandle(9));
        assert!(matches!(
            world(&scenario),
            Err(RuntimeError::UnknownTarget(TargetHandle(9)))
        ));

        scenario.target = None;
        scenario.enemies.push(Unit::enemy(TargetHandle(2), 1.0));
        assert!(matches!(
            world(&scenario),
            Err(RuntimeError::DuplicateUnit(TargetHandle(2)))
        ));

        scenario.enemies = vec![Unit::enemy(TargetHandle::PLAYER, 1.0)];
        assert!(matches!(
            world(&scenario),
            Err(RuntimeError::ReservedHandle(_))
        ));
    }

    #[test]
    fn timeline_events_cannot_use_the_player_handle() {
        let mut scenario = Scenario::parse(PULL).expect("scenario should parse");
        scenario.events.push(TimedEvent {
            at_ms: 2000,
            event: ScenarioEvent::AddEnemy(Unit::enemy(TargetHandle::PLAYER, 3.0)),
        });

        assert!(matches!(
            world(&scenario),
            Err(RuntimeError::ReservedHandle(TargetHandle::PLAYER))
        ));
    }

    #[test]
    fn timeline_targets_must_be_placed_at_that_time() {
        let mut scenario = Scenario::parse(PULL).expect("scenario should parse");
        scenario.events.push(TimedEvent {
            at_ms: 500,
            event: ScenarioEvent::SetTarget(Some(TargetHandle::PLAYER)),
        });
        assert!(matches!(
            world(&scenario),
            Err(RuntimeError::UnknownTarget(TargetHandle::PLAYER))
        ));

        // Unit 1 leaves at 3000.
        scenario.events.pop();
        scenario.events.push(TimedEvent {
            at_ms: 4000,
            event: ScenarioEvent::SetTarget(Some(TargetHandle(1))),
        });
        assert!(matches!(
            world(&scenario),
            Err(RuntimeError::UnknownTarget(TargetHandle(1)))
        ));

        scenario.events.pop();
        scenario.events.push(TimedEvent {
            at_ms: 5000,
            event: ScenarioEvent::AddEnemy(Unit::enemy(TargetHandle(4), 6.0)),
        });
        scenario.events.push(TimedEvent {
            at_ms: 5000,
            event: ScenarioEvent::SetTarget(Some(TargetHandle(4))),
        });
        assert!(world(&scenario).is_ok());
    }

    #[test]
    fn malformed_ron_is_reported() {
        assert!(matches!(
            Scenario::parse("(name: 3)"),
            Err(RuntimeError::ScenarioParse(_))
        ));
    }

    #[test]
    fn missing_file_is_reported() {
        let err = Scenario::load(Path::new("/nonexistent/pull.ron"))
            .expect_err("missing file should fail");
        assert!(matches!(err, RuntimeError::ScenarioIo { .. }));
    }
}
