//! Full simulations over the shipped scenarios.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use rotation_content::CatalogLoader;
use rotation_core::{ResourceKind, RotationConfig, StateQuery, TargetHandle, Unit, WorldSnapshot};
use runtime::presets::{frost_mage, windwalker};
use runtime::{CastRecord, Preset, Rotation, Scenario, Simulation};

fn scenario_path(file: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../rotation/content/data/scenarios")
        .join(file)
}

fn simulate(file: &str) -> Simulation {
    let scenario = Scenario::load(&scenario_path(file)).expect("scenario should load");
    let preset: Preset = scenario
        .preset
        .as_deref()
        .expect("shipped scenarios name a preset")
        .parse()
        .expect("preset should exist");
    let catalog = CatalogLoader::embedded(preset.catalog()).expect("embedded catalog");

    Simulation::from_scenario(
        &scenario,
        Arc::new(catalog),
        Rotation::new(preset.to_string(), preset.build()),
        &RotationConfig::default(),
    )
    .expect("simulation should build")
}

fn casts_of(casts: &[CastRecord], ability: rotation_core::AbilityId) -> Vec<&CastRecord> {
    casts.iter().filter(|cast| cast.ability == ability).collect()
}

#[test]
fn same_scenario_same_cast_log() {
    let mut first = simulate("windwalker_pack.ron");
    let mut second = simulate("windwalker_pack.ron");

    let first = first.run().to_vec();
    let second = second.run().to_vec();

    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn scenario_limits_tick_count() {
    let mut simulation = simulate("windwalker_pack.ron");
    assert_eq!(simulation.max_ticks(), 350);

    simulation.run();

    assert_eq!(simulation.stats().ticks, 350);
}

#[test]
fn one_cast_per_tick_at_most() {
    let mut simulation = simulate("windwalker_pack.ron");
    let tick = simulation.tick_interval();

    simulation.run();
    let casts = simulation.casts();

    for pair in casts.windows(2) {
        assert!(pair[1].at >= pair[0].at + tick, "{pair:?}");
    }
}

#[test]
fn pack_pull_switches_modes_and_kicks_the_caster() {
    let mut simulation = simulate("windwalker_pack.ron");
    simulation.run();
    let casts = simulation.casts();

    let crane_kicks = casts_of(casts, windwalker::SPINNING_CRANE_KICK);
    assert!(!crane_kicks.is_empty());
    for cast in crane_kicks {
        assert!(cast.at.as_millis() >= 8000 && cast.at.as_millis() < 20000, "{cast:?}");
    }

    let kicks = casts_of(casts, windwalker::SPEAR_HAND_STRIKE);
    assert_eq!(kicks.len(), 1);
    assert_eq!(kicks[0].target, TargetHandle(2));
    assert!(kicks[0].at.as_millis() >= 12000);
    assert!(!simulation.world().unit(TargetHandle(2)).is_some_and(Unit::is_interruptible));

    let executes = casts_of(casts, windwalker::TOUCH_OF_DEATH);
    assert_eq!(executes.len(), 1);
    assert!(executes[0].at.as_millis() >= 24000);
}

#[test]
fn frost_dummy_builds_icicles_into_glacial_spike() {
    let mut simulation = simulate("frost_mage_dummy.ron");
    simulation.run();
    let casts = simulation.casts();

    assert_eq!(casts.first().map(|c| c.ability), Some(frost_mage::FROZEN_ORB));
    assert!(!casts_of(casts, frost_mage::GLACIAL_SPIKE).is_empty());
    assert!(
        casts
            .iter()
            .all(|cast| cast.ability != frost_mage::BLIZZARD),
        "single target never uses Blizzard"
    );
}

#[test]
fn starved_rotation_reports_idle_streak() {
    let config = RotationConfig {
        max_ticks: 30,
        idle_warn_after: 10,
        ..RotationConfig::default()
    };
    let catalog = CatalogLoader::embedded("frost_mage").expect("embedded catalog");
    let world = WorldSnapshot::new(Arc::new(catalog))
        .with_resource(ResourceKind::Mana, 0.0, 50_000.0)
        .with_unit(Unit::enemy(TargetHandle(1), 30.0))
        .with_target(TargetHandle(1));

    let mut simulation = Simulation::new(
        Rotation::new("frost_mage", frost_mage::frost_mage()),
        world,
        &config,
    );

    assert!(simulation.run().is_empty());
    let stats = simulation.stats();
    assert_eq!(stats.idle, 30);
    assert_eq!(stats.longest_idle_streak, 30);
    assert_eq!(stats.dispatches, 0);
}
