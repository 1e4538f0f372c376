//! Rotation simulator entry point.
mod config;
mod report;

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use config::SimConfig;
use report::Report;
use rotation_content::CatalogLoader;
use rotation_core::{ResourceKind, TargetHandle, Unit};
use runtime::{Preset, ResourceSpec, Rotation, Scenario, Simulation};
use tokio::time::MissedTickBehavior;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const DEFAULT_PRESET: &str = "windwalker";

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = SimConfig::from_env();

    // Keep the guard alive so buffered file output is flushed on exit
    let _guard = setup_logging(config.log_dir.as_deref())?;

    let rotation_config = config.rotation_config()?;
    let scenario = match &config.scenario {
        Some(path) => Scenario::load(path)?,
        None => training_dummy(),
    };

    let preset = resolve_preset(&config, &scenario)?;
    let catalog = match &config.catalog_path {
        Some(path) => CatalogLoader::load(path)?,
        None => CatalogLoader::embedded(preset.catalog())?,
    };
    tracing::info!(
        preset = %preset,
        scenario = scenario.name.as_str(),
        abilities = catalog.len(),
        "starting simulation"
    );

    let rotation = Rotation::new(preset.to_string(), preset.build());
    let mut simulation =
        Simulation::from_scenario(&scenario, Arc::new(catalog), rotation, &rotation_config)?;

    if config.realtime {
        // Casts were already printed as they happened.
        run_realtime(&mut simulation).await;
        report::print(&simulation, Report::Summary)?;
    } else {
        simulation.run();
        report::print(&simulation, Report::Full)?;
    }
    Ok(())
}

/// `ROTATION_PRESET`, else the scenario's preset, else the default.
fn resolve_preset(config: &SimConfig, scenario: &Scenario) -> Result<Preset> {
    let name = config
        .preset
        .as_deref()
        .or(scenario.preset.as_deref())
        .unwrap_or(DEFAULT_PRESET);

    name.parse().map_err(|_| {
        anyhow::anyhow!(
            "Unknown preset '{}', expected one of: {}",
            name,
            Preset::names().join(", ")
        )
    })
}

/// One enemy in melee range, every pool full.
fn training_dummy() -> Scenario {
    Scenario {
        name: "training dummy".to_string(),
        preset: None,
        max_ticks: None,
        resources: vec![
            ResourceSpec {
                kind: ResourceKind::Energy,
                current: 100.0,
                max: 100.0,
                regen: 10.0,
            },
            ResourceSpec {
                kind: ResourceKind::Chi,
                current: 2.0,
                max: 5.0,
                regen: 0.0,
            },
            ResourceSpec {
                kind: ResourceKind::Mana,
                current: 50_000.0,
                max: 50_000.0,
                regen: 800.0,
            },
        ],
        enemies: vec![Unit::enemy(TargetHandle(1), 3.0)],
        target: Some(TargetHandle(1)),
        auras: Vec::new(),
        settings: Default::default(),
        in_combat: false,
        events: Vec::new(),
    }
}

/// Steps the simulation on a wall-clock interval until the tick limit or Ctrl-C.
async fn run_realtime(simulation: &mut Simulation) {
    let period = simulation.tick_interval().max(Duration::from_millis(1));
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    for _ in 0..simulation.max_ticks() {
        tokio::select! {
            _ = interval.tick() => {
                if let Some(cast) = simulation.step().cast
                    && let Err(err) = report::print_cast(&cast)
                {
                    tracing::warn!("Failed to print cast: {}", err);
                }
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Interrupted, stopping simulation");
                break;
            }
        }
    }
}

/// Setup logging to stderr, plus a file when a log directory is configured.
fn setup_logging(log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let file_appender = tracing_appender::rolling::never(dir, "rotation.log");
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking_file)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    if let Some(dir) = log_dir {
        tracing::info!("Log file: {}/rotation.log", dir.display());
    }

    Ok(guard)
}
