//! Simulator configuration read from the environment.
use std::env;
use std::path::{Path, PathBuf};

use anyhow::Result;
use rotation_content::ConfigLoader;
use rotation_core::RotationConfig;

/// What to simulate and where its inputs live.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimConfig {
    /// Overrides the scenario's preset.
    pub preset: Option<String>,
    pub scenario: Option<PathBuf>,
    pub config_path: Option<PathBuf>,
    pub catalog_path: Option<PathBuf>,
    pub log_dir: Option<PathBuf>,
    pub realtime: bool,
}

impl SimConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ROTATION_PRESET` - Preset to run (default: the scenario's, else windwalker)
    /// - `ROTATION_SCENARIO` - Scenario RON file (default: a single training dummy)
    /// - `ROTATION_CONFIG` - Rotation config TOML file (default: built-in defaults)
    /// - `ROTATION_CATALOG` - Ability catalog RON file (default: the preset's embedded one)
    /// - `ROTATION_LOG_DIR` - Also write logs to `rotation.log` in this directory
    /// - `ROTATION_REALTIME` - Pace ticks in wall-clock time (default: false)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.preset = env::var("ROTATION_PRESET").ok();
        config.scenario = env::var("ROTATION_SCENARIO").ok().map(PathBuf::from);
        config.config_path = env::var("ROTATION_CONFIG").ok().map(PathBuf::from);
        config.catalog_path = env::var("ROTATION_CATALOG").ok().map(PathBuf::from);
        config.log_dir = env::var("ROTATION_LOG_DIR").ok().map(PathBuf::from);

        if let Some(realtime) = read_env::<bool>("ROTATION_REALTIME") {
            config.realtime = realtime;
        } else if env::var("ROTATION_REALTIME").is_ok() {
            // Also accept just setting the variable without value as "true"
            config.realtime = true;
        }

        config
    }

    /// Rotation tunables: the TOML file if one is configured, then
    /// `ROTATION_*` environment overrides.
    pub fn rotation_config(&self) -> Result<RotationConfig> {
        let mut config = match &self.config_path {
            Some(path) => load_rotation_config(path)?,
            None => RotationConfig::default(),
        };
        config.apply_env();
        Ok(config)
    }
}

fn load_rotation_config(path: &Path) -> Result<RotationConfig> {
    let config = ConfigLoader::load(path)?;
    tracing::info!("Loaded rotation config from {}", path.display());
    Ok(config)
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
