//! Rotation runtime configuration.
use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::history::CastHistory;
use crate::settings::SettingsMap;

/// Tunables for driving a rotation, plus the settings table its guards read.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationConfig {
    /// Simulated time between ticks.
    pub tick_ms: u64,
    /// Ticks to run before a simulation stops.
    pub max_ticks: u64,
    /// Consecutive idle ticks before a warning is logged.
    pub idle_warn_after: u32,
    /// Entries kept in the action history.
    pub history_capacity: usize,
    /// Named toggles read by rotation guards.
    pub settings: SettingsMap,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            tick_ms: 100,
            max_ticks: 600,
            idle_warn_after: 50,
            history_capacity: CastHistory::DEFAULT_CAPACITY,
            settings: SettingsMap::default(),
        }
    }
}

impl RotationConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Construct configuration from defaults and process environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Overrides fields from process environment variables.
    ///
    /// Environment variables:
    /// - `ROTATION_TICK_MS` - Simulated milliseconds per tick (default: 100, min 1)
    /// - `ROTATION_MAX_TICKS` - Ticks per simulation run (default: 600)
    /// - `ROTATION_IDLE_WARN` - Idle ticks before warning (default: 50)
    /// - `ROTATION_HISTORY` - Action history capacity (default: 16, min 1)
    pub fn apply_env(&mut self) {
        if let Some(tick_ms) = read_env::<u64>("ROTATION_TICK_MS") {
            self.tick_ms = tick_ms.max(1);
        }

        if let Some(max_ticks) = read_env::<u64>("ROTATION_MAX_TICKS") {
            self.max_ticks = max_ticks;
        }

        if let Some(idle) = read_env::<u32>("ROTATION_IDLE_WARN") {
            self.idle_warn_after = idle;
        }

        if let Some(capacity) = read_env::<usize>("ROTATION_HISTORY") {
            self.history_capacity = capacity.max(1);
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
