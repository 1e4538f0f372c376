//! Named configuration toggles read by rotation guards.
//!
//! Examples: `use_cooldowns = true`, `aoe_threshold = 3`. The engine only
//! needs `get(name)`; loading lives in the content crate.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single setting value.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Flag(bool),
    Number(f64),
}

impl SettingValue {
    /// Truthiness: flags as-is, numbers when non-zero.
    pub fn as_flag(self) -> bool {
        match self {
            SettingValue::Flag(flag) => flag,
            SettingValue::Number(n) => n != 0.0,
        }
    }

    /// Numeric view: flags read as 1 or 0.
    pub fn as_number(self) -> f64 {
        match self {
            SettingValue::Flag(true) => 1.0,
            SettingValue::Flag(false) => 0.0,
            SettingValue::Number(n) => n,
        }
    }
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        SettingValue::Flag(value)
    }
}

impl From<f64> for SettingValue {
    fn from(value: f64) -> Self {
        SettingValue::Number(value)
    }
}

/// Lookup of named settings.
pub trait Settings {
    fn get(&self, name: &str) -> Option<SettingValue>;

    /// Boolean view; missing settings read as `false`.
    fn flag(&self, name: &str) -> bool {
        self.get(name).is_some_and(SettingValue::as_flag)
    }

    /// Numeric view; missing settings read as `None`.
    fn number(&self, name: &str) -> Option<f64> {
        self.get(name).map(SettingValue::as_number)
    }
}

/// In-memory settings table.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SettingsMap {
    values: BTreeMap<String, SettingValue>,
}

impl SettingsMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<SettingValue>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<SettingValue>) {
        self.values.insert(name.into(), value.into());
    }

    /// Overlays `other` on top of `self`; keys in `other` win.
    pub fn merge(&mut self, other: &SettingsMap) {
        for (name, value) in &other.values {
            self.values.insert(name.clone(), *value);
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, SettingValue)> {
        self.values.iter().map(|(name, value)| (name.as_str(), *value))
    }
}

impl Settings for SettingsMap {
    fn get(&self, name: &str) -> Option<SettingValue> {
        self.values.get(name).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_settings_are_falsy() {
        let settings = SettingsMap::new();
        assert!(!settings.flag("use_cooldowns"));
        assert_eq!(settings.number("aoe_threshold"), None);
    }

    #[test]
    fn numbers_and_flags_convert() {
        let settings = SettingsMap::new()
            .with("use_cooldowns", true)
            .with("aoe_threshold", 3.0);

        assert!(settings.flag("use_cooldowns"));
        assert!(settings.flag("aoe_threshold"));
        assert_eq!(settings.number("use_cooldowns"), Some(1.0));
        assert_eq!(settings.number("aoe_threshold"), Some(3.0));
    }

    #[test]
    fn merge_overrides_existing_keys() {
        let mut base = SettingsMap::new().with("aoe_threshold", 3.0);
        base.merge(&SettingsMap::new().with("aoe_threshold", 5.0).with("burst", false));

        assert_eq!(base.number("aoe_threshold"), Some(5.0));
        assert_eq!(base.len(), 2);
    }

    #[test]
    fn parses_from_toml_table() {
        let settings: SettingsMap = toml::from_str("use_cooldowns = true\naoe_threshold = 4\n")
            .expect("settings should parse");

        assert!(settings.flag("use_cooldowns"));
        assert_eq!(settings.number("aoe_threshold"), Some(4.0));
    }
}
