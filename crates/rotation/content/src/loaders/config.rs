//! Rotation configuration loader.

use std::path::Path;

use rotation_core::RotationConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for rotation configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`RotationConfig::default`].
    pub fn load(path: &Path) -> LoadResult<RotationConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse config TOML text.
    pub fn parse(source: &str) -> LoadResult<RotationConfig> {
        let config: RotationConfig = toml::from_str(source)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use rotation_core::Settings;

    use super::*;

    #[test]
    fn loads_settings_table() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "max_ticks = 20\n\n[settings]\nuse_cooldowns = true").expect("write");

        let config = ConfigLoader::load(file.path()).expect("config should load");
        assert_eq!(config.max_ticks, 20);
        assert_eq!(config.tick_ms, RotationConfig::default().tick_ms);
        assert!(config.settings.flag("use_cooldowns"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = ConfigLoader::load(Path::new("/nonexistent/rotation.toml"))
            .expect_err("missing file should fail");
        assert!(err.to_string().contains("Failed to read file"));
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(ConfigLoader::parse("tick_ms = \"fast\"").is_err());
    }
}
