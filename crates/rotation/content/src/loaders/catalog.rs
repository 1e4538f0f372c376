//! Ability catalog loader.
//!
//! Loads ability descriptors from RON data files.

use std::path::Path;

use rotation_core::{AbilityCatalog, AbilityDescriptor};

use crate::loaders::{LoadResult, read_file};

const WINDWALKER: &str = include_str!("../../data/abilities/windwalker.ron");
const FROST_MAGE: &str = include_str!("../../data/abilities/frost_mage.ron");

/// Loader for ability catalogs.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Names of the catalogs embedded in the binary.
    pub const EMBEDDED: &'static [&'static str] = &["windwalker", "frost_mage"];

    /// Load a catalog from a RON file containing a list of descriptors.
    pub fn load(path: &Path) -> LoadResult<AbilityCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load catalog {}: {}", path.display(), e))
    }

    /// Load one of the embedded catalogs by name.
    pub fn embedded(name: &str) -> LoadResult<AbilityCatalog> {
        let source = match name {
            "windwalker" => WINDWALKER,
            "frost_mage" => FROST_MAGE,
            other => anyhow::bail!("No embedded catalog named '{}'", other),
        };
        Self::parse(source).map_err(|e| anyhow::anyhow!("Failed to parse {}.ron: {}", name, e))
    }

    /// Parse catalog RON text.
    pub fn parse(source: &str) -> LoadResult<AbilityCatalog> {
        let descriptors: Vec<AbilityDescriptor> =
            ron::from_str(source).map_err(|e| anyhow::anyhow!("Invalid catalog RON: {}", e))?;
        let catalog = AbilityCatalog::new(descriptors)?;
        tracing::debug!("Loaded {} abilities", catalog.len());
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use rotation_core::{AbilityId, ResourceKind, TargetKind};

    use super::*;

    #[test]
    fn embedded_catalogs_load() {
        for name in CatalogLoader::EMBEDDED {
            let catalog = CatalogLoader::embedded(name).expect("embedded catalog should load");
            assert!(!catalog.is_empty(), "{name} should not be empty");
        }
    }

    #[test]
    fn windwalker_descriptors_parse_fully() {
        let catalog = CatalogLoader::embedded("windwalker").expect("catalog should load");

        let tiger_palm = catalog.get(AbilityId(100780)).expect("Tiger Palm");
        assert_eq!(tiger_palm.name, "Tiger Palm");
        assert_eq!(tiger_palm.cost.map(|c| c.resource), Some(ResourceKind::Energy));
        assert_eq!(tiger_palm.generates.map(|c| c.amount), Some(2.0));
        assert!(tiger_palm.on_gcd);

        let sef = catalog
            .get(catalog.id_of("Storm, Earth, and Fire").expect("SEF id"))
            .expect("SEF");
        assert_eq!(sef.charges, 2);
        assert_eq!(sef.target, TargetKind::Player);
        assert!(!sef.on_gcd);
    }

    #[test]
    fn unknown_embedded_name_fails() {
        assert!(CatalogLoader::embedded("shadow_priest").is_err());
    }

    #[test]
    fn duplicate_ids_surface_as_errors() {
        let source = r#"[(id: 1, name: "Jab"), (id: 1, name: "Jab Again")]"#;
        let err = CatalogLoader::parse(source).expect_err("duplicate should fail");
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"[(id: 5, name: "Jab", cooldown_ms: 3000)]"#).expect("write");

        let catalog = CatalogLoader::load(file.path()).expect("catalog should load");
        assert_eq!(catalog.get(AbilityId(5)).map(|d| d.cooldown_ms), Some(3000));
    }
}
