//! Rotation content: ability catalogs and configuration files.
//!
//! Catalogs are RON lists of [`rotation_core::AbilityDescriptor`]; rotation
//! configuration is TOML deserialized into [`rotation_core::RotationConfig`].
//! The default catalogs ship embedded in the binary.

pub mod loaders;

pub use loaders::{CatalogLoader, ConfigLoader, LoadResult};
