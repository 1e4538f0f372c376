//! Complete rotations.
//!
//! Each preset is a ready-to-use priority list built from [`super::nodes`]
//! and [`super::subtrees`], paired with the embedded ability catalog of the
//! same name.
//!
//! # Usage
//!
//! ```rust,ignore
//! use runtime::rotation::presets::{self, Preset};
//!
//! let rotation = presets::by_name::<WorldSnapshot>("windwalker")?;
//! let outcome = rotation.evaluate(&mut world);
//! ```

pub mod frost_mage;
pub mod windwalker;

use std::str::FromStr;

use rotation_core::StateQuery;
use strum::IntoEnumIterator;

use crate::api::{Result, RuntimeError};
use crate::rotation::{BehaviorTree, Rotation};

pub use frost_mage::frost_mage;
pub use windwalker::windwalker;

/// Every shipped rotation.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Preset {
    Windwalker,
    FrostMage,
}

impl Preset {
    /// Builds this preset's tree.
    pub fn build<S: StateQuery + 'static>(self) -> BehaviorTree<S> {
        match self {
            Preset::Windwalker => windwalker(),
            Preset::FrostMage => frost_mage(),
        }
    }

    /// Name of the ability catalog the preset's ids refer to.
    pub fn catalog(self) -> &'static str {
        match self {
            Preset::Windwalker => "windwalker",
            Preset::FrostMage => "frost_mage",
        }
    }

    /// All preset names, for help output.
    pub fn names() -> Vec<String> {
        Preset::iter().map(|preset| preset.to_string()).collect()
    }
}

/// Looks a preset up by name and wraps it in a [`Rotation`].
///
/// # Errors
///
/// Returns [`RuntimeError::UnknownPreset`] for names no preset answers to.
pub fn by_name<S: StateQuery + 'static>(name: &str) -> Result<Rotation<S>> {
    let preset =
        Preset::from_str(name).map_err(|_| RuntimeError::UnknownPreset(name.to_string()))?;
    tracing::debug!(%preset, "building preset rotation");
    Ok(Rotation::new(preset.to_string(), preset.build()))
}
