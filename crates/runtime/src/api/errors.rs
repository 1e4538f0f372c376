//! Unified error types surfaced by the runtime API.
//!
//! Evaluation itself never fails; these cover the work around it: picking a
//! preset, reading scenarios and assembling a world from them.
use std::path::PathBuf;

use rotation_core::{AuraId, TargetHandle};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("no rotation preset named '{0}'")]
    UnknownPreset(String),

    #[error("failed to read scenario {path}")]
    ScenarioIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse scenario")]
    ScenarioParse(#[source] ron::error::SpannedError),

    #[error("scenario places unit {0:?} more than once")]
    DuplicateUnit(TargetHandle),

    #[error("unit handle {0:?} is reserved for the player")]
    ReservedHandle(TargetHandle),

    #[error("scenario targets unit {0:?}, which it never places")]
    UnknownTarget(TargetHandle),

    #[error("scenario aura {aura:?} is placed on unknown unit {unit:?}")]
    UnknownAuraHolder { unit: TargetHandle, aura: AuraId },

    #[error(transparent)]
    Build(#[from] behavior_tree::BuildError),
}
