//! Domain types and host contracts for priority rotations.
//!
//! The behavior tree engine is generic; this crate pins it to the
//! vocabulary rotation scripts speak:
//!
//! - **Identity**: [`AbilityId`], [`AuraId`], [`TargetHandle`], [`ResourceKind`]
//! - **Host contract**: [`StateQuery`], the read-only per-tick view that also
//!   serves as the engine's [`behavior_tree::ActionHost`]
//! - **Collaborators**: [`ActionHistory`] (cross-tick memory), [`Settings`]
//!   (named toggles), [`AbilityCatalog`] (what each ability costs and needs)
//! - **Reference host**: [`WorldSnapshot`], an in-memory implementation
//! - **Configuration**: [`RotationConfig`]

pub mod ability;
pub mod config;
pub mod error;
pub mod history;
pub mod ids;
pub mod settings;
pub mod snapshot;
pub mod state;

pub use ability::{
    AbilityCatalog, AbilityDescriptor, AuraApplication, AuraConsumption, Cost, TargetKind,
};
pub use config::RotationConfig;
pub use error::CatalogError;
pub use history::{ActionHistory, CastHistory, HistoryEntry};
pub use ids::{AbilityId, AuraId, ResourceKind, TargetHandle};
pub use settings::{SettingValue, Settings, SettingsMap};
pub use snapshot::{CastRequest, DEFAULT_GCD, WorldSnapshot};
pub use state::{AuraState, CooldownState, ResourceLevel, StateQuery, Unit, UnitCast};
