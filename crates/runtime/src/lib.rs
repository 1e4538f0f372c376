//! Rotation runtime: presets, tick driver and simulation.
//!
//! This crate puts the generic behavior tree engine to work on rotation
//! hosts. Consumers pick a [`Rotation`] (usually a preset), drive it with a
//! [`TickDriver`] against their own [`rotation_core::StateQuery`] host, or
//! run it offline through a [`Simulation`] over a [`Scenario`].
//!
//! Modules are organized by responsibility:
//! - [`rotation`] holds the node library, subtrees and presets
//! - [`driver`] and [`diagnostics`] evaluate ticks and track idle streaks
//! - [`simulation`] and [`scenario`] replay encounters deterministically
//! - [`api`] exposes the error type
pub mod api;
pub mod diagnostics;
pub mod driver;
pub mod rotation;
pub mod scenario;
pub mod simulation;

pub use api::{Result, RuntimeError};
pub use diagnostics::TickStats;
pub use driver::TickDriver;
pub use rotation::presets::{self, Preset};
pub use rotation::{BehaviorTree, Rotation};
pub use scenario::{AuraSpec, ResourceSpec, Scenario, ScenarioEvent, TimedEvent};
pub use simulation::{CastRecord, Simulation, TickReport};
