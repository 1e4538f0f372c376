//! Rotation-specific behavior tree nodes.
//!
//! This module contains the building blocks rotations are written in, all
//! generic over a [`rotation_core::StateQuery`] host:
//!
//! - `conditions`: named predicates over the snapshot (enemy counts,
//!   resources, auras, cooldowns, settings, history)
//! - `targets`: selectors resolving who a cast should hit
//! - `actions`: guarded casts

pub mod actions;
pub mod conditions;
pub mod targets;

pub use actions::*;
pub use conditions::*;
pub use targets::*;
