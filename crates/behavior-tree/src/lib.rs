//! Priority behavior tree for per-tick action selection.
//!
//! This library provides a small, deterministic behavior tree evaluator for
//! picking exactly one next action per tick out of a long, ordered list of
//! guarded candidates.
//!
//! - **Stateless nodes**: Trees are built once and never mutated; all state
//!   lives in the host snapshot
//! - **Priority by position**: Declaration order is priority order
//! - **At most one dispatch per tick**: Enforced by [`Evaluation`], whatever
//!   the tree shape
//! - **No errors during evaluation**: Every outcome is a [`Status`]; malformed
//!   trees are rejected at construction time
//!
//! # Architecture
//!
//! - [`Behavior`]: Core trait for all nodes
//! - [`Evaluation`]: Per-tick handle carrying the state and the dispatch latch
//! - [`Status`]: Success, Failure, or Running
//! - Composite nodes: [`Selector`], [`Sequence`]
//! - Decorator nodes: [`Conditional`], [`Inverter`]
//! - Leaf nodes: [`Cast`], [`Condition`], [`Busy`], [`AlwaysSucceed`], [`AlwaysFail`]
//! - Callables: [`Predicate`], [`TargetSelector`]
//! - Host contract: [`ActionHost`]

pub mod action;
pub mod behavior;
pub mod builder;
pub mod composite;
pub mod decorator;
pub mod error;
pub mod leaf;
pub mod predicate;
pub mod status;

// Re-export core types for ergonomic API
pub use action::{ActionHost, Cast, DispatchOutcome};
pub use behavior::{Behavior, Evaluation, Outcome};
pub use composite::{Selector, Sequence};
pub use decorator::{Conditional, Inverter};
pub use error::BuildError;
pub use leaf::{AlwaysFail, AlwaysSucceed, Busy, Condition};
pub use predicate::{Predicate, TargetSelector};
pub use status::Status;
