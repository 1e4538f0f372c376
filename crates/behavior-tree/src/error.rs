//! Construction-time errors.
//!
//! A malformed tree is reported while it is being built, before any tick
//! runs. Evaluation itself never errors: every outcome is a [`crate::Status`].

use thiserror::Error;

/// Errors raised while assembling a behavior tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// A composite node was given no children.
    #[error("{kind} must have at least one child")]
    EmptyComposite { kind: &'static str },
}
