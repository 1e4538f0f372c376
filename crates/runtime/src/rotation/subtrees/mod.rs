//! Reusable rotation subtrees.
//!
//! - **Patterns**: root guards and single-purpose blocks every rotation
//!   starts with (stay put while casting, idle without a target, interrupt)
//! - **Tactics**: mode-gated sub-rotations selected by a predicate
//!
//! # Example
//!
//! ```rust,ignore
//! Rotation::priority("custom", vec![
//!     patterns::busy_while_casting(),
//!     patterns::interrupt(KICK, 5.0),
//!     patterns::idle_without_target(),
//!     tactics::mode(enemies_within(8.0, 3), vec![cast_self(WHIRLWIND)]),
//!     cast(SLAM),
//! ])
//! ```

pub mod patterns;
pub mod tactics;
