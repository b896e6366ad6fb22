//! MEDIC Core - predicate expression model for clinical business rules
//!
//! This crate provides the rule primitives used across the MEDIC ecosystem:
//! - [`Value`] leaves: known literals and named placeholders
//! - [`Expression`] trees of comparisons and logical combinators
//! - a resolver-driven evaluator with a positional convenience form
//! - placeholder reference collection and diagnostic rendering
//!
//! Expression trees are immutable once built and carry no interior state, so
//! a single tree can be evaluated concurrently from any number of threads.

pub mod error;
pub mod predicate;

// Re-export commonly used types
pub use error::{EvalError, PositionalError};
pub use predicate::{Expression, Value, HAS_DELIMITER};
