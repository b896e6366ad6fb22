//! Error types for MEDIC Core

use std::num::ParseIntError;
use thiserror::Error;

/// Error raised when an expression cannot be reduced to a boolean.
///
/// Both variants are terminal for the enclosing evaluation: they propagate
/// immediately and the call produces no partial result. Structural
/// operations (reference collection, rendering) never produce them.
#[derive(Error, Debug)]
pub enum EvalError {
    /// The resolver declined to supply a value for a placeholder.
    #[error("no value for reference '{name}'")]
    Unresolved { name: String },

    /// A placeholder name did not address the supplied parameter sequence.
    #[error("reference cannot be satisfied by the {} supplied parameter(s)", .parameters.len())]
    ArgumentsCountMismatch {
        /// String form of the parameters that were supplied
        parameters: Vec<String>,
        #[source]
        cause: PositionalError,
    },
}

/// Cause detail carried by [`EvalError::ArgumentsCountMismatch`].
#[derive(Error, Debug)]
pub enum PositionalError {
    /// The placeholder name is not a decimal index.
    #[error("'{reference}' is not a decimal index")]
    NotAnIndex {
        reference: String,
        #[source]
        source: ParseIntError,
    },

    /// The index lies outside the supplied parameter sequence.
    #[error("index {index} is out of range for {supplied} parameter(s)")]
    OutOfRange { index: usize, supplied: usize },
}
