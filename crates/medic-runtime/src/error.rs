//! Runtime error types

use medic_core::EvalError;
use thiserror::Error;

/// Runtime error
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// Patient not found
    #[error("patient {0} not found")]
    PatientNotFound(i64),

    /// Status not found
    #[error("status {0} not found")]
    StatusNotFound(i64),

    /// Patient has no pending draft
    #[error("patient {0} has no status draft")]
    DraftNotFound(i64),

    /// No eligible transition between the two statuses
    #[error("transition from status {from} to status {to} is not allowed")]
    TransitionNotAllowed { from: i64, to: i64 },

    /// A rule references attributes the patient does not carry
    #[error("rule cannot be evaluated: missing attribute(s) {missing:?}")]
    MissingAttributes { missing: Vec<String> },

    /// Rule evaluation failed
    #[error("rule evaluation failed")]
    Evaluation(#[from] EvalError),
}

/// Result type for runtime operations
pub type Result<T> = std::result::Result<T, RuntimeError>;
