//! Store operation error.

use thiserror::Error;

/// Failure raised by the persistence backend.
///
/// These are **infrastructure errors**; data and business-rule problems are
/// reported by the maintenance layer before any store mutation is attempted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A backend constraint rejected the change (unique index, foreign key).
    #[error("constraint violated: {0}")]
    Constraint(String),

    /// The backend could not be reached or failed mid-operation.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// A change could not be staged against the current session.
    #[error("invalid staging: {0}")]
    InvalidStage(String),
}
