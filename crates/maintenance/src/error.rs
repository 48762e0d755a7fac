//! Caller-visible error model for maintenance operations.
//!
//! Three distinct shapes, so callers branch on the discriminant:
//! - structural preconditions fail fast with a single error
//!   ([`MaintenanceError::MissingInput`], [`MaintenanceError::InvalidIdentity`]);
//! - data and business-rule problems are fully enumerated before reporting
//!   ([`MaintenanceError::Validation`], [`MaintenanceError::ReferentialConflict`]);
//! - store failures surface as one error after the session has been rolled
//!   back ([`MaintenanceError::Store`]).

use thiserror::Error;

use stockroom_core::ViolationReport;
use stockroom_store::StoreError;

pub type MaintenanceResult<T> = Result<T, MaintenanceError>;

/// Pipeline phase in which the store raised.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StorePhase {
    Reading,
    Staging,
    Committing,
}

impl core::fmt::Display for StorePhase {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let label = match self {
            StorePhase::Reading => "reading",
            StorePhase::Staging => "staging",
            StorePhase::Committing => "committing",
        };
        f.write_str(label)
    }
}

/// Failure of a product maintenance operation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MaintenanceError {
    /// No product record was supplied with the request. Fatal, immediate.
    #[error("{0}")]
    MissingInput(String),

    /// The record's identity state does not fit the requested operation
    /// (assigned id on Add, unassigned or unknown id elsewhere). Fatal,
    /// immediate.
    #[error("{0}")]
    InvalidIdentity(String),

    /// One or more field or business-rule violations, reported as the
    /// complete ordered set found before any mutation.
    #[error("validation failed: {0}")]
    Validation(ViolationReport),

    /// A hard delete was blocked by dependent records, one entry per violated
    /// relation.
    #[error("delete blocked: {0}")]
    ReferentialConflict(ViolationReport),

    /// The store raised while reading, staging, or committing. The session
    /// was rolled back before this was returned.
    #[error("store failure while {phase}: {source}")]
    Store {
        phase: StorePhase,
        #[source]
        source: StoreError,
    },
}

impl MaintenanceError {
    pub fn missing_input(message: impl Into<String>) -> Self {
        Self::MissingInput(message.into())
    }

    pub fn invalid_identity(message: impl Into<String>) -> Self {
        Self::InvalidIdentity(message.into())
    }

    pub fn store(phase: StorePhase, source: StoreError) -> Self {
        Self::Store { phase, source }
    }
}
