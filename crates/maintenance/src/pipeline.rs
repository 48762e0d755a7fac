//! The mutation pipeline (application-level orchestration).
//!
//! One invocation drives a candidate through
//! `Validating → RuleChecking → Staging → Committing → Done`; any phase can
//! abort. Structural preconditions are the caller's job (see
//! [`crate::products`]) — by the time a candidate reaches this pipeline it is
//! a real record whose identity fits the operation.
//!
//! Guarantees:
//! - validation and rule checking both run to completion and their violations
//!   merge into one ordered report (fields first, then rules);
//! - nothing is staged while the report is non-empty;
//! - every abort path rolls the session back before returning, so a failed
//!   invocation leaks no staged change into the next one.

use tracing::{debug, warn};

use stockroom_catalog::{PriceFloor, Product, field_violations};
use stockroom_core::ViolationReport;
use stockroom_store::{CatalogSession, CommitReceipt, StagedChange};

use crate::error::{MaintenanceError, MaintenanceResult, StorePhase};
use crate::rules;

/// Which lifecycle operation is running (logging and messages).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Operation {
    Add,
    Update,
    Discontinue,
    Activate,
    Delete,
}

impl Operation {
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Update => "update",
            Operation::Discontinue => "discontinue",
            Operation::Activate => "activate",
            Operation::Delete => "delete",
        }
    }
}

impl core::fmt::Display for Operation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Run a full-validation mutation (Add / Update) through the pipeline.
///
/// `make_change` builds the staged change from the candidate once both stages
/// pass; it only runs when the violation report is empty.
pub(crate) fn run_mutation<S, F>(
    session: &mut S,
    op: Operation,
    candidate: &Product,
    price_floor: PriceFloor,
    make_change: F,
) -> MaintenanceResult<CommitReceipt>
where
    S: CatalogSession,
    F: FnOnce(&Product) -> StagedChange,
{
    // Validating: pure field checks, never short-circuits.
    let mut violations = field_violations(candidate, price_floor);

    // RuleChecking: store-backed checks, also run to completion.
    let outcome = rules::check(&*session, candidate)
        .map_err(|source| abort(&mut *session, op, StorePhase::Reading, source))?;
    violations.extend(outcome.violations);

    if let Some(report) = ViolationReport::from_entries(violations) {
        session.rollback();
        warn!(op = op.as_str(), violations = report.len(), "mutation rejected");
        return Err(MaintenanceError::Validation(report));
    }

    // Staging: no partial mutation may reach the store.
    session
        .stage(make_change(candidate))
        .map_err(|source| abort(&mut *session, op, StorePhase::Staging, source))?;

    commit(session, op)
}

/// Commit the session's staged changes, rolling back on failure.
///
/// Shared by the full pipeline and the narrow operations
/// (Discontinue/Activate/Delete) that stage their change directly.
pub(crate) fn commit<S>(session: &mut S, op: Operation) -> MaintenanceResult<CommitReceipt>
where
    S: CatalogSession,
{
    let receipt = session
        .commit()
        .map_err(|source| abort(&mut *session, op, StorePhase::Committing, source))?;
    debug!(
        op = op.as_str(),
        rows_affected = receipt.rows_affected,
        "mutation committed"
    );
    Ok(receipt)
}

/// Roll the session back and wrap the store failure with its phase.
pub(crate) fn abort<S>(
    session: &mut S,
    op: Operation,
    phase: StorePhase,
    source: stockroom_store::StoreError,
) -> MaintenanceError
where
    S: CatalogSession,
{
    session.rollback();
    warn!(op = op.as_str(), %phase, error = %source, "mutation aborted");
    MaintenanceError::store(phase, source)
}
