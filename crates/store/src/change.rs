//! Staged-change model for the unit of work.

use stockroom_catalog::Product;
use stockroom_core::ProductId;

/// A pending product mutation staged against the current session.
///
/// Staged changes are invisible to reads until committed; `rollback` discards
/// them without touching persisted state.
#[derive(Debug, Clone, PartialEq)]
pub enum StagedChange {
    Insert(Product),
    /// Full-record replace keyed by the product's id.
    Modify(Product),
    Remove(ProductId),
}

impl StagedChange {
    /// Short label for logging.
    pub fn intent(&self) -> &'static str {
        match self {
            StagedChange::Insert(_) => "insert",
            StagedChange::Modify(_) => "modify",
            StagedChange::Remove(_) => "remove",
        }
    }
}

/// Outcome of committing a session's staged changes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommitReceipt {
    /// Persisted rows touched by the commit.
    pub rows_affected: usize,
    /// Identities assigned to staged inserts, in staging order.
    pub inserted_ids: Vec<ProductId>,
}
