//! Product lifecycle operations: Add, Update, Discontinue, Activate, Delete.
//!
//! Each operation is one pipeline invocation over the service's store
//! session. Structural preconditions (missing input, wrong identity state,
//! record not on file) fail fast with a single error before any store
//! mutation; data and business-rule problems are aggregated; store failures
//! are re-raised after rollback.
//!
//! Known race: the uniqueness and referential checks are check-then-act
//! reads without a serializable transaction boundary. Two concurrent
//! sessions can both pass the duplicate check before either commits; a
//! production backend is expected to carry a unique index on the business
//! key as the final guard (surfacing as a constraint error at commit).

use tracing::info;

use stockroom_catalog::{PriceFloor, Product};
use stockroom_core::{ProductId, Violation, ViolationCode, ViolationReport};
use stockroom_store::{CatalogSession, StagedChange};

use crate::error::{MaintenanceError, MaintenanceResult};
use crate::pipeline::{self, Operation};

/// Product maintenance service. One instance drives one store session; each
/// method is a complete, request-scoped pipeline invocation.
#[derive(Debug)]
pub struct ProductMaintenance<S> {
    session: S,
}

impl<S> ProductMaintenance<S> {
    pub fn new(session: S) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut S {
        &mut self.session
    }

    pub fn into_session(self) -> S {
        self.session
    }
}

impl<S: CatalogSession> ProductMaintenance<S> {
    /// Add a new product. The submission must carry an unassigned id; the
    /// store assigns the real identity at commit and it is returned here.
    pub fn add(&mut self, submission: Option<&Product>) -> MaintenanceResult<ProductId> {
        let candidate = require_submission(submission)?;

        if candidate.id.is_assigned() {
            return Err(MaintenanceError::invalid_identity(
                "A product being added must not have an assigned product ID!",
            ));
        }

        let receipt = pipeline::run_mutation(
            &mut self.session,
            Operation::Add,
            candidate,
            PriceFloor::Positive,
            |product| StagedChange::Insert(product.clone()),
        )?;

        let id = receipt.inserted_ids.first().copied().ok_or_else(|| {
            MaintenanceError::store(
                crate::error::StorePhase::Committing,
                stockroom_store::StoreError::InvalidStage(
                    "commit receipt carried no inserted id".to_string(),
                ),
            )
        })?;

        info!(product_id = %id, name = %candidate.name, "product added");
        Ok(id)
    }

    /// Replace an existing product record in full. Returns rows affected.
    pub fn update(&mut self, submission: Option<&Product>) -> MaintenanceResult<usize> {
        let candidate = require_submission(submission)?;
        self.require_on_file(candidate.id, Operation::Update)?;

        let receipt = pipeline::run_mutation(
            &mut self.session,
            Operation::Update,
            candidate,
            PriceFloor::NonNegative,
            |product| StagedChange::Modify(product.clone()),
        )?;

        info!(product_id = %candidate.id, "product updated");
        Ok(receipt.rows_affected)
    }

    /// Soft-delete: mark the product discontinued. The record and its
    /// dependent rows stay on file. Idempotent — repeating the call still
    /// reports one row affected.
    pub fn discontinue(&mut self, id: ProductId) -> MaintenanceResult<usize> {
        self.set_discontinued(id, true, Operation::Discontinue)
    }

    /// Reverse a soft-delete: mark the product active again.
    pub fn activate(&mut self, id: ProductId) -> MaintenanceResult<usize> {
        self.set_discontinued(id, false, Operation::Activate)
    }

    /// Hard-delete: physically remove the product, but only when no manifest
    /// item or order detail still references it. Blocked deletes report one
    /// entry per violated relation and leave the store unchanged.
    pub fn delete(&mut self, id: ProductId) -> MaintenanceResult<usize> {
        let op = Operation::Delete;
        let existing = self.require_on_file(id, op)?;

        let manifest_rows = self
            .session
            .manifest_item_count_for(id)
            .map_err(|e| pipeline::abort(&mut self.session, op, crate::error::StorePhase::Reading, e))?;
        let order_rows = self
            .session
            .order_detail_count_for(id)
            .map_err(|e| pipeline::abort(&mut self.session, op, crate::error::StorePhase::Reading, e))?;

        let mut conflicts = Vec::new();
        if manifest_rows > 0 {
            conflicts.push(Violation::new(
                ViolationCode::ManifestItemsExist,
                format!(
                    "Product {} has {} manifest item(s) on file and cannot be removed!",
                    existing.name, manifest_rows
                ),
            ));
        }
        if order_rows > 0 {
            conflicts.push(Violation::new(
                ViolationCode::OrderDetailsExist,
                format!(
                    "Product {} has {} order detail(s) on file and cannot be removed!",
                    existing.name, order_rows
                ),
            ));
        }

        if let Some(report) = ViolationReport::from_entries(conflicts) {
            self.session.rollback();
            return Err(MaintenanceError::ReferentialConflict(report));
        }

        self.session
            .stage(StagedChange::Remove(id))
            .map_err(|e| pipeline::abort(&mut self.session, op, crate::error::StorePhase::Staging, e))?;
        let receipt = pipeline::commit(&mut self.session, op)?;

        info!(product_id = %id, "product removed");
        Ok(receipt.rows_affected)
    }

    /// Narrow flag-flip shared by Discontinue and Activate: fetch, set the
    /// flag, stage as modified, commit. Skips field validation and the
    /// uniqueness re-check — the persisted record's other fields are taken
    /// as-is.
    fn set_discontinued(
        &mut self,
        id: ProductId,
        discontinued: bool,
        op: Operation,
    ) -> MaintenanceResult<usize> {
        let mut record = self.require_on_file(id, op)?;
        record.discontinued = discontinued;

        self.session
            .stage(StagedChange::Modify(record))
            .map_err(|e| pipeline::abort(&mut self.session, op, crate::error::StorePhase::Staging, e))?;
        let receipt = pipeline::commit(&mut self.session, op)?;

        info!(product_id = %id, discontinued, "product flag updated");
        Ok(receipt.rows_affected)
    }

    /// Identity precondition for operations on persisted records: positive
    /// id that resolves to a row on file.
    fn require_on_file(&mut self, id: ProductId, op: Operation) -> MaintenanceResult<Product> {
        if !id.is_assigned() {
            return Err(MaintenanceError::invalid_identity(format!(
                "The product ID must be greater than zero for the {op} operation!"
            )));
        }

        let found = self
            .session
            .product_by_id(id)
            .map_err(|e| pipeline::abort(&mut self.session, op, crate::error::StorePhase::Reading, e))?;

        found.ok_or_else(|| {
            MaintenanceError::invalid_identity(format!("Product with ID {id} is not on file!"))
        })
    }
}

fn require_submission(submission: Option<&Product>) -> MaintenanceResult<&Product> {
    submission.ok_or_else(|| {
        MaintenanceError::missing_input("You must supply product information to be saved!")
    })
}
