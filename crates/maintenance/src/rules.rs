//! Business-rule stage: checks that need the store.
//!
//! All checks run unconditionally — a missing supplier does not suppress the
//! uniqueness check — so one report can carry multiple unrelated errors.
//! Resolved references are returned as a pipeline-local enrichment; the
//! caller's candidate is never mutated.

use stockroom_catalog::{Category, Product, Supplier};
use stockroom_core::{Violation, ViolationCode};
use stockroom_store::{CatalogReader, StoreError};

/// Referenced entities resolved while rule checking, used downstream for
/// readable error messages.
#[derive(Debug, Clone, Default)]
pub struct ResolvedRefs {
    pub supplier: Option<Supplier>,
    pub category: Option<Category>,
}

/// Result of one rule-checking pass.
#[derive(Debug, Clone)]
pub struct RuleOutcome {
    pub resolved: ResolvedRefs,
    pub violations: Vec<Violation>,
}

/// Check cross-entity rules for a candidate product:
///
/// 1. the supplier referenced by `supplier_id` exists;
/// 2. the category referenced by `category_id` exists;
/// 3. no other product shares the `(supplier, name, quantity)` business key,
///    excluding the candidate's own id.
pub fn check<S>(reader: &S, candidate: &Product) -> Result<RuleOutcome, StoreError>
where
    S: CatalogReader + ?Sized,
{
    let mut violations = Vec::new();

    let supplier = reader.supplier_by_id(candidate.supplier_id)?;
    if supplier.is_none() {
        violations.push(Violation::new(
            ViolationCode::SupplierNotFound,
            "A supplier does not exist for the included Supplier ID!",
        ));
    }

    let category = reader.category_by_id(candidate.category_id)?;
    if category.is_none() {
        violations.push(Violation::new(
            ViolationCode::CategoryNotFound,
            "A category does not exist for the included Category ID!",
        ));
    }

    let duplicate = reader.product_exists(&|existing: &Product| {
        existing.id != candidate.id && existing.business_key() == candidate.business_key()
    })?;
    if duplicate {
        let supplier_name = supplier
            .as_ref()
            .map(|s| s.company_name.clone())
            .unwrap_or_else(|| format!("supplier {}", candidate.supplier_id));
        violations.push(Violation::new(
            ViolationCode::DuplicateProduct,
            format!(
                "Product {} from {} of size {} already exists!",
                candidate.name, supplier_name, candidate.quantity_per_unit
            ),
        ));
    }

    Ok(RuleOutcome {
        resolved: ResolvedRefs { supplier, category },
        violations,
    })
}
