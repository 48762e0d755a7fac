//! Field-level validation of a candidate product.
//!
//! This stage is pure: it reads no external state and never short-circuits.
//! Every check runs and every violation found is returned, in field order, so
//! the caller can report the complete set in one pass. Cross-entity rules
//! (supplier/category existence, business-key uniqueness) live in the
//! maintenance crate because they need the store.

use rust_decimal::Decimal;

use stockroom_core::{Violation, ViolationCode};

use crate::product::Product;

/// Maximum length of a product name.
pub const NAME_MAX_LEN: usize = 40;

/// Maximum length of a quantity-per-unit descriptor.
pub const QUANTITY_PER_UNIT_MAX_LEN: usize = 20;

/// Price floor for the candidate: a record being created must carry a
/// positive price, a replacement may keep zero.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PriceFloor {
    Positive,
    NonNegative,
}

/// Collect every field-level violation in the candidate.
pub fn field_violations(product: &Product, price_floor: PriceFloor) -> Vec<Violation> {
    let mut violations = Vec::new();

    if product.name.trim().is_empty() {
        violations.push(Violation::new(
            ViolationCode::NameRequired,
            "The product name must be provided!",
        ));
    } else if product.name.chars().count() > NAME_MAX_LEN {
        violations.push(Violation::new(
            ViolationCode::NameTooLong,
            format!("The product name must be {NAME_MAX_LEN} characters or less!"),
        ));
    }

    if !product.category_id.is_assigned() {
        violations.push(Violation::new(
            ViolationCode::CategoryIdRange,
            "The category ID must be greater than zero!",
        ));
    }

    if !product.supplier_id.is_assigned() {
        violations.push(Violation::new(
            ViolationCode::SupplierIdRange,
            "The supplier ID must be greater than zero!",
        ));
    }

    if product.quantity_per_unit.trim().is_empty() {
        violations.push(Violation::new(
            ViolationCode::QuantityPerUnitRequired,
            "The quantity per unit must be provided!",
        ));
    } else if product.quantity_per_unit.chars().count() > QUANTITY_PER_UNIT_MAX_LEN {
        violations.push(Violation::new(
            ViolationCode::QuantityPerUnitTooLong,
            format!("The quantity per unit must be {QUANTITY_PER_UNIT_MAX_LEN} characters or less!"),
        ));
    }

    match price_floor {
        PriceFloor::Positive => {
            if product.unit_price <= Decimal::ZERO {
                violations.push(Violation::new(
                    ViolationCode::UnitPriceRange,
                    "The unit price must be greater than zero!",
                ));
            }
        }
        PriceFloor::NonNegative => {
            if product.unit_price < Decimal::ZERO {
                violations.push(Violation::new(
                    ViolationCode::UnitPriceRange,
                    "The unit price must be greater than or equal to zero!",
                ));
            }
        }
    }

    if product.units_on_order < 0 {
        violations.push(Violation::new(
            ViolationCode::UnitsOnOrderRange,
            "The units on order must be greater than or equal to zero!",
        ));
    }

    violations
}
