//! Read-query services over the catalog store.
//!
//! Thin lookups the maintenance UI needs alongside the pipeline: reference
//! listings for form dropdowns, a paginated per-category product view, and
//! the shipment month query. Only the shipment query validates input, and it
//! aggregates its violations the same way the pipeline does.

use chrono::{Datelike, Utc};

use stockroom_catalog::{Category, Product, Shipment, Supplier};
use stockroom_core::{CategoryId, Violation, ViolationCode, ViolationReport};
use stockroom_store::CatalogReader;

use crate::error::{MaintenanceError, MaintenanceResult, StorePhase};

/// Earliest shipment year the store carries.
const SHIPMENT_YEAR_FLOOR: i32 = 1950;

fn read<T>(result: Result<T, stockroom_store::StoreError>) -> MaintenanceResult<T> {
    result.map_err(|source| MaintenanceError::store(StorePhase::Reading, source))
}

/// All suppliers, ordered by company name.
pub fn suppliers<S: CatalogReader>(reader: &S) -> MaintenanceResult<Vec<Supplier>> {
    read(reader.suppliers())
}

/// All categories, ordered by category name.
pub fn categories<S: CatalogReader>(reader: &S) -> MaintenanceResult<Vec<Category>> {
    read(reader.categories())
}

/// Number of products filed under a category.
pub fn product_count_for_category<S: CatalogReader>(
    reader: &S,
    category_id: CategoryId,
) -> MaintenanceResult<usize> {
    let products = read(reader.products())?;
    Ok(products
        .iter()
        .filter(|p| p.category_id == category_id)
        .count())
}

/// One page of a category's products, ordered by supplier company name
/// (descending) then product name. `page` is zero-based.
pub fn products_by_category<S: CatalogReader>(
    reader: &S,
    category_id: CategoryId,
    page: usize,
    per_page: usize,
) -> MaintenanceResult<Vec<Product>> {
    let suppliers = read(reader.suppliers())?;
    let company_name = |product: &Product| {
        suppliers
            .iter()
            .find(|s| s.id == product.supplier_id)
            .map(|s| s.company_name.clone())
            .unwrap_or_default()
    };

    let mut rows: Vec<Product> = read(reader.products())?
        .into_iter()
        .filter(|p| p.category_id == category_id)
        .collect();
    rows.sort_by(|a, b| {
        company_name(b)
            .cmp(&company_name(a))
            .then_with(|| a.name.cmp(&b.name))
    });

    Ok(rows
        .into_iter()
        .skip(page.saturating_mul(per_page))
        .take(per_page)
        .collect())
}

/// Shipments whose shipped date falls in the given year and month.
///
/// Input is validated before any store read: the year must lie between 1950
/// and the current year, the month between 1 and 12; both violations are
/// reported together when both apply.
pub fn shipments_in_month<S: CatalogReader>(
    reader: &S,
    year: i32,
    month: u32,
) -> MaintenanceResult<Vec<Shipment>> {
    let mut violations = Vec::new();

    let current_year = Utc::now().year();
    if year < SHIPMENT_YEAR_FLOOR || year > current_year {
        violations.push(Violation::new(
            ViolationCode::YearOutOfRange,
            format!(
                "The year must be between {SHIPMENT_YEAR_FLOOR} and {current_year}!"
            ),
        ));
    }

    if !(1..=12).contains(&month) {
        violations.push(Violation::new(
            ViolationCode::MonthOutOfRange,
            "You must supply a valid month number!",
        ));
    }

    if let Some(report) = ViolationReport::from_entries(violations) {
        return Err(MaintenanceError::Validation(report));
    }

    let shipments = read(reader.shipments())?;
    Ok(shipments
        .into_iter()
        .filter(|s| s.shipped_date.year() == year && s.shipped_date.month() == month)
        .collect())
}
