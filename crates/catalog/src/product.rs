use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockroom_core::{CategoryId, Entity, ProductId, SupplierId};

/// Product row, the one entity this system mutates.
///
/// `id` is store-assigned: a candidate submitted for Add carries
/// `ProductId::UNASSIGNED` and receives its real identity at commit.
/// `discontinued` is the soft-delete flag — a discontinued product stays on
/// file and keeps its dependent records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub supplier_id: SupplierId,
    pub category_id: CategoryId,
    pub quantity_per_unit: String,
    /// Informational only; never validated.
    pub minimum_order_quantity: Option<i16>,
    pub unit_price: Decimal,
    pub units_on_order: i32,
    pub discontinued: bool,
}

impl Product {
    /// A not-yet-persisted candidate, ready to be filled in by a form.
    pub fn draft(
        name: impl Into<String>,
        supplier_id: SupplierId,
        category_id: CategoryId,
        quantity_per_unit: impl Into<String>,
        unit_price: Decimal,
    ) -> Self {
        Self {
            id: ProductId::UNASSIGNED,
            name: name.into(),
            supplier_id,
            category_id,
            quantity_per_unit: quantity_per_unit.into(),
            minimum_order_quantity: None,
            unit_price,
            units_on_order: 0,
            discontinued: false,
        }
    }

    /// Whether the store has assigned this record an identity.
    pub fn is_persisted(&self) -> bool {
        self.id.is_assigned()
    }

    /// The `(supplier, name, quantity)` business key: no supplier offers the
    /// identical item twice.
    pub fn business_key(&self) -> (SupplierId, &str, &str) {
        (self.supplier_id, &self.name, &self.quantity_per_unit)
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
