//! Dependent records that reference a product.
//!
//! Their existence blocks hard deletion of the referenced product; they never
//! block a Discontinue. The pipeline only ever counts them.

use serde::{Deserialize, Serialize};

use stockroom_core::ProductId;

/// One line of a shipping manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestItem {
    pub id: i32,
    pub product_id: ProductId,
    pub quantity: i32,
}

/// One line of a customer order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDetail {
    pub id: i32,
    pub product_id: ProductId,
    pub quantity: i32,
}
