use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Shipment row, read-only in this system (queried by year/month).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shipment {
    pub id: i32,
    pub shipped_date: NaiveDate,
    pub ship_via: i32,
    pub freight_cost: Decimal,
}
