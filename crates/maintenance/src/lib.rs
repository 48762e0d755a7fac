//! `stockroom-maintenance` — validation and transactional mutation for the
//! product catalog.
//!
//! The pipeline composes independent failure sources — malformed fields,
//! missing related entities, duplicate business keys, dependent-record
//! conflicts, store failures — into one complete, user-actionable report
//! instead of failing on the first problem. No partial mutation ever reaches
//! the store: every abort path rolls the session back first.

pub mod error;
pub mod pipeline;
pub mod products;
pub mod queries;
pub mod rules;

pub use error::{MaintenanceError, MaintenanceResult, StorePhase};
pub use products::ProductMaintenance;
