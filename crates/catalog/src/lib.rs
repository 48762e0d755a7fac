//! `stockroom-catalog` — catalog entity definitions and field-level validation.
//!
//! Entities here are plain value-carrying rows: the store owns persistence and
//! the maintenance crate owns orchestration. The one piece of behavior that
//! lives here is [`validate`], the pure field-validation stage — it reads no
//! external state and always returns the complete set of violations found.

pub mod category;
pub mod dependents;
pub mod product;
pub mod shipment;
pub mod supplier;
pub mod validate;

pub use category::Category;
pub use dependents::{ManifestItem, OrderDetail};
pub use product::Product;
pub use shipment::Shipment;
pub use supplier::Supplier;
pub use validate::{PriceFloor, field_violations};
