//! Catalog store traits: read surface and unit of work.

use stockroom_catalog::{Category, Product, Shipment, Supplier};
use stockroom_core::{CategoryId, ProductId, SupplierId};

use crate::change::{CommitReceipt, StagedChange};
use crate::error::StoreError;

/// Read surface of the catalog store.
///
/// Reads observe **persisted** state only: changes staged on the current
/// session are not visible until committed, matching a relational backend
/// where queries hit the database rather than the session's pending set.
pub trait CatalogReader {
    /// All suppliers, ordered by company name.
    fn suppliers(&self) -> Result<Vec<Supplier>, StoreError>;

    /// All categories, ordered by category name.
    fn categories(&self) -> Result<Vec<Category>, StoreError>;

    /// All products, in id order.
    fn products(&self) -> Result<Vec<Product>, StoreError>;

    /// All shipments, in id order.
    fn shipments(&self) -> Result<Vec<Shipment>, StoreError>;

    fn product_by_id(&self, id: ProductId) -> Result<Option<Product>, StoreError>;

    fn supplier_by_id(&self, id: SupplierId) -> Result<Option<Supplier>, StoreError>;

    fn category_by_id(&self, id: CategoryId) -> Result<Option<Category>, StoreError>;

    /// Whether any persisted product matches the predicate.
    fn product_exists(&self, predicate: &dyn Fn(&Product) -> bool) -> Result<bool, StoreError>;

    /// Count of manifest items referencing the product.
    fn manifest_item_count_for(&self, id: ProductId) -> Result<usize, StoreError>;

    /// Count of order details referencing the product.
    fn order_detail_count_for(&self, id: ProductId) -> Result<usize, StoreError>;
}

/// Unit of work scoped to one pipeline invocation.
///
/// Implementations must guarantee:
/// - `commit` applies every staged change atomically (all or nothing) and
///   clears the staged set on success;
/// - a failed `commit` leaves persisted state untouched;
/// - `rollback` discards all staged-but-uncommitted changes, so a failed
///   operation leaks nothing into the next invocation on the same session;
/// - identities for staged inserts are assigned at commit and returned in the
///   receipt, in staging order.
pub trait CatalogSession: CatalogReader {
    fn stage(&mut self, change: StagedChange) -> Result<(), StoreError>;

    fn commit(&mut self) -> Result<CommitReceipt, StoreError>;

    fn rollback(&mut self);

    fn has_staged_changes(&self) -> bool;
}
