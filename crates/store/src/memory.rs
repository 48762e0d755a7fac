//! In-memory catalog session.
//!
//! Intended for tests/dev. Not optimized for performance. One instance is one
//! store session: staged changes live on the instance until committed or
//! rolled back, and reads always reflect persisted state only.

use std::collections::BTreeMap;

use tracing::debug;

use stockroom_catalog::{Category, ManifestItem, OrderDetail, Product, Shipment, Supplier};
use stockroom_core::{CategoryId, ProductId, SupplierId};

use crate::change::{CommitReceipt, StagedChange};
use crate::error::StoreError;
use crate::session::{CatalogReader, CatalogSession};

#[derive(Debug, Default)]
pub struct MemoryCatalog {
    products: BTreeMap<ProductId, Product>,
    suppliers: BTreeMap<SupplierId, Supplier>,
    categories: BTreeMap<CategoryId, Category>,
    manifest_items: Vec<ManifestItem>,
    order_details: Vec<OrderDetail>,
    shipments: Vec<Shipment>,

    staged: Vec<StagedChange>,
    next_product_id: i32,

    fail_next_stage: Option<StoreError>,
    fail_next_commit: Option<StoreError>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self {
            next_product_id: 1,
            ..Self::default()
        }
    }

    // Seeding helpers: write persisted state directly, bypassing the unit of
    // work. For test/dev fixture setup only.

    pub fn seed_supplier(&mut self, supplier: Supplier) {
        self.suppliers.insert(supplier.id, supplier);
    }

    pub fn seed_category(&mut self, category: Category) {
        self.categories.insert(category.id, category);
    }

    pub fn seed_product(&mut self, product: Product) {
        self.next_product_id = self.next_product_id.max(product.id.get() + 1);
        self.products.insert(product.id, product);
    }

    pub fn seed_manifest_item(&mut self, item: ManifestItem) {
        self.manifest_items.push(item);
    }

    pub fn seed_order_detail(&mut self, detail: OrderDetail) {
        self.order_details.push(detail);
    }

    pub fn seed_shipment(&mut self, shipment: Shipment) {
        self.shipments.push(shipment);
    }

    /// Script the next `stage` call to fail with `error`.
    pub fn fail_next_stage(&mut self, error: StoreError) {
        self.fail_next_stage = Some(error);
    }

    /// Script the next `commit` call to fail with `error`.
    pub fn fail_next_commit(&mut self, error: StoreError) {
        self.fail_next_commit = Some(error);
    }

    /// Snapshot of persisted products, for pre/post comparisons in tests.
    pub fn persisted_products(&self) -> Vec<Product> {
        self.products.values().cloned().collect()
    }
}

impl CatalogReader for MemoryCatalog {
    fn suppliers(&self) -> Result<Vec<Supplier>, StoreError> {
        let mut rows: Vec<Supplier> = self.suppliers.values().cloned().collect();
        rows.sort_by(|a, b| a.company_name.cmp(&b.company_name));
        Ok(rows)
    }

    fn categories(&self) -> Result<Vec<Category>, StoreError> {
        let mut rows: Vec<Category> = self.categories.values().cloned().collect();
        rows.sort_by(|a, b| a.category_name.cmp(&b.category_name));
        Ok(rows)
    }

    fn products(&self) -> Result<Vec<Product>, StoreError> {
        Ok(self.products.values().cloned().collect())
    }

    fn shipments(&self) -> Result<Vec<Shipment>, StoreError> {
        Ok(self.shipments.clone())
    }

    fn product_by_id(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        Ok(self.products.get(&id).cloned())
    }

    fn supplier_by_id(&self, id: SupplierId) -> Result<Option<Supplier>, StoreError> {
        Ok(self.suppliers.get(&id).cloned())
    }

    fn category_by_id(&self, id: CategoryId) -> Result<Option<Category>, StoreError> {
        Ok(self.categories.get(&id).cloned())
    }

    fn product_exists(&self, predicate: &dyn Fn(&Product) -> bool) -> Result<bool, StoreError> {
        Ok(self.products.values().any(predicate))
    }

    fn manifest_item_count_for(&self, id: ProductId) -> Result<usize, StoreError> {
        Ok(self
            .manifest_items
            .iter()
            .filter(|item| item.product_id == id)
            .count())
    }

    fn order_detail_count_for(&self, id: ProductId) -> Result<usize, StoreError> {
        Ok(self
            .order_details
            .iter()
            .filter(|detail| detail.product_id == id)
            .count())
    }
}

impl CatalogSession for MemoryCatalog {
    fn stage(&mut self, change: StagedChange) -> Result<(), StoreError> {
        if let Some(error) = self.fail_next_stage.take() {
            return Err(error);
        }
        debug!(intent = change.intent(), "staged change");
        self.staged.push(change);
        Ok(())
    }

    fn commit(&mut self) -> Result<CommitReceipt, StoreError> {
        if let Some(error) = self.fail_next_commit.take() {
            // Staged changes stay pending; the caller decides to roll back.
            return Err(error);
        }

        let mut receipt = CommitReceipt::default();
        for change in self.staged.drain(..) {
            match change {
                StagedChange::Insert(mut product) => {
                    let id = ProductId::new(self.next_product_id);
                    self.next_product_id += 1;
                    product.id = id;
                    self.products.insert(id, product);
                    receipt.inserted_ids.push(id);
                    receipt.rows_affected += 1;
                }
                StagedChange::Modify(product) => {
                    if self.products.contains_key(&product.id) {
                        self.products.insert(product.id, product);
                        receipt.rows_affected += 1;
                    }
                }
                StagedChange::Remove(id) => {
                    if self.products.remove(&id).is_some() {
                        receipt.rows_affected += 1;
                    }
                }
            }
        }

        debug!(rows_affected = receipt.rows_affected, "session committed");
        Ok(receipt)
    }

    fn rollback(&mut self) {
        if !self.staged.is_empty() {
            debug!(discarded = self.staged.len(), "session rolled back");
        }
        self.staged.clear();
    }

    fn has_staged_changes(&self) -> bool {
        !self.staged.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn draft(name: &str) -> Product {
        Product::draft(
            name,
            SupplierId::new(1),
            CategoryId::new(1),
            "12 units",
            dec!(5.00),
        )
    }

    fn seeded() -> MemoryCatalog {
        let mut store = MemoryCatalog::new();
        store.seed_supplier(Supplier::new(SupplierId::new(1), "Acme Foods"));
        store.seed_category(Category::new(CategoryId::new(1), "Beverages"));
        store
    }

    #[test]
    fn insert_commit_assigns_sequential_ids() {
        let mut store = seeded();
        store.stage(StagedChange::Insert(draft("One"))).unwrap();
        store.stage(StagedChange::Insert(draft("Two"))).unwrap();

        let receipt = store.commit().unwrap();
        assert_eq!(receipt.rows_affected, 2);
        assert_eq!(
            receipt.inserted_ids,
            vec![ProductId::new(1), ProductId::new(2)]
        );

        let persisted = store.persisted_products();
        assert_eq!(persisted.len(), 2);
        assert!(persisted.iter().all(|p| p.is_persisted()));
    }

    #[test]
    fn seeding_advances_the_id_sequence() {
        let mut store = seeded();
        let mut existing = draft("Existing");
        existing.id = ProductId::new(10);
        store.seed_product(existing);

        store.stage(StagedChange::Insert(draft("New"))).unwrap();
        let receipt = store.commit().unwrap();
        assert_eq!(receipt.inserted_ids, vec![ProductId::new(11)]);
    }

    #[test]
    fn staged_changes_are_invisible_to_reads() {
        let mut store = seeded();
        store.stage(StagedChange::Insert(draft("Pending"))).unwrap();

        assert!(store.has_staged_changes());
        assert!(store.products().unwrap().is_empty());
        assert!(
            !store
                .product_exists(&|p: &Product| p.name == "Pending")
                .unwrap()
        );
    }

    #[test]
    fn rollback_discards_staged_changes() {
        let mut store = seeded();
        store.stage(StagedChange::Insert(draft("Doomed"))).unwrap();
        store.rollback();

        assert!(!store.has_staged_changes());
        let receipt = store.commit().unwrap();
        assert_eq!(receipt.rows_affected, 0);
        assert!(store.persisted_products().is_empty());
    }

    #[test]
    fn modify_replaces_the_full_record() {
        let mut store = seeded();
        let mut product = draft("Initial");
        product.id = ProductId::new(5);
        store.seed_product(product.clone());

        product.name = "Renamed".to_string();
        product.discontinued = true;
        store.stage(StagedChange::Modify(product)).unwrap();
        let receipt = store.commit().unwrap();

        assert_eq!(receipt.rows_affected, 1);
        let stored = store.product_by_id(ProductId::new(5)).unwrap().unwrap();
        assert_eq!(stored.name, "Renamed");
        assert!(stored.discontinued);
    }

    #[test]
    fn remove_deletes_exactly_one_row() {
        let mut store = seeded();
        let mut product = draft("Target");
        product.id = ProductId::new(3);
        store.seed_product(product);

        store.stage(StagedChange::Remove(ProductId::new(3))).unwrap();
        let receipt = store.commit().unwrap();
        assert_eq!(receipt.rows_affected, 1);
        assert!(store.product_by_id(ProductId::new(3)).unwrap().is_none());
    }

    #[test]
    fn scripted_commit_failure_leaves_persisted_state_untouched() {
        let mut store = seeded();
        store.stage(StagedChange::Insert(draft("Pending"))).unwrap();
        store.fail_next_commit(StoreError::Unavailable("connection dropped".into()));

        let err = store.commit().unwrap_err();
        assert_eq!(err, StoreError::Unavailable("connection dropped".into()));
        assert!(store.persisted_products().is_empty());
        // Changes are still pending until the caller rolls back.
        assert!(store.has_staged_changes());

        store.rollback();
        assert_eq!(store.commit().unwrap().rows_affected, 0);
    }

    #[test]
    fn scripted_stage_failure_stages_nothing() {
        let mut store = seeded();
        store.fail_next_stage(StoreError::InvalidStage("tracker rejected entity".into()));

        let err = store.stage(StagedChange::Insert(draft("Pending"))).unwrap_err();
        assert!(matches!(err, StoreError::InvalidStage(_)));
        assert!(!store.has_staged_changes());
    }

    #[test]
    fn listings_come_back_sorted_by_name() {
        let mut store = MemoryCatalog::new();
        store.seed_supplier(Supplier::new(SupplierId::new(1), "Zenith Goods"));
        store.seed_supplier(Supplier::new(SupplierId::new(2), "Acme Foods"));
        store.seed_category(Category::new(CategoryId::new(1), "Seafood"));
        store.seed_category(Category::new(CategoryId::new(2), "Beverages"));

        let suppliers = store.suppliers().unwrap();
        assert_eq!(suppliers[0].company_name, "Acme Foods");
        assert_eq!(suppliers[1].company_name, "Zenith Goods");

        let categories = store.categories().unwrap();
        assert_eq!(categories[0].category_name, "Beverages");
        assert_eq!(categories[1].category_name, "Seafood");
    }

    #[test]
    fn dependent_row_counts_are_per_product() {
        let mut store = seeded();
        let target = ProductId::new(12);
        let other = ProductId::new(13);
        store.seed_manifest_item(ManifestItem {
            id: 1,
            product_id: target,
            quantity: 4,
        });
        store.seed_manifest_item(ManifestItem {
            id: 2,
            product_id: target,
            quantity: 1,
        });
        store.seed_order_detail(OrderDetail {
            id: 1,
            product_id: other,
            quantity: 9,
        });

        assert_eq!(store.manifest_item_count_for(target).unwrap(), 2);
        assert_eq!(store.order_detail_count_for(target).unwrap(), 0);
        assert_eq!(store.order_detail_count_for(other).unwrap(), 1);
    }
}
