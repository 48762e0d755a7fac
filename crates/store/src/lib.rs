//! `stockroom-store` — the entity-store collaborator contract.
//!
//! The maintenance pipeline never talks to a database directly: it consumes
//! [`CatalogReader`] for lookups and [`CatalogSession`] for the unit of work
//! (stage / commit / rollback). [`MemoryCatalog`] is the in-memory session
//! used by tests and dev; a SQL backend would implement the same traits.

pub mod change;
pub mod error;
pub mod memory;
pub mod session;

pub use change::{CommitReceipt, StagedChange};
pub use error::StoreError;
pub use memory::MemoryCatalog;
pub use session::{CatalogReader, CatalogSession};
