//! `stockroom-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod entity;
pub mod id;
pub mod violation;

pub use entity::Entity;
pub use id::{CategoryId, ProductId, SupplierId};
pub use violation::{Violation, ViolationCode, ViolationReport};
