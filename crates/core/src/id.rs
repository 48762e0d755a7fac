//! Strongly-typed row identifiers used across the catalog.
//!
//! The persistence backend assigns identities as positive integers. A value of
//! zero means "not yet persisted" — the store backfills the real id at commit.

use serde::{Deserialize, Serialize};

/// Identifier of a product row.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i32);

/// Identifier of a supplier row.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SupplierId(i32);

/// Identifier of a category row.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(i32);

macro_rules! impl_row_id {
    ($t:ty) => {
        impl $t {
            /// Sentinel identity of a record the store has not persisted yet.
            pub const UNASSIGNED: Self = Self(0);

            pub const fn new(raw: i32) -> Self {
                Self(raw)
            }

            pub const fn get(self) -> i32 {
                self.0
            }

            /// Whether the store has assigned this identity (positive row id).
            pub const fn is_assigned(self) -> bool {
                self.0 > 0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl Default for $t {
            fn default() -> Self {
                Self::UNASSIGNED
            }
        }

        impl From<i32> for $t {
            fn from(value: i32) -> Self {
                Self(value)
            }
        }

        impl From<$t> for i32 {
            fn from(value: $t) -> Self {
                value.0
            }
        }
    };
}

impl_row_id!(ProductId);
impl_row_id!(SupplierId);
impl_row_id!(CategoryId);
