//! Structured violation records and the aggregate report.
//!
//! A maintenance operation never reports data problems one at a time: every
//! violation found in a pass is collected into a single ordered report so the
//! caller can show the user the complete picture at once. Callers branch on
//! [`ViolationCode`] rather than parsing messages.

use serde::{Deserialize, Serialize};

/// Stable machine-readable code identifying one violated rule.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationCode {
    NameRequired,
    NameTooLong,
    CategoryIdRange,
    SupplierIdRange,
    QuantityPerUnitRequired,
    QuantityPerUnitTooLong,
    UnitPriceRange,
    UnitsOnOrderRange,
    SupplierNotFound,
    CategoryNotFound,
    DuplicateProduct,
    ManifestItemsExist,
    OrderDetailsExist,
    YearOutOfRange,
    MonthOutOfRange,
}

/// One violation discovered during validation or rule checking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub code: ViolationCode,
    pub message: String,
}

impl Violation {
    pub fn new(code: ViolationCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl core::fmt::Display for Violation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Ordered, complete set of violations discovered in one pass.
///
/// Non-empty by construction: an empty collection means the pass succeeded and
/// no report exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViolationReport {
    entries: Vec<Violation>,
}

impl ViolationReport {
    /// Wrap a collected set of violations. Returns `None` when the set is
    /// empty (nothing to report).
    pub fn from_entries(entries: Vec<Violation>) -> Option<Self> {
        if entries.is_empty() {
            None
        } else {
            Some(Self { entries })
        }
    }

    pub fn entries(&self) -> &[Violation] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, code: ViolationCode) -> bool {
        self.entries.iter().any(|v| v.code == code)
    }

    /// User-facing lines, one per violation, in discovery order.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|v| v.message.as_str())
    }
}

impl core::fmt::Display for ViolationReport {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (idx, entry) in self.entries.iter().enumerate() {
            if idx > 0 {
                f.write_str("; ")?;
            }
            f.write_str(&entry.message)?;
        }
        Ok(())
    }
}

impl IntoIterator for ViolationReport {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
