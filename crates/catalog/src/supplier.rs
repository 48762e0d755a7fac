use serde::{Deserialize, Serialize};

use stockroom_core::{Entity, SupplierId};

/// Supplier row: referenced by products, never created by the maintenance
/// pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: SupplierId,
    pub company_name: String,
    pub contact_name: Option<String>,
    pub phone: Option<String>,
}

impl Supplier {
    pub fn new(id: SupplierId, company_name: impl Into<String>) -> Self {
        Self {
            id,
            company_name: company_name.into(),
            contact_name: None,
            phone: None,
        }
    }
}

impl Entity for Supplier {
    type Id = SupplierId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
