use serde::{Deserialize, Serialize};

use stockroom_core::{CategoryId, Entity};

/// Category row: referenced by products, never created by the maintenance
/// pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub category_name: String,
    pub description: Option<String>,
}

impl Category {
    pub fn new(id: CategoryId, category_name: impl Into<String>) -> Self {
        Self {
            id,
            category_name: category_name.into(),
            description: None,
        }
    }
}

impl Entity for Category {
    type Id = CategoryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
