//! Surgical item catalog entry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use steritrack_core::{DomainError, DomainResult, Entity, ItemId, UserId};

/// A catalog item (e.g. a scalpel, a clamp) referenced by stock records,
/// tray compositions, usages and order lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    name: String,
    created_at: DateTime<Utc>,
    created_by: UserId,
}

impl Item {
    pub fn new(id: ItemId, name: impl Into<String>, actor: UserId) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("item name cannot be empty"));
        }
        Ok(Self {
            id,
            name,
            created_at: Utc::now(),
            created_by: actor,
        })
    }

    pub fn id_typed(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn created_by(&self) -> UserId {
        self.created_by
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
