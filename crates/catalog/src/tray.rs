//! Tray types (nominal composition templates) and tray instances.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use steritrack_core::{DomainError, DomainResult, Entity, ItemId, TrayId, TrayTypeId, UserId, ValueObject};

/// One line of a tray type's nominal composition.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrayItem {
    pub item_id: ItemId,
    pub nominal_quantity: u32,
}

impl ValueObject for TrayItem {}

/// Template defining the nominal item composition of a tray.
///
/// A tray's actual contents (its stock records) may diverge from this:
/// depleted by usage, restored by replenishment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrayType {
    id: TrayTypeId,
    name: String,
    composition: Vec<TrayItem>,
    created_at: DateTime<Utc>,
    created_by: UserId,
}

impl TrayType {
    pub fn new(
        id: TrayTypeId,
        name: impl Into<String>,
        composition: Vec<TrayItem>,
        actor: UserId,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("tray type name cannot be empty"));
        }
        if composition.is_empty() {
            return Err(DomainError::validation(
                "tray type composition cannot be empty",
            ));
        }
        for (idx, line) in composition.iter().enumerate() {
            if line.nominal_quantity == 0 {
                return Err(DomainError::validation(format!(
                    "nominal quantity must be positive (line {idx})"
                )));
            }
            if composition[..idx].iter().any(|l| l.item_id == line.item_id) {
                return Err(DomainError::validation(format!(
                    "duplicate item {} in composition",
                    line.item_id
                )));
            }
        }
        Ok(Self {
            id,
            name,
            composition,
            created_at: Utc::now(),
            created_by: actor,
        })
    }

    pub fn id_typed(&self) -> TrayTypeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn composition(&self) -> &[TrayItem] {
        &self.composition
    }

    pub fn nominal_for(&self, item_id: ItemId) -> Option<u32> {
        self.composition
            .iter()
            .find(|l| l.item_id == item_id)
            .map(|l| l.nominal_quantity)
    }
}

impl Entity for TrayType {
    type Id = TrayTypeId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// A physical tray. Its type (and therefore nominal composition) is fixed at
/// registration; only its stock is mutable, and that lives in the stock store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tray {
    id: TrayId,
    tray_type_id: TrayTypeId,
    label: String,
    created_at: DateTime<Utc>,
    created_by: UserId,
}

impl Tray {
    pub fn new(
        id: TrayId,
        tray_type_id: TrayTypeId,
        label: impl Into<String>,
        actor: UserId,
    ) -> DomainResult<Self> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(DomainError::validation("tray label cannot be empty"));
        }
        Ok(Self {
            id,
            tray_type_id,
            label,
            created_at: Utc::now(),
            created_by: actor,
        })
    }

    pub fn id_typed(&self) -> TrayId {
        self.id
    }

    pub fn tray_type_id(&self) -> TrayTypeId {
        self.tray_type_id
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Entity for Tray {
    type Id = TrayId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
