//! Procedure, allocation and usage records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use steritrack_core::{
    AllocationId, DomainError, DomainResult, Entity, ItemId, ProcedureId, TrayId, UsageId, UserId,
};

/// A patient procedure that trays are allocated to. Patient demographics and
/// scheduling live upstream; the write path only needs the reference and a
/// case number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Procedure {
    id: ProcedureId,
    case_number: String,
    created_at: DateTime<Utc>,
    created_by: UserId,
}

impl Procedure {
    pub fn new(id: ProcedureId, case_number: impl Into<String>, actor: UserId) -> DomainResult<Self> {
        let case_number = case_number.into();
        if case_number.trim().is_empty() {
            return Err(DomainError::validation("case number cannot be empty"));
        }
        Ok(Self {
            id,
            case_number,
            created_at: Utc::now(),
            created_by: actor,
        })
    }

    pub fn id_typed(&self) -> ProcedureId {
        self.id
    }

    pub fn case_number(&self) -> &str {
        &self.case_number
    }
}

impl Entity for Procedure {
    type Id = ProcedureId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Assignment of a tray to a procedure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    id: AllocationId,
    procedure_id: ProcedureId,
    tray_id: TrayId,
    is_replenishment: bool,
    created_at: DateTime<Utc>,
    created_by: UserId,
    updated_at: DateTime<Utc>,
    updated_by: Option<UserId>,
}

impl Allocation {
    pub fn new(
        id: AllocationId,
        procedure_id: ProcedureId,
        tray_id: TrayId,
        is_replenishment: bool,
        actor: UserId,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            procedure_id,
            tray_id,
            is_replenishment,
            created_at: now,
            created_by: actor,
            updated_at: now,
            updated_by: None,
        }
    }

    pub fn id_typed(&self) -> AllocationId {
        self.id
    }

    pub fn procedure_id(&self) -> ProcedureId {
        self.procedure_id
    }

    pub fn tray_id(&self) -> TrayId {
        self.tray_id
    }

    pub fn is_replenishment(&self) -> bool {
        self.is_replenishment
    }

    pub fn created_by(&self) -> UserId {
        self.created_by
    }

    pub fn updated_by(&self) -> Option<UserId> {
        self.updated_by
    }

    /// Re-point the allocation at a different tray. Replenishment is an event
    /// of allocation creation only; reassignment never re-triggers it.
    pub fn reassign_tray(&mut self, tray_id: TrayId, actor: UserId) {
        self.tray_id = tray_id;
        self.updated_at = Utc::now();
        self.updated_by = Some(actor);
    }
}

impl Entity for Allocation {
    type Id = AllocationId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Recorded consumption of an item against an allocation.
///
/// Immutable once created: its stock side effects were applied exactly once
/// at creation; corrections require a compensating entry, not an edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    id: UsageId,
    allocation_id: AllocationId,
    item_id: ItemId,
    quantity: u32,
    created_at: DateTime<Utc>,
    created_by: UserId,
}

impl Usage {
    pub fn new(
        id: UsageId,
        allocation_id: AllocationId,
        item_id: ItemId,
        quantity: u32,
        actor: UserId,
    ) -> DomainResult<Self> {
        if quantity == 0 {
            return Err(DomainError::validation("usage quantity must be positive"));
        }
        Ok(Self {
            id,
            allocation_id,
            item_id,
            quantity,
            created_at: Utc::now(),
            created_by: actor,
        })
    }

    pub fn id_typed(&self) -> UsageId {
        self.id
    }

    pub fn allocation_id(&self) -> AllocationId {
        self.allocation_id
    }

    pub fn item_id(&self) -> ItemId {
        self.item_id
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn created_by(&self) -> UserId {
        self.created_by
    }
}

impl Entity for Usage {
    type Id = UsageId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
