//! Allocation orchestrator: create/update/delete allocations and trigger
//! replenishment.

use steritrack_catalog::CatalogDirectory;
use steritrack_core::{AllocationId, DomainError, ProcedureId, TrayId, UserId};
use steritrack_inventory::{ReplenishmentEngine, ReplenishmentReport};
use steritrack_stock::StockStore;

use crate::error::ProcedureError;
use crate::log::ProcedureLog;
use crate::records::Allocation;

/// Creates and maintains allocations.
///
/// Replenishment is an event of allocation *creation* only: the engine runs
/// once, after the allocation is persisted, iff the flag is set. Updates
/// never re-trigger it (a deliberate top-up goes through the engine
/// directly).
#[derive(Debug, Clone)]
pub struct AllocationOrchestrator<S, C, L> {
    engine: ReplenishmentEngine<S, C>,
    catalog: C,
    log: L,
}

impl<S, C, L> AllocationOrchestrator<S, C, L>
where
    S: StockStore,
    C: CatalogDirectory + Clone,
    L: ProcedureLog,
{
    pub fn new(store: S, catalog: C, log: L) -> Self {
        Self {
            engine: ReplenishmentEngine::new(store, catalog.clone()),
            catalog,
            log,
        }
    }

    pub fn create_allocation(
        &self,
        procedure_id: ProcedureId,
        tray_id: TrayId,
        is_replenishment: bool,
        actor: UserId,
    ) -> Result<(Allocation, Option<ReplenishmentReport>), ProcedureError> {
        if self.log.procedure(procedure_id)?.is_none() {
            return Err(DomainError::NotFound.into());
        }
        if self.catalog.tray(tray_id)?.is_none() {
            return Err(DomainError::NotFound.into());
        }

        let allocation = Allocation::new(
            AllocationId::new(),
            procedure_id,
            tray_id,
            is_replenishment,
            actor,
        );
        self.log.insert_allocation(allocation.clone())?;
        tracing::info!(
            allocation = %allocation.id_typed(),
            procedure = %procedure_id,
            tray = %tray_id,
            is_replenishment,
            "allocation created"
        );

        let report = if is_replenishment {
            Some(self.engine.replenish_tray(tray_id, actor)?)
        } else {
            None
        };

        Ok((allocation, report))
    }

    /// Re-point an allocation at a different tray. Never re-triggers
    /// replenishment, regardless of the flag.
    pub fn update_allocation_tray(
        &self,
        allocation_id: AllocationId,
        tray_id: TrayId,
        actor: UserId,
    ) -> Result<Allocation, ProcedureError> {
        let mut allocation = self
            .log
            .allocation(allocation_id)?
            .ok_or(DomainError::NotFound)?;
        if self.catalog.tray(tray_id)?.is_none() {
            return Err(DomainError::NotFound.into());
        }

        allocation.reassign_tray(tray_id, actor);
        self.log.update_allocation(allocation.clone())?;
        tracing::info!(
            allocation = %allocation_id,
            tray = %tray_id,
            "allocation tray reassigned"
        );
        Ok(allocation)
    }

    /// Delete an allocation. Rejected with a conflict while usage entries
    /// reference it; consumption history is never cascade-deleted.
    pub fn delete_allocation(&self, allocation_id: AllocationId) -> Result<(), ProcedureError> {
        if self.log.allocation(allocation_id)?.is_none() {
            return Err(DomainError::NotFound.into());
        }
        let usages = self.log.usages_for(allocation_id)?;
        if !usages.is_empty() {
            return Err(DomainError::conflict(format!(
                "allocation {} has {} usage record(s)",
                allocation_id,
                usages.len()
            ))
            .into());
        }
        self.log.remove_allocation(allocation_id)?;
        tracing::info!(allocation = %allocation_id, "allocation deleted");
        Ok(())
    }
}
