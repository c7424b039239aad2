//! Procedure/allocation/usage record storage.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use steritrack_core::{AllocationId, DomainError, DomainResult, ProcedureId, UsageId};

use crate::records::{Allocation, Procedure, Usage};

/// Keyed storage for procedures, allocations, and usage entries.
pub trait ProcedureLog: Send + Sync {
    fn procedure(&self, id: ProcedureId) -> DomainResult<Option<Procedure>>;
    fn register_procedure(&self, procedure: Procedure) -> DomainResult<()>;

    fn allocation(&self, id: AllocationId) -> DomainResult<Option<Allocation>>;
    fn insert_allocation(&self, allocation: Allocation) -> DomainResult<()>;
    /// Replace an existing allocation (tray reassignment); NotFound when absent.
    fn update_allocation(&self, allocation: Allocation) -> DomainResult<()>;
    fn remove_allocation(&self, id: AllocationId) -> DomainResult<()>;

    fn insert_usage(&self, usage: Usage) -> DomainResult<()>;
    fn usages_for(&self, allocation_id: AllocationId) -> DomainResult<Vec<Usage>>;
}

impl<S> ProcedureLog for Arc<S>
where
    S: ProcedureLog + ?Sized,
{
    fn procedure(&self, id: ProcedureId) -> DomainResult<Option<Procedure>> {
        (**self).procedure(id)
    }

    fn register_procedure(&self, procedure: Procedure) -> DomainResult<()> {
        (**self).register_procedure(procedure)
    }

    fn allocation(&self, id: AllocationId) -> DomainResult<Option<Allocation>> {
        (**self).allocation(id)
    }

    fn insert_allocation(&self, allocation: Allocation) -> DomainResult<()> {
        (**self).insert_allocation(allocation)
    }

    fn update_allocation(&self, allocation: Allocation) -> DomainResult<()> {
        (**self).update_allocation(allocation)
    }

    fn remove_allocation(&self, id: AllocationId) -> DomainResult<()> {
        (**self).remove_allocation(id)
    }

    fn insert_usage(&self, usage: Usage) -> DomainResult<()> {
        (**self).insert_usage(usage)
    }

    fn usages_for(&self, allocation_id: AllocationId) -> DomainResult<Vec<Usage>> {
        (**self).usages_for(allocation_id)
    }
}

/// In-memory procedure log for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryProcedureLog {
    procedures: RwLock<HashMap<ProcedureId, Procedure>>,
    allocations: RwLock<HashMap<AllocationId, Allocation>>,
    usages: RwLock<HashMap<UsageId, Usage>>,
}

impl InMemoryProcedureLog {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> DomainError {
    DomainError::invariant("procedure log lock poisoned")
}

impl ProcedureLog for InMemoryProcedureLog {
    fn procedure(&self, id: ProcedureId) -> DomainResult<Option<Procedure>> {
        let procedures = self.procedures.read().map_err(|_| poisoned())?;
        Ok(procedures.get(&id).cloned())
    }

    fn register_procedure(&self, procedure: Procedure) -> DomainResult<()> {
        let mut procedures = self.procedures.write().map_err(|_| poisoned())?;
        if procedures.contains_key(&procedure.id_typed()) {
            return Err(DomainError::conflict(format!(
                "procedure {} already registered",
                procedure.id_typed()
            )));
        }
        procedures.insert(procedure.id_typed(), procedure);
        Ok(())
    }

    fn allocation(&self, id: AllocationId) -> DomainResult<Option<Allocation>> {
        let allocations = self.allocations.read().map_err(|_| poisoned())?;
        Ok(allocations.get(&id).cloned())
    }

    fn insert_allocation(&self, allocation: Allocation) -> DomainResult<()> {
        let mut allocations = self.allocations.write().map_err(|_| poisoned())?;
        if allocations.contains_key(&allocation.id_typed()) {
            return Err(DomainError::conflict(format!(
                "allocation {} already exists",
                allocation.id_typed()
            )));
        }
        allocations.insert(allocation.id_typed(), allocation);
        Ok(())
    }

    fn update_allocation(&self, allocation: Allocation) -> DomainResult<()> {
        let mut allocations = self.allocations.write().map_err(|_| poisoned())?;
        if !allocations.contains_key(&allocation.id_typed()) {
            return Err(DomainError::NotFound);
        }
        allocations.insert(allocation.id_typed(), allocation);
        Ok(())
    }

    fn remove_allocation(&self, id: AllocationId) -> DomainResult<()> {
        let mut allocations = self.allocations.write().map_err(|_| poisoned())?;
        if allocations.remove(&id).is_none() {
            return Err(DomainError::NotFound);
        }
        Ok(())
    }

    fn insert_usage(&self, usage: Usage) -> DomainResult<()> {
        let mut usages = self.usages.write().map_err(|_| poisoned())?;
        if usages.contains_key(&usage.id_typed()) {
            return Err(DomainError::conflict(format!(
                "usage {} already exists",
                usage.id_typed()
            )));
        }
        usages.insert(usage.id_typed(), usage);
        Ok(())
    }

    fn usages_for(&self, allocation_id: AllocationId) -> DomainResult<Vec<Usage>> {
        let usages = self.usages.read().map_err(|_| poisoned())?;
        Ok(usages
            .values()
            .filter(|u| u.allocation_id() == allocation_id)
            .cloned()
            .collect())
    }
}
