//! Usage recorder: atomic dual debit, then persist.

use steritrack_catalog::CatalogDirectory;
use steritrack_core::{AllocationId, DomainError, ItemId, UsageId, UserId};
use steritrack_stock::{StockLocation, StockOp, StockStore};

use crate::error::ProcedureError;
use crate::log::ProcedureLog;
use crate::records::Usage;

/// Records consumption of an item against an allocation.
///
/// The tray and central debits run as one atomic batch before the usage
/// record is persisted: insufficiency of either debit fails the whole
/// operation and persists nothing.
#[derive(Debug, Clone)]
pub struct UsageRecorder<S, C, L> {
    store: S,
    catalog: C,
    log: L,
}

impl<S, C, L> UsageRecorder<S, C, L>
where
    S: StockStore,
    C: CatalogDirectory,
    L: ProcedureLog,
{
    pub fn new(store: S, catalog: C, log: L) -> Self {
        Self {
            store,
            catalog,
            log,
        }
    }

    pub fn record_usage(
        &self,
        allocation_id: AllocationId,
        item_id: ItemId,
        quantity: u32,
        actor: UserId,
    ) -> Result<Usage, ProcedureError> {
        let allocation = self
            .log
            .allocation(allocation_id)?
            .ok_or(DomainError::NotFound)?;
        if self.catalog.item(item_id)?.is_none() {
            return Err(DomainError::NotFound.into());
        }

        // Validates quantity > 0 before any stock is touched.
        let usage = Usage::new(UsageId::new(), allocation_id, item_id, quantity, actor)?;

        let tray_id = allocation.tray_id();
        let debits = [
            StockOp::Debit {
                item: item_id,
                location: StockLocation::Tray(tray_id),
                amount: quantity,
            },
            StockOp::Debit {
                item: item_id,
                location: StockLocation::Central,
                amount: quantity,
            },
        ];
        if let Err(e) = self.store.apply(&debits, actor) {
            tracing::warn!(
                allocation = %allocation_id,
                item = %item_id,
                quantity,
                error = %e,
                "usage rejected"
            );
            return Err(e.into());
        }

        self.log.insert_usage(usage.clone())?;
        tracing::info!(
            allocation = %allocation_id,
            tray = %tray_id,
            item = %item_id,
            quantity,
            "usage recorded"
        );
        Ok(usage)
    }
}
