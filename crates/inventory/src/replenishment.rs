//! Replenishment engine: restore a tray toward its nominal composition from
//! central stock.

use serde::{Deserialize, Serialize};

use steritrack_catalog::CatalogDirectory;
use steritrack_core::{ItemId, TrayId, UserId};
use steritrack_stock::{StockError, StockLocation, StockOp, StockStore};

use crate::error::InventoryError;

/// Outcome of replenishing one composition line.
///
/// `transferred < deficit` means the tray stayed short; that is reported, not
/// raised; there is no backorder mechanism at this layer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemReplenishment {
    pub item_id: ItemId,
    pub nominal: u32,
    pub deficit: u32,
    pub transferred: u32,
}

/// Per-item transfer report for one replenishment run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplenishmentReport {
    pub tray_id: TrayId,
    pub lines: Vec<ItemReplenishment>,
}

impl ReplenishmentReport {
    pub fn transferred_for(&self, item_id: ItemId) -> u32 {
        self.lines
            .iter()
            .find(|l| l.item_id == item_id)
            .map(|l| l.transferred)
            .unwrap_or(0)
    }

    pub fn total_transferred(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.transferred)).sum()
    }

    /// True when every line reached its nominal quantity.
    pub fn is_complete(&self) -> bool {
        self.lines.iter().all(|l| l.transferred == l.deficit)
    }
}

/// Transfers stock from central inventory into a tray, bounded by the tray
/// type's nominal quantities and by available central stock.
#[derive(Debug, Clone)]
pub struct ReplenishmentEngine<S, C> {
    store: S,
    catalog: C,
}

impl<S, C> ReplenishmentEngine<S, C>
where
    S: StockStore,
    C: CatalogDirectory,
{
    pub fn new(store: S, catalog: C) -> Self {
        Self { store, catalog }
    }

    /// Replenish every composition line of the tray's type.
    ///
    /// Per-item transfers are independent: shortage on one item never blocks
    /// the remaining items. Each transfer is a debit+credit pair applied as a
    /// single atomic batch.
    pub fn replenish_tray(
        &self,
        tray_id: TrayId,
        actor: UserId,
    ) -> Result<ReplenishmentReport, InventoryError> {
        let tray = self
            .catalog
            .tray(tray_id)?
            .ok_or_else(InventoryError::not_found)?;
        let tray_type = self
            .catalog
            .tray_type(tray.tray_type_id())?
            .ok_or_else(InventoryError::not_found)?;

        let mut lines = Vec::with_capacity(tray_type.composition().len());
        for line in tray_type.composition() {
            let current = self
                .store
                .quantity(line.item_id, StockLocation::Tray(tray_id))?;
            let deficit = line.nominal_quantity.saturating_sub(current);

            let transferred = if deficit == 0 {
                0
            } else {
                self.transfer(tray_id, line.item_id, deficit, actor)?
            };

            tracing::debug!(
                item = %line.item_id,
                tray = %tray_id,
                nominal = line.nominal_quantity,
                deficit,
                transferred,
                "replenishment line processed"
            );

            lines.push(ItemReplenishment {
                item_id: line.item_id,
                nominal: line.nominal_quantity,
                deficit,
                transferred,
            });
        }

        let report = ReplenishmentReport { tray_id, lines };
        tracing::info!(
            tray = %tray_id,
            transferred = report.total_transferred(),
            complete = report.is_complete(),
            "tray replenished"
        );
        Ok(report)
    }

    /// Move up to `deficit` units of one item from central into the tray.
    ///
    /// The availability read and the atomic pair can race with a concurrent
    /// central drain; on insufficiency the amount is re-derived from a fresh
    /// read. The attempted amount strictly decreases, so this terminates.
    fn transfer(
        &self,
        tray_id: TrayId,
        item_id: ItemId,
        deficit: u32,
        actor: UserId,
    ) -> Result<u32, InventoryError> {
        loop {
            let available = self.store.quantity(item_id, StockLocation::Central)?;
            let amount = deficit.min(available);
            if amount == 0 {
                return Ok(0);
            }

            let pair = [
                StockOp::Debit {
                    item: item_id,
                    location: StockLocation::Central,
                    amount,
                },
                StockOp::Credit {
                    item: item_id,
                    location: StockLocation::Tray(tray_id),
                    amount,
                },
            ];
            match self.store.apply(&pair, actor) {
                Ok(()) => return Ok(amount),
                Err(StockError::InsufficientStock { .. }) => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }
}
