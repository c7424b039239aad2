//! Thin inventory managers scoped by location kind.
//!
//! No cross-tray aggregation lives here; that belongs to reporting.

use steritrack_core::{ItemId, TrayId, UserId};
use steritrack_stock::{StockLocation, StockResult, StockStore};

/// Per-tray item counts.
#[derive(Debug, Clone)]
pub struct TrayInventory<S> {
    store: S,
}

impl<S: StockStore> TrayInventory<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Pure read; no side effects.
    pub fn quantity_of(&self, tray: TrayId, item: ItemId) -> StockResult<u32> {
        self.store.quantity(item, StockLocation::Tray(tray))
    }

    pub fn credit(&self, tray: TrayId, item: ItemId, amount: u32, actor: UserId) -> StockResult<()> {
        self.store.credit(item, StockLocation::Tray(tray), amount, actor)
    }

    pub fn debit(&self, tray: TrayId, item: ItemId, amount: u32, actor: UserId) -> StockResult<()> {
        self.store.debit(item, StockLocation::Tray(tray), amount, actor)
    }
}

/// Facility-wide item counts: sourced by order receipt, drained by
/// replenishment and usage recording.
#[derive(Debug, Clone)]
pub struct CentralInventory<S> {
    store: S,
}

impl<S: StockStore> CentralInventory<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Pure read; no side effects.
    pub fn quantity_of(&self, item: ItemId) -> StockResult<u32> {
        self.store.quantity(item, StockLocation::Central)
    }

    /// Credit central stock, creating the record when absent (order receipt).
    pub fn credit(&self, item: ItemId, amount: u32, actor: UserId) -> StockResult<()> {
        self.store.credit(item, StockLocation::Central, amount, actor)
    }

    pub fn debit(&self, item: ItemId, amount: u32, actor: UserId) -> StockResult<()> {
        self.store.debit(item, StockLocation::Central, amount, actor)
    }
}
