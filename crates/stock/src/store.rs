//! Stock store contract.

use std::sync::Arc;

use steritrack_core::{ItemId, UserId};

use crate::location::StockLocation;
use crate::op::{StockOp, StockResult};
use crate::record::StockRecord;

/// Keyed counter store: (item, location) → quantity.
///
/// `apply` is the transactional scope for multi-step mutations: the whole
/// batch commits or none of it does, and concurrent batches against the same
/// key are linearized. Every higher component (replenishment, usage
/// recording, order receiving) mutates stock exclusively through this trait.
pub trait StockStore: Send + Sync {
    /// Current quantity; 0 when no record exists.
    fn quantity(&self, item: ItemId, location: StockLocation) -> StockResult<u32>;

    /// Full record read (audit stamps included).
    fn record(&self, item: ItemId, location: StockLocation) -> StockResult<Option<StockRecord>>;

    /// Apply a batch of mutations atomically.
    ///
    /// Debits are validated against the state produced by the preceding ops in
    /// the batch; the first insufficiency fails the batch and no record
    /// changes. Credits create missing records with `created_by = actor`.
    fn apply(&self, ops: &[StockOp], actor: UserId) -> StockResult<()>;

    /// Snapshot of all records (reporting/tests).
    fn list(&self) -> StockResult<Vec<StockRecord>>;

    /// Single-op convenience: credit one counter.
    fn credit(
        &self,
        item: ItemId,
        location: StockLocation,
        amount: u32,
        actor: UserId,
    ) -> StockResult<()> {
        self.apply(
            &[StockOp::Credit {
                item,
                location,
                amount,
            }],
            actor,
        )
    }

    /// Single-op convenience: debit one counter.
    fn debit(
        &self,
        item: ItemId,
        location: StockLocation,
        amount: u32,
        actor: UserId,
    ) -> StockResult<()> {
        self.apply(
            &[StockOp::Debit {
                item,
                location,
                amount,
            }],
            actor,
        )
    }
}

impl<S> StockStore for Arc<S>
where
    S: StockStore + ?Sized,
{
    fn quantity(&self, item: ItemId, location: StockLocation) -> StockResult<u32> {
        (**self).quantity(item, location)
    }

    fn record(&self, item: ItemId, location: StockLocation) -> StockResult<Option<StockRecord>> {
        (**self).record(item, location)
    }

    fn apply(&self, ops: &[StockOp], actor: UserId) -> StockResult<()> {
        (**self).apply(ops, actor)
    }

    fn list(&self) -> StockResult<Vec<StockRecord>> {
        (**self).list()
    }
}
