//! In-memory stock store.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Utc;

use steritrack_core::{ItemId, UserId};

use crate::location::StockLocation;
use crate::op::{StockError, StockOp, StockResult};
use crate::record::StockRecord;
use crate::store::StockStore;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
struct StockKey {
    item: ItemId,
    location: StockLocation,
}

/// In-memory keyed counter store.
///
/// The write lock is held across an entire `apply`, so concurrent batches are
/// linearized: each debit observes the effect of all batches committed before
/// it, and a lost-update race between two debits is impossible.
#[derive(Debug, Default)]
pub struct InMemoryStockStore {
    records: RwLock<HashMap<StockKey, StockRecord>>,
}

impl InMemoryStockStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the batch against current state and return the resulting
    /// quantities, without mutating anything.
    fn stage(
        records: &HashMap<StockKey, StockRecord>,
        ops: &[StockOp],
    ) -> StockResult<HashMap<StockKey, u32>> {
        let mut staged: HashMap<StockKey, u32> = HashMap::new();

        for op in ops {
            if op.amount() == 0 {
                return Err(StockError::InvalidOp(format!(
                    "zero amount for {} at {}",
                    op.item(),
                    op.location()
                )));
            }

            let key = StockKey {
                item: op.item(),
                location: op.location(),
            };
            let current = *staged
                .entry(key)
                .or_insert_with(|| records.get(&key).map(|r| r.quantity).unwrap_or(0));

            let next = match op {
                StockOp::Credit { amount, .. } => {
                    current
                        .checked_add(*amount)
                        .ok_or(StockError::Overflow {
                            item: key.item,
                            location: key.location,
                        })?
                }
                StockOp::Debit { amount, .. } => {
                    if *amount > current {
                        return Err(StockError::InsufficientStock {
                            item: key.item,
                            location: key.location,
                            requested: *amount,
                            available: current,
                        });
                    }
                    current - amount
                }
            };

            staged.insert(key, next);
        }

        Ok(staged)
    }
}

impl StockStore for InMemoryStockStore {
    fn quantity(&self, item: ItemId, location: StockLocation) -> StockResult<u32> {
        let records = self
            .records
            .read()
            .map_err(|_| StockError::Unavailable("lock poisoned".to_string()))?;
        Ok(records
            .get(&StockKey { item, location })
            .map(|r| r.quantity)
            .unwrap_or(0))
    }

    fn record(&self, item: ItemId, location: StockLocation) -> StockResult<Option<StockRecord>> {
        let records = self
            .records
            .read()
            .map_err(|_| StockError::Unavailable("lock poisoned".to_string()))?;
        Ok(records.get(&StockKey { item, location }).cloned())
    }

    fn apply(&self, ops: &[StockOp], actor: UserId) -> StockResult<()> {
        if ops.is_empty() {
            return Ok(());
        }

        let mut records = self
            .records
            .write()
            .map_err(|_| StockError::Unavailable("lock poisoned".to_string()))?;

        // Validate the whole batch first; nothing is written on failure.
        let staged = Self::stage(&records, ops)?;

        let now = Utc::now();
        for (key, quantity) in staged {
            match records.entry(key) {
                std::collections::hash_map::Entry::Occupied(mut e) => {
                    let record = e.get_mut();
                    record.quantity = quantity;
                    record.updated_at = now;
                    record.updated_by = Some(actor);
                }
                std::collections::hash_map::Entry::Vacant(e) => {
                    e.insert(StockRecord {
                        item: key.item,
                        location: key.location,
                        quantity,
                        created_at: now,
                        created_by: actor,
                        updated_at: now,
                        updated_by: None,
                    });
                }
            }
        }

        Ok(())
    }

    fn list(&self) -> StockResult<Vec<StockRecord>> {
        let records = self
            .records
            .read()
            .map_err(|_| StockError::Unavailable("lock poisoned".to_string()))?;
        Ok(records.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use proptest::prelude::*;

    use super::*;

    fn actor() -> UserId {
        UserId::new()
    }

    fn tray_location() -> StockLocation {
        StockLocation::Tray(steritrack_core::TrayId::new())
    }

    #[test]
    fn credit_creates_record_with_amount() {
        let store = InMemoryStockStore::new();
        let item = ItemId::new();
        let user = actor();

        store.credit(item, StockLocation::Central, 12, user).unwrap();

        assert_eq!(store.quantity(item, StockLocation::Central).unwrap(), 12);
        let record = store.record(item, StockLocation::Central).unwrap().unwrap();
        assert_eq!(record.created_by, user);
        assert_eq!(record.updated_by, None);
    }

    #[test]
    fn credit_accumulates_and_stamps_updater() {
        let store = InMemoryStockStore::new();
        let item = ItemId::new();
        let creator = actor();
        let updater = actor();

        store.credit(item, StockLocation::Central, 5, creator).unwrap();
        store.credit(item, StockLocation::Central, 7, updater).unwrap();

        let record = store.record(item, StockLocation::Central).unwrap().unwrap();
        assert_eq!(record.quantity, 12);
        assert_eq!(record.created_by, creator);
        assert_eq!(record.updated_by, Some(updater));
    }

    #[test]
    fn debit_below_zero_fails_and_leaves_record_unchanged() {
        let store = InMemoryStockStore::new();
        let item = ItemId::new();
        store.credit(item, StockLocation::Central, 5, actor()).unwrap();

        let err = store
            .debit(item, StockLocation::Central, 6, actor())
            .unwrap_err();
        match err {
            StockError::InsufficientStock {
                requested,
                available,
                ..
            } => {
                assert_eq!(requested, 6);
                assert_eq!(available, 5);
            }
            other => panic!("expected InsufficientStock, got {other:?}"),
        }

        assert_eq!(store.quantity(item, StockLocation::Central).unwrap(), 5);
    }

    #[test]
    fn debit_missing_record_reports_zero_available() {
        let store = InMemoryStockStore::new();
        let err = store
            .debit(ItemId::new(), StockLocation::Central, 1, actor())
            .unwrap_err();
        assert!(matches!(
            err,
            StockError::InsufficientStock { available: 0, .. }
        ));
    }

    #[test]
    fn zero_amount_is_rejected() {
        let store = InMemoryStockStore::new();
        let err = store
            .credit(ItemId::new(), StockLocation::Central, 0, actor())
            .unwrap_err();
        assert!(matches!(err, StockError::InvalidOp(_)));
    }

    #[test]
    fn batch_is_all_or_nothing() {
        let store = InMemoryStockStore::new();
        let item = ItemId::new();
        let tray = tray_location();
        store.credit(item, StockLocation::Central, 10, actor()).unwrap();

        // First debit alone would succeed; the second cannot, so neither applies.
        let err = store
            .apply(
                &[
                    StockOp::Debit {
                        item,
                        location: StockLocation::Central,
                        amount: 4,
                    },
                    StockOp::Debit {
                        item,
                        location: tray,
                        amount: 1,
                    },
                ],
                actor(),
            )
            .unwrap_err();
        assert!(matches!(err, StockError::InsufficientStock { .. }));

        assert_eq!(store.quantity(item, StockLocation::Central).unwrap(), 10);
        assert_eq!(store.quantity(item, tray).unwrap(), 0);
    }

    #[test]
    fn debits_within_a_batch_observe_earlier_credits() {
        let store = InMemoryStockStore::new();
        let item = ItemId::new();

        store
            .apply(
                &[
                    StockOp::Credit {
                        item,
                        location: StockLocation::Central,
                        amount: 3,
                    },
                    StockOp::Debit {
                        item,
                        location: StockLocation::Central,
                        amount: 2,
                    },
                ],
                actor(),
            )
            .unwrap();

        assert_eq!(store.quantity(item, StockLocation::Central).unwrap(), 1);
    }

    #[test]
    fn transfer_pair_moves_stock_between_locations() {
        let store = InMemoryStockStore::new();
        let item = ItemId::new();
        let tray = tray_location();
        store.credit(item, StockLocation::Central, 8, actor()).unwrap();

        store
            .apply(
                &[
                    StockOp::Debit {
                        item,
                        location: StockLocation::Central,
                        amount: 3,
                    },
                    StockOp::Credit {
                        item,
                        location: tray,
                        amount: 3,
                    },
                ],
                actor(),
            )
            .unwrap();

        assert_eq!(store.quantity(item, StockLocation::Central).unwrap(), 5);
        assert_eq!(store.quantity(item, tray).unwrap(), 3);
    }

    #[test]
    fn concurrent_debits_linearize() {
        let store = Arc::new(InMemoryStockStore::new());
        let item = ItemId::new();
        store.credit(item, StockLocation::Central, 10, actor()).unwrap();

        // 8 threads each try to debit 3; only 3 can succeed (10 / 3).
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = store.clone();
                std::thread::spawn(move || {
                    store
                        .debit(item, StockLocation::Central, 3, UserId::new())
                        .is_ok()
                })
            })
            .collect();

        let successes = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();

        assert_eq!(successes, 3);
        assert_eq!(store.quantity(item, StockLocation::Central).unwrap(), 1);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: after any sequence of single-op applies, the stored
        /// quantity equals a straightforward saturating model fold and is
        /// never negative (a failed debit changes nothing).
        #[test]
        fn store_matches_model_under_arbitrary_ops(
            ops in prop::collection::vec((any::<bool>(), 1u32..100), 0..64)
        ) {
            let store = InMemoryStockStore::new();
            let item = ItemId::new();
            let user = UserId::new();
            let mut model: u64 = 0;

            for (is_credit, amount) in ops {
                if is_credit {
                    store.credit(item, StockLocation::Central, amount, user).unwrap();
                    model += u64::from(amount);
                } else {
                    let result = store.debit(item, StockLocation::Central, amount, user);
                    if u64::from(amount) <= model {
                        prop_assert!(result.is_ok());
                        model -= u64::from(amount);
                    } else {
                        prop_assert!(
                            matches!(result, Err(StockError::InsufficientStock { .. })),
                            "expected InsufficientStock, got {:?}",
                            result
                        );
                    }
                }

                prop_assert_eq!(
                    u64::from(store.quantity(item, StockLocation::Central).unwrap()),
                    model
                );
            }
        }
    }
}
