use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use std::sync::Arc;

use steritrack_catalog::TrayItem;
use steritrack_core::{ItemId, UserId};
use steritrack_service::InventoryService;
use steritrack_stock::{InMemoryStockStore, StockLocation, StockOp, StockStore};

/// Single-op credit/debit against a warm store.
fn bench_single_ops(c: &mut Criterion) {
    let store = Arc::new(InMemoryStockStore::new());
    let item = ItemId::new();
    let user = UserId::new();
    store
        .credit(item, StockLocation::Central, 1_000_000, user)
        .unwrap();

    let mut group = c.benchmark_group("single_ops");
    group.bench_function("credit", |b| {
        b.iter(|| {
            store
                .credit(black_box(item), StockLocation::Central, 1, user)
                .unwrap()
        })
    });
    // Credit/debit pair keeps the counter level across arbitrarily many
    // iterations.
    group.bench_function("credit_debit_pair", |b| {
        b.iter(|| {
            store
                .credit(black_box(item), StockLocation::Central, 1, user)
                .unwrap();
            store
                .debit(black_box(item), StockLocation::Central, 1, user)
                .unwrap();
        })
    });
    group.finish();
}

/// Atomic batch apply at growing batch sizes.
fn bench_batch_apply(c: &mut Criterion) {
    let user = UserId::new();
    let mut group = c.benchmark_group("batch_apply");

    for size in [2usize, 8, 32, 128] {
        let store = Arc::new(InMemoryStockStore::new());
        let items: Vec<ItemId> = (0..size / 2).map(|_| ItemId::new()).collect();
        for &item in &items {
            store
                .credit(item, StockLocation::Central, 1_000_000, user)
                .unwrap();
        }
        // Debit/credit pairs: the batch is stock-neutral, so iterations
        // never drain the store.
        let batch: Vec<StockOp> = items
            .iter()
            .flat_map(|&item| {
                [
                    StockOp::Debit {
                        item,
                        location: StockLocation::Central,
                        amount: 1,
                    },
                    StockOp::Credit {
                        item,
                        location: StockLocation::Central,
                        amount: 1,
                    },
                ]
            })
            .collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &batch, |b, batch| {
            b.iter(|| store.apply(black_box(batch), user).unwrap())
        });
    }
    group.finish();
}

/// The full cycle the service runs per procedure: replenish, then use.
fn bench_service_cycle(c: &mut Criterion) {
    let service = InventoryService::new();
    let user = UserId::new();
    let item = service.register_item("Scalpel", user).unwrap();
    let tray_type = service
        .register_tray_type(
            "General Surgery",
            vec![TrayItem {
                item_id: item.id_typed(),
                nominal_quantity: 10,
            }],
            user,
        )
        .unwrap();
    let tray = service
        .register_tray(tray_type.id_typed(), "GS-01", user)
        .unwrap();
    let procedure = service.register_procedure("CASE-1", user).unwrap();
    let order = service
        .create_order("MedSupply GmbH", "2026-09-01".parse().unwrap(), user)
        .unwrap();
    service
        .receive_order_item(order.id_typed(), item.id_typed(), 100_000_000, user)
        .unwrap();

    c.bench_function("replenish_then_use", |b| {
        b.iter(|| {
            let (allocation, _) = service
                .create_allocation(procedure.id_typed(), tray.id_typed(), true, user)
                .unwrap();
            service
                .record_usage(allocation.id_typed(), item.id_typed(), 1, user)
                .unwrap();
        })
    });
}

criterion_group!(
    benches,
    bench_single_ops,
    bench_batch_apply,
    bench_service_cycle
);
criterion_main!(benches);
