//! Order receiving: persist the received line, credit central inventory.

use chrono::NaiveDate;
use thiserror::Error;

use steritrack_catalog::CatalogDirectory;
use steritrack_core::{DomainError, ItemId, OrderId, OrderItemId, UserId};
use steritrack_stock::{StockError, StockLocation, StockStore};

use crate::book::OrderBook;
use crate::order::{Order, OrderItem};

/// Failure of a purchasing operation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PurchasingError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Stock(#[from] StockError),
}

/// Receives supplier orders into central inventory.
///
/// Receipt is not idempotent: receiving the same logical shipment twice
/// double-credits. Duplicate suppression is the caller's concern.
#[derive(Debug, Clone)]
pub struct OrderReceiving<S, C, B> {
    store: S,
    catalog: C,
    book: B,
}

impl<S, C, B> OrderReceiving<S, C, B>
where
    S: StockStore,
    C: CatalogDirectory,
    B: OrderBook,
{
    pub fn new(store: S, catalog: C, book: B) -> Self {
        Self {
            store,
            catalog,
            book,
        }
    }

    /// Register the order header that line receipts will reference.
    pub fn create_order(
        &self,
        supplier: impl Into<String>,
        delivery_date: NaiveDate,
        actor: UserId,
    ) -> Result<Order, PurchasingError> {
        let order = Order::new(OrderId::new(), supplier, delivery_date, actor)?;
        self.book.insert_order(order.clone())?;
        tracing::info!(order = %order.id_typed(), supplier = order.supplier(), "order created");
        Ok(order)
    }

    /// Receive one line: persist the `OrderItem`, then credit central stock,
    /// creating the central record when none exists.
    pub fn receive_order_item(
        &self,
        order_id: OrderId,
        item_id: ItemId,
        quantity: u32,
        actor: UserId,
    ) -> Result<OrderItem, PurchasingError> {
        if self.book.order(order_id)?.is_none() {
            return Err(DomainError::NotFound.into());
        }
        if self.catalog.item(item_id)?.is_none() {
            return Err(DomainError::NotFound.into());
        }

        let line = OrderItem::new(OrderItemId::new(), order_id, item_id, quantity, actor)?;
        self.book.insert_line(line.clone())?;
        self.store
            .credit(item_id, StockLocation::Central, quantity, actor)?;

        tracing::info!(
            order = %order_id,
            item = %item_id,
            quantity,
            "order line received into central inventory"
        );
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use steritrack_catalog::{InMemoryCatalog, Item};
    use steritrack_stock::InMemoryStockStore;

    use super::*;

    struct Fixture {
        store: Arc<InMemoryStockStore>,
        book: Arc<InMemoryOrderBook>,
        receiving: OrderReceiving<
            Arc<InMemoryStockStore>,
            Arc<InMemoryCatalog>,
            Arc<InMemoryOrderBook>,
        >,
        item: ItemId,
        user: UserId,
    }

    use crate::book::InMemoryOrderBook;

    fn fixture() -> Fixture {
        let store = Arc::new(InMemoryStockStore::new());
        let catalog = Arc::new(InMemoryCatalog::new());
        let book = Arc::new(InMemoryOrderBook::new());
        let item = ItemId::new();
        let user = UserId::new();
        catalog
            .register_item(Item::new(item, "Retractor", user).unwrap())
            .unwrap();
        let receiving = OrderReceiving::new(store.clone(), catalog, book.clone());
        Fixture {
            store,
            book,
            receiving,
            item,
            user,
        }
    }

    fn delivery() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 9, 1).unwrap()
    }

    #[test]
    fn receipt_creates_central_record_when_absent() {
        let fx = fixture();
        let order = fx.receiving.create_order("MedSupply", delivery(), fx.user).unwrap();

        let line = fx
            .receiving
            .receive_order_item(order.id_typed(), fx.item, 20, fx.user)
            .unwrap();

        assert_eq!(line.quantity(), 20);
        assert_eq!(
            fx.store.quantity(fx.item, StockLocation::Central).unwrap(),
            20
        );
        assert_eq!(fx.book.lines_for(order.id_typed()).unwrap().len(), 1);
    }

    #[test]
    fn repeated_receipt_double_credits() {
        let fx = fixture();
        let order = fx.receiving.create_order("MedSupply", delivery(), fx.user).unwrap();

        fx.receiving
            .receive_order_item(order.id_typed(), fx.item, 5, fx.user)
            .unwrap();
        fx.receiving
            .receive_order_item(order.id_typed(), fx.item, 5, fx.user)
            .unwrap();

        assert_eq!(
            fx.store.quantity(fx.item, StockLocation::Central).unwrap(),
            10
        );
    }

    #[test]
    fn unknown_order_is_not_found() {
        let fx = fixture();
        let err = fx
            .receiving
            .receive_order_item(OrderId::new(), fx.item, 5, fx.user)
            .unwrap_err();
        assert_eq!(err, PurchasingError::Domain(DomainError::NotFound));
    }

    #[test]
    fn unknown_item_is_not_found() {
        let fx = fixture();
        let order = fx.receiving.create_order("MedSupply", delivery(), fx.user).unwrap();
        let err = fx
            .receiving
            .receive_order_item(order.id_typed(), ItemId::new(), 5, fx.user)
            .unwrap_err();
        assert_eq!(err, PurchasingError::Domain(DomainError::NotFound));
    }

    #[test]
    fn zero_quantity_is_rejected_without_persisting() {
        let fx = fixture();
        let order = fx.receiving.create_order("MedSupply", delivery(), fx.user).unwrap();

        let err = fx
            .receiving
            .receive_order_item(order.id_typed(), fx.item, 0, fx.user)
            .unwrap_err();

        assert!(matches!(
            err,
            PurchasingError::Domain(DomainError::Validation(_))
        ));
        assert!(fx.book.lines_for(order.id_typed()).unwrap().is_empty());
        assert_eq!(
            fx.store.quantity(fx.item, StockLocation::Central).unwrap(),
            0
        );
    }
}
