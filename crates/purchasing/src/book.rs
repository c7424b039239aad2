//! Order record storage.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use steritrack_core::{DomainError, DomainResult, OrderId, OrderItemId};

use crate::order::{Order, OrderItem};

/// Keyed storage for orders and their received lines.
pub trait OrderBook: Send + Sync {
    fn order(&self, id: OrderId) -> DomainResult<Option<Order>>;
    fn insert_order(&self, order: Order) -> DomainResult<()>;
    fn insert_line(&self, line: OrderItem) -> DomainResult<()>;
    fn lines_for(&self, order_id: OrderId) -> DomainResult<Vec<OrderItem>>;
}

impl<S> OrderBook for Arc<S>
where
    S: OrderBook + ?Sized,
{
    fn order(&self, id: OrderId) -> DomainResult<Option<Order>> {
        (**self).order(id)
    }

    fn insert_order(&self, order: Order) -> DomainResult<()> {
        (**self).insert_order(order)
    }

    fn insert_line(&self, line: OrderItem) -> DomainResult<()> {
        (**self).insert_line(line)
    }

    fn lines_for(&self, order_id: OrderId) -> DomainResult<Vec<OrderItem>> {
        (**self).lines_for(order_id)
    }
}

/// In-memory order book for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryOrderBook {
    orders: RwLock<HashMap<OrderId, Order>>,
    lines: RwLock<HashMap<OrderItemId, OrderItem>>,
}

impl InMemoryOrderBook {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> DomainError {
    DomainError::invariant("order book lock poisoned")
}

impl OrderBook for InMemoryOrderBook {
    fn order(&self, id: OrderId) -> DomainResult<Option<Order>> {
        let orders = self.orders.read().map_err(|_| poisoned())?;
        Ok(orders.get(&id).cloned())
    }

    fn insert_order(&self, order: Order) -> DomainResult<()> {
        let mut orders = self.orders.write().map_err(|_| poisoned())?;
        if orders.contains_key(&order.id_typed()) {
            return Err(DomainError::conflict(format!(
                "order {} already exists",
                order.id_typed()
            )));
        }
        orders.insert(order.id_typed(), order);
        Ok(())
    }

    fn insert_line(&self, line: OrderItem) -> DomainResult<()> {
        let mut lines = self.lines.write().map_err(|_| poisoned())?;
        if lines.contains_key(&line.id_typed()) {
            return Err(DomainError::conflict(format!(
                "order line {} already exists",
                line.id_typed()
            )));
        }
        lines.insert(line.id_typed(), line);
        Ok(())
    }

    fn lines_for(&self, order_id: OrderId) -> DomainResult<Vec<OrderItem>> {
        let lines = self.lines.read().map_err(|_| poisoned())?;
        Ok(lines
            .values()
            .filter(|l| l.order_id() == order_id)
            .cloned()
            .collect())
    }
}
