//! Supplier order records.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use steritrack_core::{DomainError, DomainResult, Entity, ItemId, OrderId, OrderItemId, UserId};

/// A supplier purchase with a delivery date. Line items are received
/// individually; receipt is modeled as `OrderItem` creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    supplier: String,
    delivery_date: NaiveDate,
    created_at: DateTime<Utc>,
    created_by: UserId,
}

impl Order {
    pub fn new(
        id: OrderId,
        supplier: impl Into<String>,
        delivery_date: NaiveDate,
        actor: UserId,
    ) -> DomainResult<Self> {
        let supplier = supplier.into();
        if supplier.trim().is_empty() {
            return Err(DomainError::validation("supplier cannot be empty"));
        }
        Ok(Self {
            id,
            supplier,
            delivery_date,
            created_at: Utc::now(),
            created_by: actor,
        })
    }

    pub fn id_typed(&self) -> OrderId {
        self.id
    }

    pub fn supplier(&self) -> &str {
        &self.supplier
    }

    pub fn delivery_date(&self) -> NaiveDate {
        self.delivery_date
    }

    pub fn created_by(&self) -> UserId {
        self.created_by
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// One received line of a supplier order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    id: OrderItemId,
    order_id: OrderId,
    item_id: ItemId,
    quantity: u32,
    created_at: DateTime<Utc>,
    created_by: UserId,
}

impl OrderItem {
    pub fn new(
        id: OrderItemId,
        order_id: OrderId,
        item_id: ItemId,
        quantity: u32,
        actor: UserId,
    ) -> DomainResult<Self> {
        if quantity == 0 {
            return Err(DomainError::validation("order quantity must be positive"));
        }
        Ok(Self {
            id,
            order_id,
            item_id,
            quantity,
            created_at: Utc::now(),
            created_by: actor,
        })
    }

    pub fn id_typed(&self) -> OrderItemId {
        self.id
    }

    pub fn order_id(&self) -> OrderId {
        self.order_id
    }

    pub fn item_id(&self) -> ItemId {
        self.item_id
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn created_by(&self) -> UserId {
        self.created_by
    }
}

impl Entity for OrderItem {
    type Id = OrderItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
