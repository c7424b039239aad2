//! Stock mutation operations and their error model.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use steritrack_core::ItemId;

use crate::location::StockLocation;

/// Result type for stock store operations.
pub type StockResult<T> = Result<T, StockError>;

/// A single stock mutation. Batches of these are applied atomically.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "op")]
pub enum StockOp {
    /// Increase the counter; creates the record when none exists.
    Credit {
        item: ItemId,
        location: StockLocation,
        amount: u32,
    },
    /// Decrease the counter; fails the whole batch when the counter would go
    /// negative.
    Debit {
        item: ItemId,
        location: StockLocation,
        amount: u32,
    },
}

impl StockOp {
    pub fn item(&self) -> ItemId {
        match self {
            StockOp::Credit { item, .. } | StockOp::Debit { item, .. } => *item,
        }
    }

    pub fn location(&self) -> StockLocation {
        match self {
            StockOp::Credit { location, .. } | StockOp::Debit { location, .. } => *location,
        }
    }

    pub fn amount(&self) -> u32 {
        match self {
            StockOp::Credit { amount, .. } | StockOp::Debit { amount, .. } => *amount,
        }
    }
}

/// Stock store failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StockError {
    /// A debit would drive the counter negative. Recoverable by the caller;
    /// the underlying records are left unchanged.
    #[error("insufficient stock of {item} at {location}: requested {requested}, available {available}")]
    InsufficientStock {
        item: ItemId,
        location: StockLocation,
        requested: u32,
        available: u32,
    },

    /// An operation was malformed (e.g. zero amount).
    #[error("invalid stock operation: {0}")]
    InvalidOp(String),

    /// A credit would overflow the counter.
    #[error("stock quantity overflow for {item} at {location}")]
    Overflow {
        item: ItemId,
        location: StockLocation,
    },

    /// The backing store is unusable (e.g. poisoned lock). Not recoverable.
    #[error("stock store unavailable: {0}")]
    Unavailable(String),
}
