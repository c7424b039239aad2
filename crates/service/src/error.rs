//! Operation-boundary error mapping.

use thiserror::Error;

use steritrack_core::{DomainError, ItemId};
use steritrack_inventory::InventoryError;
use steritrack_procedures::ProcedureError;
use steritrack_purchasing::PurchasingError;
use steritrack_stock::{StockError, StockLocation};

/// Error surfaced by [`InventoryService`](crate::InventoryService)
/// operations.
///
/// Lower layers keep their own error types; this enum flattens them into
/// the categories an upstream request layer distinguishes (bad request,
/// not found, conflict, unprocessable, internal).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OperationError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("not found")]
    NotFound,

    #[error("conflict: {0}")]
    Conflict(String),

    /// The requested debit exceeds what is on hand. Recoverable; nothing
    /// was changed.
    #[error("insufficient stock of {item} at {location}: requested {requested}, available {available}")]
    InsufficientStock {
        item: ItemId,
        location: StockLocation,
        requested: u32,
        available: u32,
    },

    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl From<DomainError> for OperationError {
    fn from(value: DomainError) -> Self {
        match value {
            DomainError::Validation(msg) => Self::Validation(msg),
            DomainError::InvalidId(msg) => Self::Validation(msg),
            DomainError::NotFound => Self::NotFound,
            DomainError::Conflict(msg) => Self::Conflict(msg),
            DomainError::InvariantViolation(msg) => Self::InvariantViolation(msg),
        }
    }
}

impl From<StockError> for OperationError {
    fn from(value: StockError) -> Self {
        match value {
            StockError::InsufficientStock {
                item,
                location,
                requested,
                available,
            } => Self::InsufficientStock {
                item,
                location,
                requested,
                available,
            },
            StockError::InvalidOp(msg) => Self::Validation(msg),
            StockError::Overflow { item, location } => Self::InvariantViolation(format!(
                "stock quantity overflow for {item} at {location}"
            )),
            StockError::Unavailable(msg) => Self::Unavailable(msg),
        }
    }
}

impl From<InventoryError> for OperationError {
    fn from(value: InventoryError) -> Self {
        match value {
            InventoryError::Domain(e) => e.into(),
            InventoryError::Stock(e) => e.into(),
        }
    }
}

impl From<ProcedureError> for OperationError {
    fn from(value: ProcedureError) -> Self {
        match value {
            ProcedureError::Domain(e) => e.into(),
            ProcedureError::Stock(e) => e.into(),
        }
    }
}

impl From<PurchasingError> for OperationError {
    fn from(value: PurchasingError) -> Self {
        match value {
            PurchasingError::Domain(e) => e.into(),
            PurchasingError::Stock(e) => e.into(),
        }
    }
}
