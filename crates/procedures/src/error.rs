//! Procedure operation errors.

use thiserror::Error;

use steritrack_core::DomainError;
use steritrack_inventory::InventoryError;
use steritrack_stock::StockError;

/// Failure of an allocation/usage operation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProcedureError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Stock(#[from] StockError),
}

impl From<InventoryError> for ProcedureError {
    fn from(value: InventoryError) -> Self {
        match value {
            InventoryError::Domain(e) => Self::Domain(e),
            InventoryError::Stock(e) => Self::Stock(e),
        }
    }
}
