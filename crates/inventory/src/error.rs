//! Inventory operation errors.

use thiserror::Error;

use steritrack_core::DomainError;
use steritrack_stock::StockError;

/// Failure of an inventory-level operation.
///
/// Domain failures (unknown tray, validation) and stock failures
/// (insufficiency, overflow) keep their own types; callers at the operation
/// boundary flatten both.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Stock(#[from] StockError),
}

impl InventoryError {
    pub fn not_found() -> Self {
        Self::Domain(DomainError::NotFound)
    }
}
