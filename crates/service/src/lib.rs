//! `steritrack-service` — the wired application facade.
//!
//! Composes the stock store, catalog, order book and procedure log over
//! shared `Arc` handles and exposes the operation surface an upstream
//! request layer calls.

pub mod error;
pub mod service;


pub use error::OperationError;
pub use service::InventoryService;
