//! `steritrack-inventory` — tray/central inventory managers and the
//! replenishment engine.
//!
//! Managers pin the location kind and translate domain reads/writes into
//! stock store calls; the engine restores trays toward their nominal
//! composition from central stock.

pub mod error;
pub mod managers;
pub mod replenishment;

pub use error::InventoryError;
pub use managers::{CentralInventory, TrayInventory};
pub use replenishment::{ItemReplenishment, ReplenishmentEngine, ReplenishmentReport};
