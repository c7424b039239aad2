//! `steritrack-stock` — the stock record store.
//!
//! Keyed counters (item × location → quantity) with a non-negative invariant.
//! This is the single invariant-bearing primitive every higher component uses:
//! no component may read-modify-write a quantity outside the store's atomic
//! `apply` batches.

pub mod in_memory;
pub mod location;
pub mod op;
pub mod record;
pub mod store;

pub use in_memory::InMemoryStockStore;
pub use location::StockLocation;
pub use op::{StockError, StockOp, StockResult};
pub use record::StockRecord;
pub use store::StockStore;
