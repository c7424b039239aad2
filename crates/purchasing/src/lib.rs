//! `steritrack-purchasing` — supplier orders and order receiving.
//!
//! Receiving an order line is the point where stock enters the system:
//! the line is persisted and central inventory is credited explicitly.

pub mod book;
pub mod order;
pub mod receiving;

pub use book::{InMemoryOrderBook, OrderBook};
pub use order::{Order, OrderItem};
pub use receiving::{OrderReceiving, PurchasingError};
