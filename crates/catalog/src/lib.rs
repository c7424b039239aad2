//! `steritrack-catalog` — items, tray types and trays.
//!
//! The catalog resolves references for the write path: which items exist,
//! what a tray's nominal composition is, which tray type a tray instantiates.
//! Directory management itself (hospitals, doctors, users) is out of scope.

pub mod directory;
pub mod item;
pub mod tray;

pub use directory::{CatalogDirectory, InMemoryCatalog};
pub use item::Item;
pub use tray::{Tray, TrayItem, TrayType};
