//! Stock record: one counter per (item, location).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use steritrack_core::{ItemId, UserId};

use crate::location::StockLocation;

/// A quantity of a given item held at a given location.
///
/// Invariants: `quantity >= 0` at all times (enforced by the `u32` type plus
/// checked arithmetic in the store), and at most one record per
/// (item, location) pair (enforced by keying).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockRecord {
    pub item: ItemId,
    pub location: StockLocation,
    pub quantity: u32,
    pub created_at: DateTime<Utc>,
    pub created_by: UserId,
    pub updated_at: DateTime<Utc>,
    pub updated_by: Option<UserId>,
}
