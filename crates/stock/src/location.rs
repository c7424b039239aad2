//! Stock location model.

use serde::{Deserialize, Serialize};

use steritrack_core::{TrayId, ValueObject};

/// Where a quantity of stock is held.
///
/// Explicit tagged union rather than a nullable tray reference whose null-ness
/// carries meaning: the facility-wide central pool is its own variant.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "tray_id")]
pub enum StockLocation {
    /// Facility-wide central pool, credited by orders, debited by usage and
    /// replenishment.
    Central,
    /// A specific physical tray.
    Tray(TrayId),
}

impl StockLocation {
    pub fn is_central(&self) -> bool {
        matches!(self, StockLocation::Central)
    }

    pub fn tray_id(&self) -> Option<TrayId> {
        match self {
            StockLocation::Central => None,
            StockLocation::Tray(id) => Some(*id),
        }
    }
}

impl ValueObject for StockLocation {}

impl core::fmt::Display for StockLocation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StockLocation::Central => write!(f, "central"),
            StockLocation::Tray(id) => write!(f, "tray:{id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_distinguishes_central_from_tray() {
        let tray = TrayId::new();
        assert_eq!(StockLocation::Central.to_string(), "central");
        assert_eq!(
            StockLocation::Tray(tray).to_string(),
            format!("tray:{tray}")
        );
    }

    #[test]
    fn tray_id_accessor() {
        let tray = TrayId::new();
        assert_eq!(StockLocation::Tray(tray).tray_id(), Some(tray));
        assert_eq!(StockLocation::Central.tray_id(), None);
        assert!(StockLocation::Central.is_central());
    }
}
