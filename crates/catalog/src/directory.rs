//! Catalog directory: keyed lookup for items, tray types and trays.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use steritrack_core::{DomainError, DomainResult, ItemId, TrayId, TrayTypeId};

use crate::item::Item;
use crate::tray::{Tray, TrayType};

/// Read/registration interface over the catalog.
///
/// Lookups return `None` for unknown ids; callers translate that into the
/// not-found condition at their operation boundary.
pub trait CatalogDirectory: Send + Sync {
    fn item(&self, id: ItemId) -> DomainResult<Option<Item>>;
    fn tray_type(&self, id: TrayTypeId) -> DomainResult<Option<TrayType>>;
    fn tray(&self, id: TrayId) -> DomainResult<Option<Tray>>;

    /// Register a new item; duplicate ids conflict.
    fn register_item(&self, item: Item) -> DomainResult<()>;

    /// Register a tray type; every composition item must already exist.
    fn register_tray_type(&self, tray_type: TrayType) -> DomainResult<()>;

    /// Register a tray; its tray type must already exist.
    fn register_tray(&self, tray: Tray) -> DomainResult<()>;
}

impl<S> CatalogDirectory for Arc<S>
where
    S: CatalogDirectory + ?Sized,
{
    fn item(&self, id: ItemId) -> DomainResult<Option<Item>> {
        (**self).item(id)
    }

    fn tray_type(&self, id: TrayTypeId) -> DomainResult<Option<TrayType>> {
        (**self).tray_type(id)
    }

    fn tray(&self, id: TrayId) -> DomainResult<Option<Tray>> {
        (**self).tray(id)
    }

    fn register_item(&self, item: Item) -> DomainResult<()> {
        (**self).register_item(item)
    }

    fn register_tray_type(&self, tray_type: TrayType) -> DomainResult<()> {
        (**self).register_tray_type(tray_type)
    }

    fn register_tray(&self, tray: Tray) -> DomainResult<()> {
        (**self).register_tray(tray)
    }
}

/// In-memory catalog for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    items: RwLock<HashMap<ItemId, Item>>,
    tray_types: RwLock<HashMap<TrayTypeId, TrayType>>,
    trays: RwLock<HashMap<TrayId, Tray>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> DomainError {
    DomainError::invariant("catalog lock poisoned")
}

impl CatalogDirectory for InMemoryCatalog {
    fn item(&self, id: ItemId) -> DomainResult<Option<Item>> {
        let items = self.items.read().map_err(|_| poisoned())?;
        Ok(items.get(&id).cloned())
    }

    fn tray_type(&self, id: TrayTypeId) -> DomainResult<Option<TrayType>> {
        let tray_types = self.tray_types.read().map_err(|_| poisoned())?;
        Ok(tray_types.get(&id).cloned())
    }

    fn tray(&self, id: TrayId) -> DomainResult<Option<Tray>> {
        let trays = self.trays.read().map_err(|_| poisoned())?;
        Ok(trays.get(&id).cloned())
    }

    fn register_item(&self, item: Item) -> DomainResult<()> {
        let mut items = self.items.write().map_err(|_| poisoned())?;
        if items.contains_key(&item.id_typed()) {
            return Err(DomainError::conflict(format!(
                "item {} already registered",
                item.id_typed()
            )));
        }
        items.insert(item.id_typed(), item);
        Ok(())
    }

    fn register_tray_type(&self, tray_type: TrayType) -> DomainResult<()> {
        {
            let items = self.items.read().map_err(|_| poisoned())?;
            for line in tray_type.composition() {
                if !items.contains_key(&line.item_id) {
                    return Err(DomainError::not_found());
                }
            }
        }

        let mut tray_types = self.tray_types.write().map_err(|_| poisoned())?;
        if tray_types.contains_key(&tray_type.id_typed()) {
            return Err(DomainError::conflict(format!(
                "tray type {} already registered",
                tray_type.id_typed()
            )));
        }
        tray_types.insert(tray_type.id_typed(), tray_type);
        Ok(())
    }

    fn register_tray(&self, tray: Tray) -> DomainResult<()> {
        {
            let tray_types = self.tray_types.read().map_err(|_| poisoned())?;
            if !tray_types.contains_key(&tray.tray_type_id()) {
                return Err(DomainError::not_found());
            }
        }

        let mut trays = self.trays.write().map_err(|_| poisoned())?;
        if trays.contains_key(&tray.id_typed()) {
            return Err(DomainError::conflict(format!(
                "tray {} already registered",
                tray.id_typed()
            )));
        }
        trays.insert(tray.id_typed(), tray);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use steritrack_core::UserId;

    use super::*;
    use crate::tray::TrayItem;

    fn catalog_with_item() -> (InMemoryCatalog, ItemId, UserId) {
        let catalog = InMemoryCatalog::new();
        let item_id = ItemId::new();
        let user = UserId::new();
        catalog
            .register_item(Item::new(item_id, "Forceps", user).unwrap())
            .unwrap();
        (catalog, item_id, user)
    }

    #[test]
    fn lookup_of_unknown_ids_returns_none() {
        let catalog = InMemoryCatalog::new();
        assert!(catalog.item(ItemId::new()).unwrap().is_none());
        assert!(catalog.tray(TrayId::new()).unwrap().is_none());
        assert!(catalog.tray_type(TrayTypeId::new()).unwrap().is_none());
    }

    #[test]
    fn duplicate_item_registration_conflicts() {
        let (catalog, item_id, user) = catalog_with_item();
        let err = catalog
            .register_item(Item::new(item_id, "Forceps", user).unwrap())
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[test]
    fn tray_type_requires_known_items() {
        let catalog = InMemoryCatalog::new();
        let tray_type = TrayType::new(
            TrayTypeId::new(),
            "Ortho basic",
            vec![TrayItem {
                item_id: ItemId::new(),
                nominal_quantity: 2,
            }],
            UserId::new(),
        )
        .unwrap();

        assert_eq!(
            catalog.register_tray_type(tray_type).unwrap_err(),
            DomainError::NotFound
        );
    }

    #[test]
    fn tray_requires_known_tray_type() {
        let (catalog, item_id, user) = catalog_with_item();
        let tray = Tray::new(TrayId::new(), TrayTypeId::new(), "T-001", user).unwrap();
        assert_eq!(catalog.register_tray(tray).unwrap_err(), DomainError::NotFound);

        let tray_type_id = TrayTypeId::new();
        catalog
            .register_tray_type(
                TrayType::new(
                    tray_type_id,
                    "Ortho basic",
                    vec![TrayItem {
                        item_id,
                        nominal_quantity: 2,
                    }],
                    user,
                )
                .unwrap(),
            )
            .unwrap();

        let tray = Tray::new(TrayId::new(), tray_type_id, "T-001", user).unwrap();
        catalog.register_tray(tray.clone()).unwrap();
        assert_eq!(catalog.tray(tray.id_typed()).unwrap(), Some(tray));
    }
}
