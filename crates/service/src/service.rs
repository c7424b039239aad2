//! The application facade: one struct wiring every component over shared
//! in-memory stores.

use std::sync::Arc;

use chrono::NaiveDate;

use steritrack_catalog::{
    CatalogDirectory, InMemoryCatalog, Item, Tray, TrayItem, TrayType,
};
use steritrack_core::{
    AllocationId, ItemId, OrderId, ProcedureId, TrayId, TrayTypeId, UserId,
};
use steritrack_inventory::{
    CentralInventory, ReplenishmentEngine, ReplenishmentReport, TrayInventory,
};
use steritrack_procedures::{
    Allocation, AllocationOrchestrator, InMemoryProcedureLog, Procedure, ProcedureLog, Usage,
    UsageRecorder,
};
use steritrack_purchasing::{InMemoryOrderBook, Order, OrderItem, OrderReceiving};
use steritrack_stock::InMemoryStockStore;

use crate::error::OperationError;

type Store = Arc<InMemoryStockStore>;
type Catalog = Arc<InMemoryCatalog>;
type Book = Arc<InMemoryOrderBook>;
type Log = Arc<InMemoryProcedureLog>;

/// Inventory consumption tracking service.
///
/// Assumes an upstream layer has authenticated the actor and validated
/// payload shape; everything past that point (existence, quantities,
/// stock sufficiency) is enforced here and below.
#[derive(Debug, Clone)]
pub struct InventoryService {
    catalog: Catalog,
    log: Log,
    tray_inventory: TrayInventory<Store>,
    central_inventory: CentralInventory<Store>,
    engine: ReplenishmentEngine<Store, Catalog>,
    recorder: UsageRecorder<Store, Catalog, Log>,
    receiving: OrderReceiving<Store, Catalog, Book>,
    orchestrator: AllocationOrchestrator<Store, Catalog, Log>,
}

impl InventoryService {
    pub fn new() -> Self {
        let store: Store = Arc::new(InMemoryStockStore::new());
        let catalog: Catalog = Arc::new(InMemoryCatalog::new());
        let book: Book = Arc::new(InMemoryOrderBook::new());
        let log: Log = Arc::new(InMemoryProcedureLog::new());

        Self {
            tray_inventory: TrayInventory::new(store.clone()),
            central_inventory: CentralInventory::new(store.clone()),
            engine: ReplenishmentEngine::new(store.clone(), catalog.clone()),
            recorder: UsageRecorder::new(store.clone(), catalog.clone(), log.clone()),
            receiving: OrderReceiving::new(store.clone(), catalog.clone(), book),
            orchestrator: AllocationOrchestrator::new(store, catalog.clone(), log.clone()),
            catalog,
            log,
        }
    }

    // Catalog registration.

    pub fn register_item(
        &self,
        name: impl Into<String>,
        actor: UserId,
    ) -> Result<Item, OperationError> {
        let item = Item::new(ItemId::new(), name, actor).map_err(fail("register_item"))?;
        self.catalog
            .register_item(item.clone())
            .map_err(fail("register_item"))?;
        Ok(item)
    }

    pub fn register_tray_type(
        &self,
        name: impl Into<String>,
        composition: Vec<TrayItem>,
        actor: UserId,
    ) -> Result<TrayType, OperationError> {
        let tray_type = TrayType::new(TrayTypeId::new(), name, composition, actor)
            .map_err(fail("register_tray_type"))?;
        self.catalog
            .register_tray_type(tray_type.clone())
            .map_err(fail("register_tray_type"))?;
        Ok(tray_type)
    }

    pub fn register_tray(
        &self,
        tray_type_id: TrayTypeId,
        label: impl Into<String>,
        actor: UserId,
    ) -> Result<Tray, OperationError> {
        let tray =
            Tray::new(TrayId::new(), tray_type_id, label, actor).map_err(fail("register_tray"))?;
        self.catalog
            .register_tray(tray.clone())
            .map_err(fail("register_tray"))?;
        Ok(tray)
    }

    pub fn register_procedure(
        &self,
        case_number: impl Into<String>,
        actor: UserId,
    ) -> Result<Procedure, OperationError> {
        let procedure = Procedure::new(ProcedureId::new(), case_number, actor)
            .map_err(fail("register_procedure"))?;
        self.log
            .register_procedure(procedure.clone())
            .map_err(fail("register_procedure"))?;
        Ok(procedure)
    }

    // Purchasing.

    pub fn create_order(
        &self,
        supplier: impl Into<String>,
        delivery_date: NaiveDate,
        actor: UserId,
    ) -> Result<Order, OperationError> {
        self.receiving
            .create_order(supplier, delivery_date, actor)
            .map_err(fail("create_order"))
    }

    pub fn receive_order_item(
        &self,
        order_id: OrderId,
        item_id: ItemId,
        quantity: u32,
        actor: UserId,
    ) -> Result<OrderItem, OperationError> {
        self.receiving
            .receive_order_item(order_id, item_id, quantity, actor)
            .map_err(fail("receive_order_item"))
    }

    // Allocations and usage.

    pub fn create_allocation(
        &self,
        procedure_id: ProcedureId,
        tray_id: TrayId,
        is_replenishment: bool,
        actor: UserId,
    ) -> Result<(Allocation, Option<ReplenishmentReport>), OperationError> {
        self.orchestrator
            .create_allocation(procedure_id, tray_id, is_replenishment, actor)
            .map_err(fail("create_allocation"))
    }

    pub fn update_allocation_tray(
        &self,
        allocation_id: AllocationId,
        tray_id: TrayId,
        actor: UserId,
    ) -> Result<Allocation, OperationError> {
        self.orchestrator
            .update_allocation_tray(allocation_id, tray_id, actor)
            .map_err(fail("update_allocation_tray"))
    }

    pub fn delete_allocation(&self, allocation_id: AllocationId) -> Result<(), OperationError> {
        self.orchestrator
            .delete_allocation(allocation_id)
            .map_err(fail("delete_allocation"))
    }

    pub fn record_usage(
        &self,
        allocation_id: AllocationId,
        item_id: ItemId,
        quantity: u32,
        actor: UserId,
    ) -> Result<Usage, OperationError> {
        self.recorder
            .record_usage(allocation_id, item_id, quantity, actor)
            .map_err(fail("record_usage"))
    }

    // Replenishment.

    pub fn replenish_tray(
        &self,
        tray_id: TrayId,
        actor: UserId,
    ) -> Result<ReplenishmentReport, OperationError> {
        self.engine
            .replenish_tray(tray_id, actor)
            .map_err(fail("replenish_tray"))
    }

    // Reads.

    pub fn get_tray_quantity(&self, tray_id: TrayId, item_id: ItemId) -> Result<u32, OperationError> {
        self.tray_inventory
            .quantity_of(tray_id, item_id)
            .map_err(fail("get_tray_quantity"))
    }

    pub fn get_central_quantity(&self, item_id: ItemId) -> Result<u32, OperationError> {
        self.central_inventory
            .quantity_of(item_id)
            .map_err(fail("get_central_quantity"))
    }
}

impl Default for InventoryService {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps any lower-layer error into [`OperationError`] and logs it at warn.
fn fail<E: Into<OperationError>>(operation: &'static str) -> impl FnOnce(E) -> OperationError {
    move |err| {
        let err = err.into();
        tracing::warn!(operation, error = %err, "operation failed");
        err
    }
}
