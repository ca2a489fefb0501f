//! The application context.

use chrono::{DateTime, Utc};
use serde::Serialize;

use stockroom_core::{InventoryResult, Money, ProductId};
use stockroom_inventory::{TransactionLedger, TransactionRecord};
use stockroom_products::{
    Catalog, CompositeIndex, CostCalculator, NewProduct, Product, demo_composites, demo_products,
};
use stockroom_sales::{
    DeliveryTruck, FulfillmentOutcome, Order, OrderRouter, Placement, SubmitOrder,
};

/// All inventory state for one run: catalog, composites, ledger, both order
/// queues and the delivery truck.
///
/// Constructed once at startup and handed to the shell. Every operation takes
/// `&mut self`, so a half-applied change is never observable.
#[derive(Debug, Clone, Default)]
pub struct Stockroom {
    catalog: Catalog,
    composites: CompositeIndex,
    ledger: TransactionLedger,
    router: OrderRouter,
    truck: DeliveryTruck,
}

/// Read-only view of every order the stockroom is holding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueueSnapshot {
    pub queued: Vec<Order>,
    pub backordered: Vec<Order>,
    pub on_truck: Vec<Order>,
}

impl Stockroom {
    /// Empty state. `add_product` fails until something is inserted.
    pub fn new() -> Self {
        Self::default()
    }

    /// State preloaded with the demo catalog and the Gamer PC Bundle.
    pub fn seeded() -> InventoryResult<Self> {
        let mut stockroom = Self::new();
        let now = Utc::now();
        for product in demo_products() {
            stockroom.catalog.insert(product, &mut stockroom.ledger, now)?;
        }
        stockroom.composites = demo_composites();
        stockroom.composites.validate(&stockroom.catalog)?;
        tracing::info!(products = stockroom.catalog.len(), "demo catalog loaded");
        Ok(stockroom)
    }

    pub fn add_product(&mut self, input: NewProduct) -> InventoryResult<ProductId> {
        self.catalog.add(input, &mut self.ledger, Utc::now())
    }

    /// Define a composite; rejected (and left undefined) if any part dangles
    /// or the definition makes the index cyclic.
    pub fn define_composite(
        &mut self,
        composite: ProductId,
        parts: Vec<ProductId>,
    ) -> InventoryResult<()> {
        let mut candidate = self.composites.clone();
        candidate.define(composite, parts)?;
        candidate.validate(&self.catalog)?;
        self.composites = candidate;
        Ok(())
    }

    pub fn find_product(&self, id: ProductId) -> Option<&Product> {
        self.catalog.find(id)
    }

    pub fn total_value(&self) -> InventoryResult<Money> {
        self.catalog.total_value()
    }

    /// Append a ledger record without touching stock.
    pub fn record_transaction(
        &mut self,
        product_id: ProductId,
        description: impl Into<String>,
        quantity_delta: i64,
    ) -> &TransactionRecord {
        self.ledger.record(product_id, description, quantity_delta)
    }

    pub fn submit_order(
        &mut self,
        product_id: ProductId,
        quantity: u32,
    ) -> InventoryResult<Placement> {
        self.submit_order_at(SubmitOrder {
            product_id,
            quantity,
            occurred_at: Utc::now(),
        })
    }

    pub fn submit_order_at(&mut self, cmd: SubmitOrder) -> InventoryResult<Placement> {
        self.router.submit(&self.catalog, &cmd)
    }

    pub fn process_next_order(&mut self) -> InventoryResult<FulfillmentOutcome> {
        self.process_next_order_at(Utc::now())
    }

    pub fn process_next_order_at(
        &mut self,
        occurred_at: DateTime<Utc>,
    ) -> InventoryResult<FulfillmentOutcome> {
        self.truck.load_next(
            &mut self.router,
            &mut self.catalog,
            &mut self.ledger,
            occurred_at,
        )
    }

    pub fn dispatch_truck(&mut self) -> Vec<Order> {
        self.truck.dispatch()
    }

    /// Add stock, then move newly satisfiable backorders to the order queue.
    /// Returns the promoted orders.
    pub fn restock(&mut self, product_id: ProductId, quantity: u32) -> InventoryResult<Vec<Order>> {
        let on_hand = self
            .catalog
            .receive_stock(product_id, quantity, &mut self.ledger, Utc::now())?;
        tracing::info!(product_id = %product_id, quantity, on_hand, "restocked");
        Ok(self.router.promote_backorders(&self.catalog))
    }

    pub fn composite_cost(&self, product_id: ProductId) -> InventoryResult<Money> {
        CostCalculator::new(&self.catalog, &self.composites).cost(product_id)
    }

    pub fn queue_snapshot(&self) -> QueueSnapshot {
        QueueSnapshot {
            queued: self.router.queue().iter().copied().collect(),
            backordered: self.router.backorders().iter_sorted(),
            on_truck: self.truck.cargo().to_vec(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn composites(&self) -> &CompositeIndex {
        &self.composites
    }

    pub fn ledger(&self) -> &TransactionLedger {
        &self.ledger
    }

    pub fn router(&self) -> &OrderRouter {
        &self.router
    }

    pub fn truck(&self) -> &DeliveryTruck {
        &self.truck
    }
}
