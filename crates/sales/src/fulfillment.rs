//! Order fulfillment and the delivery truck.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::InventoryResult;
use stockroom_inventory::TransactionLedger;
use stockroom_products::Catalog;

use crate::order::Order;
use crate::router::OrderRouter;

/// Result of processing the head of the order queue.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "order", rename_all = "lowercase")]
pub enum FulfillmentOutcome {
    /// Stock was withdrawn and the order is on the truck.
    Loaded(Order),
    /// Stock ran short since submission; the order was moved to the backorders.
    Backordered(Order),
    /// Nothing was waiting.
    Idle,
}

/// Fulfilled orders awaiting dispatch. Last loaded, first unloaded.
#[derive(Debug, Clone, Default)]
pub struct DeliveryTruck {
    cargo: Vec<Order>,
}

impl DeliveryTruck {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the next queued order, withdraw its stock and load it.
    ///
    /// Stock is checked again here because it may have moved since the order
    /// was routed.
    pub fn load_next(
        &mut self,
        router: &mut OrderRouter,
        catalog: &mut Catalog,
        ledger: &mut TransactionLedger,
        occurred_at: DateTime<Utc>,
    ) -> InventoryResult<FulfillmentOutcome> {
        let Some(order) = router.next_queued() else {
            return Ok(FulfillmentOutcome::Idle);
        };

        let covered = catalog
            .get(order.product_id)?
            .can_supply(order.quantity);
        if !covered {
            tracing::warn!(
                order_id = %order.order_id,
                "stock short at fulfillment; order backordered"
            );
            router.backorder(order);
            return Ok(FulfillmentOutcome::Backordered(order));
        }

        catalog.issue_stock(order.product_id, order.quantity, ledger, occurred_at)?;
        self.cargo.push(order);
        tracing::info!(order_id = %order.order_id, on_truck = self.cargo.len(), "order loaded");
        Ok(FulfillmentOutcome::Loaded(order))
    }

    /// Unload everything, most recently loaded first.
    pub fn dispatch(&mut self) -> Vec<Order> {
        let mut unloaded = std::mem::take(&mut self.cargo);
        unloaded.reverse();
        if !unloaded.is_empty() {
            tracing::info!(count = unloaded.len(), "truck dispatched");
        }
        unloaded
    }

    /// Loaded orders, bottom of the stack first.
    pub fn cargo(&self) -> &[Order] {
        &self.cargo
    }

    pub fn len(&self) -> usize {
        self.cargo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cargo.is_empty()
    }
}
