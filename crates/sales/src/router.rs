use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use stockroom_core::{InventoryError, InventoryResult, ProductId};
use stockroom_products::Catalog;

use crate::order::{Order, OrderSequence, SubmitOrder};
use crate::queue::{BackorderQueue, OrderQueue};

/// Where a submitted order ended up.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "placement", content = "order", rename_all = "lowercase")]
pub enum Placement {
    Queued(Order),
    Backordered(Order),
}

impl Placement {
    pub fn order(&self) -> &Order {
        match self {
            Placement::Queued(order) | Placement::Backordered(order) => order,
        }
    }
}

/// Routes orders by a point-in-time stock check.
///
/// Submission only reads the catalog; stock is withdrawn at fulfillment.
#[derive(Debug, Clone, Default)]
pub struct OrderRouter {
    sequence: OrderSequence,
    queue: OrderQueue,
    backorders: BackorderQueue,
}

impl OrderRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submit(&mut self, catalog: &Catalog, cmd: &SubmitOrder) -> InventoryResult<Placement> {
        let product = catalog
            .find(cmd.product_id)
            .ok_or(InventoryError::ProductNotFound(cmd.product_id))?;
        if cmd.quantity == 0 {
            return Err(InventoryError::validation("quantity must be positive"));
        }

        let order = Order::new(
            self.sequence.next_at(cmd.occurred_at),
            cmd.product_id,
            cmd.quantity,
        );

        if product.can_supply(order.quantity) {
            tracing::info!(
                order_id = %order.order_id,
                product_id = %order.product_id,
                quantity = order.quantity,
                "order queued"
            );
            self.queue.enqueue(order);
            Ok(Placement::Queued(order))
        } else {
            tracing::info!(
                order_id = %order.order_id,
                product_id = %order.product_id,
                quantity = order.quantity,
                on_hand = product.stock_quantity(),
                "order backordered"
            );
            self.backorders.push(order);
            Ok(Placement::Backordered(order))
        }
    }

    /// Move every backorder the catalog can now cover to the tail of the
    /// order queue, in backorder key order.
    ///
    /// Stock claimed by an order promoted earlier in the same pass is not
    /// available to later ones.
    pub fn promote_backorders(&mut self, catalog: &Catalog) -> Vec<Order> {
        let mut claimed: HashMap<ProductId, u32> = HashMap::new();
        let mut promoted = Vec::new();

        for order in self.backorders.drain_sorted() {
            let on_hand = catalog.find(order.product_id).map_or(0, |p| p.stock_quantity());
            let already = claimed.get(&order.product_id).copied().unwrap_or(0);

            if on_hand.saturating_sub(already) >= order.quantity {
                claimed.insert(order.product_id, already + order.quantity);
                self.queue.enqueue(order);
                promoted.push(order);
            } else {
                self.backorders.push(order);
            }
        }

        if !promoted.is_empty() {
            tracing::info!(count = promoted.len(), "backorders promoted");
        }
        promoted
    }

    /// Return an order that could not be filled to the backorder queue.
    pub(crate) fn backorder(&mut self, order: Order) {
        self.backorders.push(order);
    }

    pub(crate) fn next_queued(&mut self) -> Option<Order> {
        self.queue.dequeue()
    }

    pub fn queue(&self) -> &OrderQueue {
        &self.queue
    }

    pub fn backorders(&self) -> &BackorderQueue {
        &self.backorders
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use proptest::prelude::*;
    use stockroom_core::Money;
    use stockroom_inventory::TransactionLedger;
    use stockroom_products::{Product, demo_products};

    fn test_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap()
    }

    fn demo_catalog() -> Catalog {
        let mut catalog = Catalog::new();
        let mut ledger = TransactionLedger::new();
        for product in demo_products() {
            catalog.insert(product, &mut ledger, test_time()).unwrap();
        }
        catalog
    }

    fn submit(product: u32, quantity: u32) -> SubmitOrder {
        SubmitOrder {
            product_id: ProductId::new(product),
            quantity,
            occurred_at: test_time(),
        }
    }

    #[test]
    fn sufficient_stock_goes_to_order_queue() {
        let catalog = demo_catalog();
        let mut router = OrderRouter::new();

        // Office Chair has exactly 30 on hand.
        let placement = router.submit(&catalog, &submit(201, 30)).unwrap();
        assert!(matches!(placement, Placement::Queued(_)));
        assert_eq!(router.queue().len(), 1);
        assert!(router.backorders().is_empty());
    }

    #[test]
    fn insufficient_stock_goes_to_backorders() {
        let catalog = demo_catalog();
        let mut router = OrderRouter::new();

        let placement = router.submit(&catalog, &submit(201, 31)).unwrap();
        assert!(matches!(placement, Placement::Backordered(_)));
        assert!(router.queue().is_empty());
        assert_eq!(router.backorders().peek_min(), Some(placement.order()));
    }

    #[test]
    fn submission_does_not_touch_stock() {
        let catalog = demo_catalog();
        let mut router = OrderRouter::new();
        router.submit(&catalog, &submit(101, 10)).unwrap();
        assert_eq!(catalog.find(ProductId::new(101)).unwrap().stock_quantity(), 80);
    }

    #[test]
    fn unknown_product_is_rejected() {
        let catalog = demo_catalog();
        let mut router = OrderRouter::new();
        let err = router.submit(&catalog, &submit(999, 1)).unwrap_err();
        assert_eq!(err, InventoryError::ProductNotFound(ProductId::new(999)));
        assert!(router.queue().is_empty());
        assert!(router.backorders().is_empty());
    }

    #[test]
    fn zero_quantity_is_rejected() {
        let catalog = demo_catalog();
        let mut router = OrderRouter::new();
        assert!(matches!(
            router.submit(&catalog, &submit(101, 0)),
            Err(InventoryError::Validation(_))
        ));
    }

    #[test]
    fn queued_orders_come_out_in_submission_order() {
        let catalog = demo_catalog();
        let mut router = OrderRouter::new();
        let a = *router.submit(&catalog, &submit(101, 1)).unwrap().order();
        let b = *router.submit(&catalog, &submit(102, 1)).unwrap().order();

        assert!(a.order_id < b.order_id);
        assert_eq!(router.next_queued(), Some(a));
        assert_eq!(router.next_queued(), Some(b));
    }

    #[test]
    fn promotion_respects_key_order_and_claims() {
        let mut catalog = Catalog::new();
        let mut ledger = TransactionLedger::new();
        let widget = Product::new(ProductId::new(1), "Widget", "Parts", Money::new(1, 0), 0);
        catalog.insert(widget, &mut ledger, test_time()).unwrap();
        let mut router = OrderRouter::new();
        let first = *router.submit(&catalog, &submit(1, 4)).unwrap().order();
        let second = *router.submit(&catalog, &submit(1, 3)).unwrap().order();
        assert_eq!(router.backorders().len(), 2);

        catalog.receive_stock(ProductId::new(1), 5, &mut ledger, test_time()).unwrap();
        let promoted = router.promote_backorders(&catalog);

        // 5 on hand covers the first (4) but not both.
        assert_eq!(promoted, vec![first]);
        assert_eq!(router.queue().peek(), Some(&first));
        assert_eq!(router.backorders().peek_min(), Some(&second));
    }

    proptest! {
        /// Property: an order is queued iff stock covers the requested quantity.
        #[test]
        fn routing_matches_stock_check(stock in 0u32..200, quantity in 1u32..200) {
            let mut catalog = Catalog::new();
            let mut ledger = TransactionLedger::new();
            let gadget = Product::new(ProductId::new(7), "Gadget", "Misc", Money::new(2, 0), stock);
            catalog.insert(gadget, &mut ledger, test_time()).unwrap();
            let mut router = OrderRouter::new();

            let placement = router.submit(&catalog, &submit(7, quantity)).unwrap();
            match placement {
                Placement::Queued(_) => prop_assert!(stock >= quantity),
                Placement::Backordered(_) => prop_assert!(stock < quantity),
            }
            prop_assert_eq!(router.queue().len() + router.backorders().len(), 1);
        }
    }
}
