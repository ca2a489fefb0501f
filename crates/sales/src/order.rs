use core::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::{OrderId, ProductId};

/// Command: SubmitOrder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitOrder {
    pub product_id: ProductId,
    pub quantity: u32,
    pub occurred_at: DateTime<Utc>,
}

/// A customer order for a single product.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Order {
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub quantity: u32,
}

impl Order {
    pub fn new(order_id: OrderId, product_id: ProductId, quantity: u32) -> Self {
        Self {
            order_id,
            product_id,
            quantity,
        }
    }

    pub fn key(&self) -> OrderKey {
        OrderKey {
            order_id: self.order_id,
            product_id: self.product_id,
            quantity: self.quantity,
        }
    }
}

/// Backorder priority key.
///
/// Compared field by field in declaration order: order id, then product id,
/// then quantity. The smallest key is served first.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OrderKey {
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub quantity: u32,
}

impl Ord for Order {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl PartialOrd for Order {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Hands out order ids derived from the submission instant (unix seconds).
///
/// Two submissions in the same second would collide, so an id that is not
/// strictly greater than the previous one is bumped to `previous + 1`.
#[derive(Debug, Clone, Default)]
pub struct OrderSequence {
    last: Option<OrderId>,
}

impl OrderSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_at(&mut self, occurred_at: DateTime<Utc>) -> OrderId {
        let from_clock = u64::try_from(occurred_at.timestamp()).unwrap_or(0);
        let id = match self.last {
            Some(last) if from_clock <= last.get() => last.get().saturating_add(1),
            _ => from_clock,
        };
        let id = OrderId::new(id);
        self.last = Some(id);
        id
    }

    pub fn last(&self) -> Option<OrderId> {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;

    fn order(id: u64, product: u32, quantity: u32) -> Order {
        Order::new(OrderId::new(id), ProductId::new(product), quantity)
    }

    #[test]
    fn key_orders_by_id_then_product_then_quantity() {
        assert!(order(3, 900, 900) < order(5, 1, 1));
        assert!(order(5, 101, 9) < order(5, 102, 1));
        assert!(order(5, 101, 1) < order(5, 101, 2));
        assert_eq!(order(7, 1, 1).key().order_id, OrderId::new(7));
    }

    #[test]
    fn sequence_follows_the_clock() {
        let mut seq = OrderSequence::new();
        let t = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
        let first = seq.next_at(t);
        assert_eq!(first.get(), t.timestamp() as u64);

        let later = t + chrono::Duration::seconds(10);
        assert_eq!(seq.next_at(later).get(), later.timestamp() as u64);
    }

    #[test]
    fn same_instant_does_not_collide() {
        let mut seq = OrderSequence::new();
        let t = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
        let a = seq.next_at(t);
        let b = seq.next_at(t);
        let c = seq.next_at(t - chrono::Duration::seconds(60));
        assert_eq!(b.get(), a.get() + 1);
        assert_eq!(c.get(), b.get() + 1);
        assert_eq!(seq.last(), Some(c));
    }

    proptest! {
        /// Property: ids are strictly increasing whatever the clock does.
        #[test]
        fn ids_strictly_increase(offsets in prop::collection::vec(-5i64..5i64, 1..50)) {
            let mut seq = OrderSequence::new();
            let mut now = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
            let mut prev: Option<OrderId> = None;
            for offset in offsets {
                now += chrono::Duration::seconds(offset);
                let id = seq.next_at(now);
                if let Some(p) = prev {
                    prop_assert!(id > p);
                }
                prev = Some(id);
            }
        }
    }
}
