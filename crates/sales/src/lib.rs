//! Customer orders: routing between the order and backorder queues,
//! fulfillment onto the delivery truck, and backorder promotion on restock.

pub mod fulfillment;
pub mod order;
pub mod queue;
pub mod router;

pub use fulfillment::{DeliveryTruck, FulfillmentOutcome};
pub use order::{Order, OrderKey, OrderSequence, SubmitOrder};
pub use queue::{BackorderQueue, OrderQueue};
pub use router::{OrderRouter, Placement};
