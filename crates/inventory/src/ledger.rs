use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::ProductId;

/// Description recorded when a product enters the catalog.
pub const INITIAL_STOCK: &str = "initial stock";
/// Description recorded when an order is pulled from stock onto the truck.
pub const ORDER_FULFILLED: &str = "order fulfilled";
/// Description recorded when stock is replenished.
pub const RESTOCK: &str = "restock";

/// One stock change (immutable).
///
/// `sequence_number` is the 1-based position in the ledger and mirrors
/// insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    sequence_number: u64,
    timestamp: DateTime<Utc>,
    product_id: ProductId,
    description: String,
    quantity_delta: i64,
}

impl TransactionRecord {
    pub fn sequence_number(&self) -> u64 {
        self.sequence_number
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn quantity_delta(&self) -> i64 {
        self.quantity_delta
    }
}

/// Append-only transaction log.
///
/// Records can be appended and read, never altered or removed. Product ids are
/// not checked against the catalog.
#[derive(Debug, Clone, Default)]
pub struct TransactionLedger {
    records: Vec<TransactionRecord>,
}

impl TransactionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record stamped with the current time.
    pub fn record(
        &mut self,
        product_id: ProductId,
        description: impl Into<String>,
        quantity_delta: i64,
    ) -> &TransactionRecord {
        self.record_at(product_id, description, quantity_delta, Utc::now())
    }

    /// Append a record stamped with `occurred_at`.
    pub fn record_at(
        &mut self,
        product_id: ProductId,
        description: impl Into<String>,
        quantity_delta: i64,
        occurred_at: DateTime<Utc>,
    ) -> &TransactionRecord {
        let record = TransactionRecord {
            sequence_number: self.records.len() as u64 + 1,
            timestamp: occurred_at,
            product_id,
            description: description.into(),
            quantity_delta,
        };
        tracing::debug!(
            product_id = %record.product_id,
            description = %record.description,
            quantity_delta = record.quantity_delta,
            "ledger record appended"
        );
        self.records.push(record);
        &self.records[self.records.len() - 1]
    }

    /// All records in insertion order.
    pub fn all(&self) -> &[TransactionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;

    fn test_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap()
    }

    #[test]
    fn record_keeps_fields_and_order() {
        let mut ledger = TransactionLedger::new();
        ledger.record_at(ProductId::new(101), INITIAL_STOCK, 80, test_time());
        ledger.record_at(ProductId::new(101), ORDER_FULFILLED, -5, test_time());

        let all = ledger.all();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].description(), "initial stock");
        assert_eq!(all[0].quantity_delta(), 80);
        assert_eq!(all[0].timestamp(), test_time());
        assert_eq!(all[1].quantity_delta(), -5);
        assert_eq!(all[1].sequence_number(), 2);
    }

    #[test]
    fn unknown_product_ids_are_accepted() {
        let mut ledger = TransactionLedger::new();
        let record = ledger.record(ProductId::new(424_242), "manual adjustment", 3);
        assert_eq!(record.product_id(), ProductId::new(424_242));
        assert_eq!(ledger.len(), 1);
    }

    proptest! {
        /// Property: every record call grows the ledger by exactly one and
        /// leaves earlier records untouched.
        #[test]
        fn ledger_is_append_only(deltas in prop::collection::vec(-1_000i64..1_000i64, 1..40)) {
            let mut ledger = TransactionLedger::new();
            for (i, delta) in deltas.iter().enumerate() {
                let before: Vec<TransactionRecord> = ledger.all().to_vec();
                ledger.record_at(ProductId::new(i as u32), "adjust", *delta, test_time());

                prop_assert_eq!(ledger.len(), before.len() + 1);
                prop_assert_eq!(&ledger.all()[..before.len()], &before[..]);
                prop_assert_eq!(ledger.all()[before.len()].quantity_delta(), *delta);
            }
        }
    }
}
