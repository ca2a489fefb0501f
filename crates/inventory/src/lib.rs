//! Inventory transaction ledger.
//!
//! An append-only record of every stock-quantity change, kept deliberately
//! decoupled from the catalog (no IO, no product lookups).

pub mod ledger;

pub use ledger::{TransactionLedger, TransactionRecord, INITIAL_STOCK, ORDER_FULFILLED, RESTOCK};
