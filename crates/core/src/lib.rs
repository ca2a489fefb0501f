//! `stockroom-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the catalog, ledger
//! and order crates (no IO, no terminal concerns).

pub mod error;
pub mod id;
pub mod input;
pub mod money;

pub use error::{InventoryError, InventoryResult};
pub use id::{OrderId, ProductId};
pub use input::{parse_money, parse_product_id, parse_quantity, parse_stock};
pub use money::Money;
