//! Conversion of user-entered text into domain values.
//!
//! The shell calls these before touching any state, so a typo never reaches
//! the catalog or the queues.

use crate::error::{InventoryError, InventoryResult};
use crate::id::ProductId;
use crate::money::Money;

pub fn parse_product_id(input: &str) -> InventoryResult<ProductId> {
    input.parse()
}

pub fn parse_money(input: &str) -> InventoryResult<Money> {
    input.parse()
}

/// Stock level: any non-negative integer.
pub fn parse_stock(input: &str) -> InventoryResult<u32> {
    input
        .trim()
        .parse()
        .map_err(|_| InventoryError::invalid_numeric("stock", input))
}

/// Order or restock quantity: a positive integer.
pub fn parse_quantity(input: &str) -> InventoryResult<u32> {
    let quantity: u32 = input
        .trim()
        .parse()
        .map_err(|_| InventoryError::invalid_numeric("quantity", input))?;
    if quantity == 0 {
        return Err(InventoryError::validation("quantity must be positive"));
    }
    Ok(quantity)
}
