use serde::{Deserialize, Serialize};

use stockroom_core::{InventoryError, InventoryResult, Money, ProductId};

/// Catalog entry.
///
/// The id never changes once assigned; only the stock level moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    category: String,
    unit_price: Money,
    stock_quantity: u32,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        category: impl Into<String>,
        unit_price: Money,
        stock_quantity: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            unit_price,
            stock_quantity,
        }
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    pub fn stock_quantity(&self) -> u32 {
        self.stock_quantity
    }

    /// Stock value at the current unit price.
    pub fn stock_value(&self) -> InventoryResult<Money> {
        self.unit_price.checked_times(self.stock_quantity)
    }

    pub fn can_supply(&self, quantity: u32) -> bool {
        self.stock_quantity >= quantity
    }

    pub(crate) fn receive(&mut self, quantity: u32) -> InventoryResult<()> {
        let Some(stock) = self.stock_quantity.checked_add(quantity) else {
            return Err(InventoryError::validation(format!(
                "stock cannot exceed {} (product {}, on hand {}, received {})",
                u32::MAX,
                self.id,
                self.stock_quantity,
                quantity
            )));
        };
        self.stock_quantity = stock;
        Ok(())
    }

    pub(crate) fn issue(&mut self, quantity: u32) -> InventoryResult<()> {
        if !self.can_supply(quantity) {
            return Err(InventoryError::validation(format!(
                "stock cannot go negative (product {}, on hand {}, requested {})",
                self.id, self.stock_quantity, quantity
            )));
        }
        self.stock_quantity -= quantity;
        Ok(())
    }
}

/// Input for adding a product whose id the catalog assigns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub unit_price: Money,
    pub stock_quantity: u32,
}

impl NewProduct {
    pub(crate) fn validate(&self) -> InventoryResult<()> {
        if self.name.trim().is_empty() {
            return Err(InventoryError::validation("name cannot be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lamp() -> Product {
        Product::new(ProductId::new(202), "Desk Lamp", "Furniture", Money::new(45, 75), 100)
    }

    #[test]
    fn stock_value_is_price_times_quantity() {
        assert_eq!(lamp().stock_value().unwrap(), Money::new(4_575, 0));
    }

    #[test]
    fn receive_refuses_to_overflow_stock() {
        let mut product = lamp();
        let err = product.receive(u32::MAX).unwrap_err();
        match err {
            InventoryError::Validation(msg) if msg.contains("stock cannot exceed") => {}
            _ => panic!("Expected Validation error for overflowing stock"),
        }
        assert_eq!(product.stock_quantity(), 100);

        product.receive(u32::MAX - 100).unwrap();
        assert_eq!(product.stock_quantity(), u32::MAX);
    }

    #[test]
    fn issue_cannot_drive_stock_negative() {
        let mut product = lamp();
        product.issue(60).unwrap();
        assert_eq!(product.stock_quantity(), 40);

        let err = product.issue(41).unwrap_err();
        match err {
            InventoryError::Validation(msg) if msg.contains("stock cannot go negative") => {}
            _ => panic!("Expected Validation error for overdrawn stock"),
        }
        assert_eq!(product.stock_quantity(), 40);
    }

    #[test]
    fn blank_names_are_rejected() {
        let input = NewProduct {
            name: "   ".to_string(),
            category: "Misc".to_string(),
            unit_price: Money::ZERO,
            stock_quantity: 1,
        };
        assert!(matches!(input.validate(), Err(InventoryError::Validation(_))));
    }
}
