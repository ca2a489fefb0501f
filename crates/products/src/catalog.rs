use chrono::{DateTime, Utc};

use stockroom_core::{InventoryError, InventoryResult, Money, ProductId};
use stockroom_inventory::{INITIAL_STOCK, ORDER_FULFILLED, RESTOCK, TransactionLedger};

use crate::product::{NewProduct, Product};

/// Ordered product list.
///
/// Every stock change made through the catalog is mirrored into the
/// [`TransactionLedger`] passed alongside it.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a product under a caller-chosen id (used for seeding).
    pub fn insert(
        &mut self,
        product: Product,
        ledger: &mut TransactionLedger,
        occurred_at: DateTime<Utc>,
    ) -> InventoryResult<ProductId> {
        let id = product.id_typed();
        if self.find(id).is_some() {
            return Err(InventoryError::conflict(format!("product {id} already exists")));
        }
        ledger.record_at(id, INITIAL_STOCK, i64::from(product.stock_quantity()), occurred_at);
        self.products.push(product);
        Ok(id)
    }

    /// Add a product under the next free id (`max + 1`).
    pub fn add(
        &mut self,
        input: NewProduct,
        ledger: &mut TransactionLedger,
        occurred_at: DateTime<Utc>,
    ) -> InventoryResult<ProductId> {
        input.validate()?;
        let id = self
            .products
            .iter()
            .map(Product::id_typed)
            .max()
            .ok_or(InventoryError::EmptyCatalog)?
            .next();

        let NewProduct {
            name,
            category,
            unit_price,
            stock_quantity,
        } = input;
        tracing::info!(product_id = %id, %name, stock = stock_quantity, "product added");
        self.insert(
            Product::new(id, name, category, unit_price, stock_quantity),
            ledger,
            occurred_at,
        )
    }

    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id_typed() == id)
    }

    /// Like [`Catalog::find`], but a miss is an error.
    pub fn get(&self, id: ProductId) -> InventoryResult<&Product> {
        self.find(id).ok_or(InventoryError::ProductNotFound(id))
    }

    fn get_mut(&mut self, id: ProductId) -> InventoryResult<&mut Product> {
        self.products
            .iter_mut()
            .find(|p| p.id_typed() == id)
            .ok_or(InventoryError::ProductNotFound(id))
    }

    /// Sum of `unit_price * stock` over every product.
    /// Sum of every product's stock value. Fails rather than clamp when the
    /// total leaves the `Money` range.
    pub fn total_value(&self) -> InventoryResult<Money> {
        self.products
            .iter()
            .try_fold(Money::ZERO, |total, product| total.checked_add(product.stock_value()?))
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Increase stock and record a `restock` entry.
    pub fn receive_stock(
        &mut self,
        id: ProductId,
        quantity: u32,
        ledger: &mut TransactionLedger,
        occurred_at: DateTime<Utc>,
    ) -> InventoryResult<u32> {
        if quantity == 0 {
            return Err(InventoryError::validation("restock quantity must be positive"));
        }
        let product = self.get_mut(id)?;
        product.receive(quantity)?;
        let on_hand = product.stock_quantity();
        ledger.record_at(id, RESTOCK, i64::from(quantity), occurred_at);
        Ok(on_hand)
    }

    /// Decrease stock for a fulfilled order and record the withdrawal.
    pub fn issue_stock(
        &mut self,
        id: ProductId,
        quantity: u32,
        ledger: &mut TransactionLedger,
        occurred_at: DateTime<Utc>,
    ) -> InventoryResult<u32> {
        let product = self.get_mut(id)?;
        product.issue(quantity)?;
        let on_hand = product.stock_quantity();
        ledger.record_at(id, ORDER_FULFILLED, -i64::from(quantity), occurred_at);
        Ok(on_hand)
    }
}
