//! Composite products and recursive cost rollup.

use std::collections::{HashMap, HashSet};

use stockroom_core::{InventoryError, InventoryResult, Money, ProductId};

use crate::catalog::Catalog;

/// Composite product id -> ordered component ids.
#[derive(Debug, Clone, Default)]
pub struct CompositeIndex {
    links: HashMap<ProductId, Vec<ProductId>>,
}

impl CompositeIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Define (or redefine) the parts of a composite product.
    pub fn define(&mut self, composite: ProductId, parts: Vec<ProductId>) -> InventoryResult<()> {
        if parts.is_empty() {
            return Err(InventoryError::validation(format!(
                "composite {composite} needs at least one part"
            )));
        }
        self.insert(composite, parts);
        Ok(())
    }

    pub(crate) fn insert(&mut self, composite: ProductId, parts: Vec<ProductId>) {
        self.links.insert(composite, parts);
    }

    pub fn parts(&self, id: ProductId) -> Option<&[ProductId]> {
        self.links.get(&id).map(Vec::as_slice)
    }

    pub fn is_composite(&self, id: ProductId) -> bool {
        self.links.contains_key(&id)
    }

    /// Composite ids in ascending order.
    pub fn composites(&self) -> Vec<ProductId> {
        let mut ids: Vec<ProductId> = self.links.keys().copied().collect();
        ids.sort();
        ids
    }

    /// Check that every referenced part resolves and no definition is cyclic.
    pub fn validate(&self, catalog: &Catalog) -> InventoryResult<()> {
        for composite in self.composites() {
            for part in self.parts(composite).unwrap_or_default() {
                if !self.is_composite(*part) && catalog.find(*part).is_none() {
                    return Err(InventoryError::ProductNotFound(*part));
                }
            }
            CostCalculator::new(catalog, self).cost(composite)?;
        }
        Ok(())
    }
}

/// Read-only cost resolver over a catalog and its composite index.
#[derive(Debug, Clone, Copy)]
pub struct CostCalculator<'a> {
    catalog: &'a Catalog,
    composites: &'a CompositeIndex,
}

impl<'a> CostCalculator<'a> {
    pub fn new(catalog: &'a Catalog, composites: &'a CompositeIndex) -> Self {
        Self { catalog, composites }
    }

    /// Cost of a product.
    ///
    /// Composites cost the sum of their parts, transitively. Plain products
    /// cost their unit price. Ids found in neither place cost zero.
    pub fn cost(&self, id: ProductId) -> InventoryResult<Money> {
        let mut path = HashSet::new();
        self.resolve(id, &mut path)
    }

    // `path` holds the composites on the current descent only, so a part shared
    // by two branches is not mistaken for a cycle.
    fn resolve(&self, id: ProductId, path: &mut HashSet<ProductId>) -> InventoryResult<Money> {
        let Some(parts) = self.composites.parts(id) else {
            let price = self.catalog.find(id).map(|p| p.unit_price());
            if price.is_none() {
                tracing::debug!(product_id = %id, "unknown product costed as zero");
            }
            return Ok(price.unwrap_or(Money::ZERO));
        };

        if !path.insert(id) {
            return Err(InventoryError::CyclicCompositeDefinition(id));
        }
        let mut total = Money::ZERO;
        for part in parts {
            total = total.checked_add(self.resolve(*part, path)?)?;
        }
        path.remove(&id);
        Ok(total)
    }
}
