//! Domain error model.

use thiserror::Error;

use crate::id::ProductId;

/// Result type used across the domain layer.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Domain-level error.
///
/// Every variant is recoverable: the shell reports it and prompts again.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// User-entered text could not be read as the number a field expects.
    #[error("invalid numeric input for {field}: {value:?}")]
    InvalidNumericInput { field: &'static str, value: String },

    /// A supplied product id is not in the catalog.
    #[error("product {0} not found")]
    ProductNotFound(ProductId),

    /// New-id assignment needs at least one existing product.
    #[error("catalog is empty; cannot derive the next product id")]
    EmptyCatalog,

    /// A composite product lists itself among its own parts, directly or transitively.
    #[error("composite product {0} is defined in terms of itself")]
    CyclicCompositeDefinition(ProductId),

    /// A value failed validation (e.g. blank name, zero quantity).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A conflict occurred (e.g. duplicate product id).
    #[error("conflict: {0}")]
    Conflict(String),
}

impl InventoryError {
    pub fn invalid_numeric(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidNumericInput {
            field,
            value: value.into(),
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn not_found(id: ProductId) -> Self {
        Self::ProductNotFound(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        let err = InventoryError::invalid_numeric("price", "abc");
        assert_eq!(err.to_string(), "invalid numeric input for price: \"abc\"");

        let err = InventoryError::not_found(ProductId::new(999));
        assert_eq!(err.to_string(), "product 999 not found");
    }
}
