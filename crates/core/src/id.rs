//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::InventoryError;

/// Identifier of a catalog product (composite or plain).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u32);

/// Identifier of a customer order.
///
/// Ordered numerically; ids handed out within one run are strictly increasing.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(u64);

macro_rules! impl_numeric_newtype {
    ($t:ty, $inner:ty, $field:literal) => {
        impl $t {
            pub const fn new(value: $inner) -> Self {
                Self(value)
            }

            pub const fn get(self) -> $inner {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<$inner> for $t {
            fn from(value: $inner) -> Self {
                Self(value)
            }
        }

        impl From<$t> for $inner {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = InventoryError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim()
                    .parse::<$inner>()
                    .map(Self)
                    .map_err(|_| InventoryError::invalid_numeric($field, s))
            }
        }
    };
}

impl_numeric_newtype!(ProductId, u32, "product id");
impl_numeric_newtype!(OrderId, u64, "order id");

impl ProductId {
    /// The id that follows this one.
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_trimmed_digits() {
        assert_eq!(" 101 ".parse::<ProductId>().unwrap(), ProductId::new(101));
        assert!(matches!(
            "abc".parse::<ProductId>(),
            Err(InventoryError::InvalidNumericInput { field: "product id", .. })
        ));
        assert!("-1".parse::<OrderId>().is_err());
    }

    #[test]
    fn order_ids_compare_numerically() {
        assert!(OrderId::new(3) < OrderId::new(5));
        assert_eq!(ProductId::new(202).next(), ProductId::new(203));
    }
}
