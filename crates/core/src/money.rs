//! Monetary amounts.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{InventoryError, InventoryResult};

/// A non-negative amount in the smallest currency unit (cents).
///
/// Kept as an integer so that sums such as a composite cost rollup are exact.
/// Arithmetic is checked: an amount past `u64::MAX` cents is an error, never a
/// clamped value.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Whole units plus cents, e.g. `Money::new(75, 50)` is 75.50.
    pub const fn new(units: u64, cents: u64) -> Self {
        Self(units * 100 + cents)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    /// Value of `quantity` items at this unit price.
    pub fn checked_times(self, quantity: u32) -> InventoryResult<Self> {
        self.0
            .checked_mul(u64::from(quantity))
            .map(Self)
            .ok_or_else(out_of_range)
    }

    pub fn checked_add(self, rhs: Money) -> InventoryResult<Self> {
        self.0.checked_add(rhs.0).map(Self).ok_or_else(out_of_range)
    }

    /// Sum of `amounts`; fails on the first partial sum out of range.
    pub fn checked_sum(amounts: impl IntoIterator<Item = Money>) -> InventoryResult<Self> {
        amounts
            .into_iter()
            .try_fold(Money::ZERO, |total, amount| total.checked_add(amount))
    }

    /// Render with thousands separators, e.g. `26,515.00`.
    pub fn grouped(self) -> String {
        let units = (self.0 / 100).to_string();
        let mut out = String::with_capacity(units.len() + units.len() / 3 + 3);
        for (i, ch) in units.chars().enumerate() {
            if i > 0 && (units.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }
        format!("{out}.{:02}", self.0 % 100)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = format!("{}.{:02}", self.0 / 100, self.0 % 100);
        f.pad(&text)
    }
}

fn out_of_range() -> InventoryError {
    InventoryError::validation("amount exceeds the largest representable value")
}

/// Parses `120`, `75.5` or `75.50`. Signs, separators and sub-cent digits are rejected.
impl FromStr for Money {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InventoryError::invalid_numeric("price", s);
        let text = s.trim();
        let (whole, frac) = text.split_once('.').unwrap_or((text, ""));

        if whole.is_empty() && frac.is_empty() {
            return Err(invalid());
        }
        if !whole.bytes().all(|b| b.is_ascii_digit())
            || !frac.bytes().all(|b| b.is_ascii_digit())
            || frac.len() > 2
        {
            return Err(invalid());
        }

        let units: u64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };
        let cents: u64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<u64>().map_err(|_| invalid())? * 10,
            _ => frac.parse().map_err(|_| invalid())?,
        };

        units
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents))
            .map(Money)
            .ok_or_else(invalid)
    }
}
