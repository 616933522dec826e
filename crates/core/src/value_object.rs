//! Value object trait: equality by value, not identity.
//!
//! Value objects have no identity. They are defined entirely by their attribute
//! values, so two value objects with the same values are equal.

use crate::error::InventoryError;

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by value. To "modify" one, build a
/// new one.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

/// Non-negative monetary amount, held in the smallest currency unit (cents).
///
/// Single currency only. Unit prices never exceed [`Money::MAX_CENTS`]; the
/// wider backing integer holds `price * quantity` for any `u64` quantity.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money {
    cents: u128,
}

impl ValueObject for Money {}

impl Money {
    pub const ZERO: Money = Money { cents: 0 };

    /// Largest amount accepted from a decimal value (10 billion in major units).
    ///
    /// Below this bound every cent value survives a trip through `f64` exactly.
    pub const MAX_CENTS: u64 = 1_000_000_000_000;

    pub fn from_cents(cents: u64) -> Self {
        Self {
            cents: u128::from(cents),
        }
    }

    /// Build from a decimal amount in major units (e.g. `19.99`).
    ///
    /// Rejects negative, non-finite, oversized values and values finer than a cent.
    pub fn from_major(amount: f64) -> Result<Self, InventoryError> {
        if !amount.is_finite() {
            return Err(InventoryError::invalid_data("price must be a finite number"));
        }
        if amount < 0.0 {
            return Err(InventoryError::invalid_data(format!(
                "price cannot be negative (got {amount})"
            )));
        }

        let scaled = amount * 100.0;
        let rounded = scaled.round();
        if rounded > Self::MAX_CENTS as f64 {
            return Err(InventoryError::invalid_data(format!(
                "price is too large (got {amount})"
            )));
        }
        // Exact cent values land within a few ulps of an integer once scaled.
        if (scaled - rounded).abs() > scaled.max(1.0) * f64::EPSILON * 4.0 {
            return Err(InventoryError::invalid_data(format!(
                "price cannot have more than two decimal places (got {amount})"
            )));
        }

        Ok(Self {
            cents: rounded as u128,
        })
    }

    pub fn cents(&self) -> u128 {
        self.cents
    }

    /// Amount in major units, as written to inventory files.
    pub fn to_major(&self) -> f64 {
        self.cents as f64 / 100.0
    }

    /// Value of `quantity` units at this unit price.
    ///
    /// Exact whenever `self` came from a `u64` cent amount.
    pub fn times(&self, quantity: u64) -> Money {
        Money {
            cents: self.cents.saturating_mul(u128::from(quantity)),
        }
    }
}

/// Saturating; unreachable below ten million entries at maximum price and stock.
impl core::ops::Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money {
            cents: self.cents.saturating_add(rhs.cents),
        }
    }
}

impl core::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, m| acc + m)
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "${}.{:02}", self.cents / 100, self.cents % 100)
    }
}
