//! Validated stock quantity.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Quantity`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum QuantityError {
    /// The value is zero or negative.
    #[error("quantity must be greater than zero (got {0})")]
    NotPositive(Decimal),
}

/// A stock quantity - how much of a product is held or planned.
///
/// Quantities are decimal, not integral (half a litre of milk is a valid
/// amount), and must be strictly positive. The invariant is enforced at
/// construction and on deserialization, so any `Quantity` in the system
/// is known to be valid.
///
/// ## Examples
///
/// ```
/// use frostbox_core::Quantity;
/// use rust_decimal::Decimal;
///
/// assert!(Quantity::new(Decimal::new(2, 0)).is_ok());
/// assert!(Quantity::new(Decimal::new(25, 2)).is_ok()); // 0.25
/// assert!(Quantity::new(Decimal::ZERO).is_err());
/// assert!(Quantity::new(Decimal::new(-1, 0)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Quantity(Decimal);

impl Quantity {
    /// Create a new `Quantity`.
    ///
    /// # Errors
    ///
    /// Returns [`QuantityError::NotPositive`] if `value <= 0`.
    pub fn new(value: Decimal) -> Result<Self, QuantityError> {
        if value <= Decimal::ZERO {
            return Err(QuantityError::NotPositive(value));
        }
        Ok(Self(value))
    }

    /// Get the underlying decimal value.
    #[must_use]
    pub const fn as_decimal(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl TryFrom<Decimal> for Quantity {
    type Error = QuantityError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Quantity> for Decimal {
    fn from(quantity: Quantity) -> Self {
        quantity.0
    }
}

impl std::str::FromStr for Quantity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: Decimal = s.parse().map_err(|e| format!("invalid number: {e}"))?;
        Self::new(value).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_values() {
        assert!(Quantity::new(Decimal::ONE).is_ok());
        assert!(Quantity::new(Decimal::new(1, 2)).is_ok()); // 0.01
        assert!(Quantity::new(Decimal::new(1500, 1)).is_ok()); // 150.0
    }

    #[test]
    fn test_zero_rejected() {
        assert_eq!(
            Quantity::new(Decimal::ZERO),
            Err(QuantityError::NotPositive(Decimal::ZERO))
        );
    }

    #[test]
    fn test_negative_rejected() {
        let neg = Decimal::new(-25, 2);
        assert_eq!(Quantity::new(neg), Err(QuantityError::NotPositive(neg)));
    }

    #[test]
    fn test_deserialize_enforces_invariant() {
        // Serde goes through TryFrom<Decimal>, so stored or wire data
        // cannot smuggle in a non-positive quantity.
        assert!(serde_json::from_str::<Quantity>("2.5").is_ok());
        assert!(serde_json::from_str::<Quantity>("0").is_err());
        assert!(serde_json::from_str::<Quantity>("-1").is_err());
    }

    #[test]
    fn test_serializes_as_number() {
        let quantity = Quantity::new(Decimal::new(2, 0)).unwrap();
        let json = serde_json::to_string(&quantity).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value.is_number());
    }

    #[test]
    fn test_display_normalizes_trailing_zeroes() {
        let quantity: Quantity = "2.50".parse().unwrap();
        assert_eq!(quantity.to_string(), "2.5");
    }

    #[test]
    fn test_from_str() {
        let quantity: Quantity = "0.25".parse().unwrap();
        assert_eq!(quantity.as_decimal(), Decimal::new(25, 2));
        assert!("0".parse::<Quantity>().is_err());
        assert!("abc".parse::<Quantity>().is_err());
    }
}
