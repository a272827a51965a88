//! Typed ID wrapper for products.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::num::ParseIntError;
use std::str::FromStr;

/// A strongly-typed wrapper for product IDs.
///
/// Product IDs are assigned by the caller; nothing in the catalog generates
/// them. The zero ID marks the empty product sentinel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i32);

impl ProductId {
    /// Creates a product ID from a raw integer.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Parses a product ID from a decimal string.
    pub fn parse(s: &str) -> Result<Self, ParseIntError> {
        s.trim().parse::<i32>().map(Self)
    }

    /// Returns the inner integer.
    #[must_use]
    pub const fn into_inner(self) -> i32 {
        self.0
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProductId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<i32> for ProductId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl From<ProductId> for i32 {
    fn from(id: ProductId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_parsing() {
        assert_eq!(ProductId::parse("42").unwrap(), ProductId(42));
        assert_eq!(ProductId::parse(" 7 ").unwrap(), ProductId(7));
        assert_eq!(ProductId::parse("-3").unwrap(), ProductId(-3));
        assert!(ProductId::parse("abc").is_err());
        assert!(ProductId::parse("").is_err());
    }

    #[test]
    fn test_product_id_display() {
        assert_eq!(ProductId::new(5).to_string(), "5");
    }

    #[test]
    fn test_product_id_serializes_as_plain_integer() {
        assert_eq!(serde_json::to_string(&ProductId(12)).unwrap(), "12");
        let id: ProductId = serde_json::from_str("12").unwrap();
        assert_eq!(id, ProductId(12));
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(ProductId::default().into_inner(), 0);
    }
}
