//! Product entity.

use crate::ProductId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A catalog product.
///
/// The same shape is stored as a document in the search index and as the
/// JSON value of the `product:{id}` cache entry. `Default` yields the empty
/// product that a rejected write hands back in place of an error.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Caller-assigned identifier, shared by both storage tiers.
    pub id: ProductId,

    /// Human-readable label.
    #[serde(default)]
    pub name: String,

    /// Free-text description.
    #[serde(default)]
    pub description: String,

    /// Unit price. Non-negative by convention only.
    #[serde(default)]
    pub price: Decimal,

    /// Market launch date.
    #[serde(default)]
    pub launch_date: DateTime<Utc>,

    /// Free-text category.
    #[serde(default)]
    pub category: String,
}

impl Product {
    /// Creates a product with the given identity and name; other fields are empty.
    #[must_use]
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// The empty product returned when the document store rejects a write.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Placeholder for an id that neither tier knows about.
    #[must_use]
    pub fn placeholder(id: ProductId) -> Self {
        Self {
            id,
            name: format!("Product {id}"),
            ..Self::default()
        }
    }

    /// Checks whether this is the empty sentinel.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the price.
    #[must_use]
    pub fn with_price(mut self, price: Decimal) -> Self {
        self.price = price;
        self
    }

    /// Sets the launch date.
    #[must_use]
    pub fn with_launch_date(mut self, launch_date: DateTime<Utc>) -> Self {
        self.launch_date = launch_date;
        self
    }

    /// Sets the category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::str::FromStr;

    fn widget() -> Product {
        Product::new(1, "Widget")
            .with_description("A very useful widget")
            .with_price(Decimal::from_str("19.99").unwrap())
            .with_launch_date(Utc.with_ymd_and_hms(2021, 3, 14, 15, 9, 26).unwrap())
            .with_category("tools")
    }

    #[test]
    fn test_empty_product_is_sentinel() {
        let empty = Product::empty();
        assert!(empty.is_empty());
        assert_eq!(empty.id, ProductId(0));
        assert!(!widget().is_empty());
    }

    #[test]
    fn test_id_only_product_is_not_empty() {
        assert!(!Product::new(3, "").is_empty());
    }

    #[test]
    fn test_placeholder_is_tagged_with_id() {
        let placeholder = Product::placeholder(ProductId(5));
        assert_eq!(placeholder.id, ProductId(5));
        assert_eq!(placeholder.name, "Product 5");
        assert!(!placeholder.is_empty());
    }

    #[test]
    fn test_wire_field_names_are_camel_case() {
        let json = serde_json::to_value(widget()).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Widget");
        assert_eq!(json["description"], "A very useful widget");
        assert_eq!(json["price"], "19.99");
        assert_eq!(json["launchDate"], "2021-03-14T15:09:26Z");
        assert_eq!(json["category"], "tools");
    }

    #[test]
    fn test_missing_fields_default() {
        let product: Product = serde_json::from_str(r#"{"id": 9}"#).unwrap();
        assert_eq!(product.id, ProductId(9));
        assert!(product.name.is_empty());
        assert_eq!(product.price, Decimal::ZERO);
    }

    #[test]
    fn test_numeric_price_is_accepted() {
        let product: Product = serde_json::from_str(r#"{"id": 2, "price": 12.5}"#).unwrap();
        assert_eq!(product.price, Decimal::from_str("12.5").unwrap());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_price() -> impl Strategy<Value = Decimal> {
            prop_oneof![
                Just(Decimal::ZERO),
                Just(Decimal::MAX),
                Just(Decimal::MIN),
                Just(Decimal::new(1, 28)),
                (any::<i64>(), 0u32..=28).prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale)),
            ]
        }

        fn arb_launch_date() -> impl Strategy<Value = DateTime<Utc>> {
            prop_oneof![
                Just(Utc.timestamp_opt(0, 0).unwrap()),
                Just(Utc.with_ymd_and_hms(9999, 12, 31, 23, 59, 59).unwrap()),
                (0i64..253_402_300_799).prop_map(|secs| Utc.timestamp_opt(secs, 0).unwrap()),
            ]
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: encoding then decoding a product preserves every field.
            #[test]
            fn json_round_trip_preserves_all_fields(
                id in any::<i32>(),
                name in ".{0,64}",
                description in ".{0,256}",
                price in arb_price(),
                launch_date in arb_launch_date(),
                category in "[A-Za-z0-9 _-]{0,32}",
            ) {
                let product = Product {
                    id: ProductId(id),
                    name,
                    description,
                    price,
                    launch_date,
                    category,
                };

                let encoded = serde_json::to_string(&product).unwrap();
                let decoded: Product = serde_json::from_str(&encoded).unwrap();

                prop_assert_eq!(decoded, product);
            }
        }
    }
}
