use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, ValueObject};

pub const NEGATIVE_PRICE: &str = "Price cannot be negative";
pub const NEGATIVE_QUANTITY: &str = "Quantity cannot be negative";
pub const PRICE_NOT_A_NUMBER: &str = "Price must be a number";
pub const PRICE_NOT_FINITE: &str = "Price must be finite";

/// An entry for sale.
///
/// Fields are fixed at construction. Equality is structural over all four
/// fields, so two items built from the same values are the same item as far
/// as a [`Grouping`](crate::Grouping) is concerned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ItemRecord")]
pub struct Item {
    name: String,
    description: String,
    price: f64,
    quantity: u64,
}

impl ValueObject for Item {}

impl Item {
    /// Build an item, rejecting a negative price or quantity.
    ///
    /// Price is checked first. A non-finite price is rejected as well, since
    /// JSON has no representation for it.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        quantity: i64,
    ) -> DomainResult<Self> {
        if price.is_nan() {
            return Err(DomainError::validation(PRICE_NOT_A_NUMBER));
        }
        if price < 0.0 {
            return Err(DomainError::validation(NEGATIVE_PRICE));
        }
        if price.is_infinite() {
            return Err(DomainError::validation(PRICE_NOT_FINITE));
        }
        let quantity =
            u64::try_from(quantity).map_err(|_| DomainError::validation(NEGATIVE_QUANTITY))?;

        Ok(Self {
            name: name.into(),
            description: description.into(),
            price,
            quantity,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }
}

/// Unvalidated wire shape; deserialization funnels through [`Item::new`].
#[derive(Deserialize)]
struct ItemRecord {
    name: String,
    description: String,
    price: f64,
    quantity: i64,
}

impl TryFrom<ItemRecord> for Item {
    type Error = DomainError;

    fn try_from(record: ItemRecord) -> Result<Self, Self::Error> {
        Item::new(record.name, record.description, record.price, record.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_item_keeps_its_fields() {
        let item = Item::new("Phone", "desc", 29999.99, 5).unwrap();
        assert_eq!(item.name(), "Phone");
        assert_eq!(item.description(), "desc");
        assert_eq!(item.price(), 29999.99);
        assert_eq!(item.quantity(), 5);
    }

    #[test]
    fn zero_price_and_quantity_are_accepted() {
        let item = Item::new("Sample", "free", 0.0, 0).unwrap();
        assert_eq!(item.price(), 0.0);
        assert_eq!(item.quantity(), 0);
    }

    #[test]
    fn rejects_negative_price() {
        let err = Item::new("Phone", "desc", -1.0, 5).unwrap_err();
        assert_eq!(err, DomainError::Validation(NEGATIVE_PRICE.to_string()));
        assert!(err.to_string().contains("Price cannot be negative"));
    }

    #[test]
    fn rejects_negative_quantity() {
        let err = Item::new("Phone", "desc", 100.0, -10).unwrap_err();
        assert_eq!(err, DomainError::Validation(NEGATIVE_QUANTITY.to_string()));
        assert!(err.to_string().contains("Quantity cannot be negative"));
    }

    #[test]
    fn price_is_checked_before_quantity() {
        let err = Item::new("Phone", "desc", -1.0, -1).unwrap_err();
        assert_eq!(err.message(), NEGATIVE_PRICE);
    }

    #[test]
    fn rejects_nan_price() {
        let err = Item::new("Phone", "desc", f64::NAN, 1).unwrap_err();
        assert_eq!(err.message(), PRICE_NOT_A_NUMBER);
    }

    #[test]
    fn rejects_infinite_price() {
        let err = Item::new("Phone", "desc", f64::INFINITY, 1).unwrap_err();
        assert_eq!(err.message(), PRICE_NOT_FINITE);

        let err = Item::new("Phone", "desc", f64::NEG_INFINITY, 1).unwrap_err();
        assert_eq!(err.message(), NEGATIVE_PRICE);
    }

    #[test]
    fn serialized_item_deserializes_back() {
        let item = Item::new("Phone", "desc", 29999.99, 1).unwrap();
        let json = serde_json::to_string(&item).unwrap();
        let back: Item = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn equality_is_structural() {
        let a = Item::new("Phone", "desc", 10.0, 1).unwrap();
        let b = Item::new("Phone", "desc", 10.0, 1).unwrap();
        let c = Item::new("Phone", "desc", 10.0, 2).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn deserialize_validates() {
        let ok: Item = serde_json::from_str(
            r#"{"name":"Phone","description":"desc","price":12.5,"quantity":3}"#,
        )
        .unwrap();
        assert_eq!(ok, Item::new("Phone", "desc", 12.5, 3).unwrap());

        let err = serde_json::from_str::<Item>(
            r#"{"name":"Phone","description":"desc","price":-12.5,"quantity":3}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Price cannot be negative"));

        let err = serde_json::from_str::<Item>(
            r#"{"name":"Phone","description":"desc","price":12.5,"quantity":-3}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Quantity cannot be negative"));
    }

    #[test]
    fn serializes_all_fields() {
        let item = Item::new("Phone", "desc", 12.5, 3).unwrap();
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"name": "Phone", "description": "desc", "price": 12.5, "quantity": 3})
        );
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: non-negative inputs always build and round-trip exactly.
            #[test]
            fn non_negative_inputs_round_trip(
                name in "[A-Za-z][A-Za-z0-9 ]{0,40}",
                description in "[A-Za-z0-9 ]{0,80}",
                price in 0.0f64..1.0e12,
                quantity in 0i64..=i64::MAX,
            ) {
                let item = Item::new(name.clone(), description.clone(), price, quantity).unwrap();
                prop_assert_eq!(item.name(), name.as_str());
                prop_assert_eq!(item.description(), description.as_str());
                prop_assert_eq!(item.price(), price);
                prop_assert_eq!(item.quantity(), quantity as u64);
            }

            /// Property: any negative price fails with the price message.
            #[test]
            fn negative_price_always_fails(
                price in -1.0e12f64..-1.0e-9,
                quantity in any::<i64>(),
            ) {
                let err = Item::new("x", "y", price, quantity).unwrap_err();
                prop_assert_eq!(err.message(), NEGATIVE_PRICE);
            }

            /// Property: any negative quantity with a valid price fails with the quantity message.
            #[test]
            fn negative_quantity_always_fails(
                price in 0.0f64..1.0e12,
                quantity in i64::MIN..0,
            ) {
                let err = Item::new("x", "y", price, quantity).unwrap_err();
                prop_assert_eq!(err.message(), NEGATIVE_QUANTITY);
            }
        }
    }
}
