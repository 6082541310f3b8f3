//! Product domain type.
//!
//! Products are owned by the backend and immutable from the storefront's
//! perspective; this type mirrors the JSON shape served by `/api/products`.

use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::price::Price;

/// A catalog product as served by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Category slug. The backend uses lowercase slugs ("men", "women",
    /// "accessories") but the field is free-form and matched verbatim.
    pub category: String,
    /// Current (possibly discounted) price.
    pub price: Price,
    /// Product image URL.
    pub image: String,
    /// Discount percentage in `0..=100`, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_percent: Option<u8>,
}

impl Product {
    /// Whether this product carries a non-zero discount.
    #[must_use]
    pub fn is_discounted(&self) -> bool {
        self.discount_percent.is_some_and(|p| p > 0)
    }

    /// The strike-through pre-discount price, if the product is discounted.
    #[must_use]
    pub fn old_price(&self) -> Option<Price> {
        self.price.undiscount(self.discount_percent.unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, price: i64, discount_percent: Option<u8>) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            category: "men".to_string(),
            price: Price::new(price),
            image: "https://example.com/p.jpg".to_string(),
            discount_percent,
        }
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "id": 1,
            "name": "Trail Runner",
            "category": "men",
            "price": 1250000,
            "image": "https://example.com/shoe.jpg",
            "discountPercent": 20
        }"#;
        let p: Product = serde_json::from_str(json).expect("valid product");
        assert_eq!(p.id, ProductId::new(1));
        assert_eq!(p.price, Price::new(1_250_000));
        assert_eq!(p.discount_percent, Some(20));
    }

    #[test]
    fn test_deserialize_missing_discount() {
        let json = r#"{"id":2,"name":"Cap","category":"accessories","price":90000,"image":"x"}"#;
        let p: Product = serde_json::from_str(json).expect("valid product");
        assert_eq!(p.discount_percent, None);
        assert!(!p.is_discounted());
    }

    #[test]
    fn test_old_price_example_from_catalog() {
        // id 1 at 100 with 50% off shows an old price of 200; id 2 shows none
        let discounted = product(1, 100, Some(50));
        let plain = product(2, 200, None);
        assert_eq!(discounted.old_price(), Some(Price::new(200)));
        assert_eq!(plain.old_price(), None);
    }

    #[test]
    fn test_zero_percent_is_not_discounted() {
        let p = product(3, 100, Some(0));
        assert!(!p.is_discounted());
        assert_eq!(p.old_price(), None);
    }
}
