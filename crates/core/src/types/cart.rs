//! Cart line item type.
//!
//! A `CartItem` is built transiently from a [`Product`] for a single
//! add-to-cart call and serialized to the backend as camelCase JSON. The
//! storefront never retains cart state itself - the backend owns the cart.

use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::price::Price;
use super::product::Product;

/// A line item posted to `/api/cart/add`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Product ID.
    pub id: ProductId,
    /// Product name at the time of adding.
    pub name: String,
    /// Product category.
    pub category: String,
    /// Unit price at the time of adding.
    pub price: Price,
    /// Product image URL.
    pub image: String,
    /// Number of units.
    pub quantity: u32,
    /// Selected size, if the product has sizes.
    pub size: Option<String>,
    /// Selected color, if the product has colors.
    pub color: Option<String>,
}

impl CartItem {
    /// Build a line item from a product plus the shopper's selections.
    #[must_use]
    pub fn from_product(
        product: &Product,
        quantity: u32,
        size: Option<String>,
        color: Option<String>,
    ) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            category: product.category.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity,
            size,
            color,
        }
    }
}
