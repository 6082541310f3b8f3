//! Core types for the Apex Sports storefront.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart;
pub mod id;
pub mod price;
pub mod product;
pub mod user;

pub use cart::CartItem;
pub use id::*;
pub use price::Price;
pub use product::Product;
pub use user::UserProfile;
