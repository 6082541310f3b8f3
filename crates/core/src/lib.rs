//! Apex Sports Core - Shared domain library.
//!
//! This crate provides the domain types and the catalog logic used by the
//! storefront:
//!
//! - [`types`] - Products, cart items, user profiles, prices, and IDs
//! - [`catalog`] - Filtering, ordering, and home-page sectioning
//! - [`pagination`] - Fixed-size page slicing of filtered product lists
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients, no async. Everything the storefront renders is computed here
//! from an in-memory product list, which keeps the interesting behavior
//! testable without a running backend.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod pagination;
pub mod types;

pub use types::*;
