//! Presentation-side models for the storefront.
//!
//! Domain types (products, cart items, user profiles) live in
//! `apex-sports-core`; this module holds types that only make sense on the
//! web side, such as session-stored state.

pub mod session;

pub use session::keys as session_keys;
