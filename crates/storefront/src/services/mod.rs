//! Business logic services for the storefront.
//!
//! # Services
//!
//! - `session` - Session synchronisation with the backend's auth state

pub mod session;

pub use session::{SessionState, sync_session};
